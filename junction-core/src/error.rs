//! Error types for the junction core library.
//!
//! Defines the error enum exposed by the connectivity API, stable error codes
//! for every variant, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// The query whose precondition was violated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Query {
    /// Connect the closest pairs for a bounded number of attempts.
    Circuits,
    /// Connect pairs until every point shares one circuit.
    ClosingConnection,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circuits => f.write_str("circuits"),
            Self::ClosingConnection => f.write_str("closing_connection"),
        }
    }
}

/// Error type produced when configuring or running a [`crate::Playground`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum JunctionError {
    /// Candidate edges were requested for a point set without points.
    #[error("point set `{point_set}` contains no points")]
    EmptyPointSet {
        /// Name of the empty point set.
        point_set: String,
    },
    /// The number of multiplied circuits must be greater than zero.
    #[error("circuit_count must be at least 1 (got {got})")]
    InvalidCircuitCount {
        /// The invalid circuit count supplied by the caller.
        got: usize,
    },
    /// The attempt limit exceeds the number of candidate edges.
    #[error("{query} needs {attempt_limit} connection attempts but only {available} candidate edges exist")]
    InsufficientEdges {
        /// Query that rejected its input.
        query: Query,
        /// Number of attempts requested by the caller.
        attempt_limit: usize,
        /// Number of ranked candidate edges.
        available: usize,
    },
    /// Too few circuits remained to form the requested product.
    #[error("{query} needs at least {required} circuits but only {found} remain")]
    InsufficientComponents {
        /// Query that rejected its input.
        query: Query,
        /// Number of circuits multiplied together.
        required: usize,
        /// Number of circuits left after the attempts.
        found: usize,
    },
    /// The point set is already one circuit, so no connection closes it.
    #[error("{points} point(s) already form a single circuit; no connection is needed")]
    AlreadyConnected {
        /// Number of points in the set.
        points: usize,
    },
    /// Every candidate edge was consumed without joining all points.
    #[error("{components} circuits remain after examining {examined} candidate edges")]
    Disconnected {
        /// Circuits left when the edges ran out.
        components: usize,
        /// Number of edges examined.
        examined: usize,
    },
    /// Multiplying the circuit sizes overflowed `u64`.
    #[error("product of the {count} largest circuit sizes does not fit in 64 bits")]
    ProductOverflow {
        /// Number of sizes being multiplied.
        count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`JunctionError`] variants.
    enum JunctionErrorCode for JunctionError {
        /// Candidate edges were requested for a point set without points.
        EmptyPointSet => EmptyPointSet { .. } => "JUNCTION_EMPTY_POINT_SET",
        /// The number of multiplied circuits must be greater than zero.
        InvalidCircuitCount => InvalidCircuitCount { .. } => "JUNCTION_INVALID_CIRCUIT_COUNT",
        /// The attempt limit exceeds the number of candidate edges.
        InsufficientEdges => InsufficientEdges { .. } => "JUNCTION_INSUFFICIENT_EDGES",
        /// Too few circuits remained to form the requested product.
        InsufficientComponents => InsufficientComponents { .. } => "JUNCTION_INSUFFICIENT_COMPONENTS",
        /// The point set is already one circuit.
        AlreadyConnected => AlreadyConnected { .. } => "JUNCTION_ALREADY_CONNECTED",
        /// Every candidate edge was consumed without joining all points.
        Disconnected => Disconnected { .. } => "JUNCTION_DISCONNECTED",
        /// Multiplying the circuit sizes overflowed `u64`.
        ProductOverflow => ProductOverflow { .. } => "JUNCTION_PRODUCT_OVERFLOW",
    }
}

impl JunctionError {
    /// Returns `true` when the error reports a violated caller precondition
    /// rather than an impossible internal state.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InsufficientEdges { .. }
                | Self::InsufficientComponents { .. }
                | Self::AlreadyConnected { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, JunctionError>;
