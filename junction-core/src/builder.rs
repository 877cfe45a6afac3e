//! Builder utilities for configuring [`Playground`] instances.
//!
//! Exposes the connection attempt limit and the number of circuits whose
//! sizes are multiplied, and validates both before construction.

use std::num::NonZeroUsize;

use crate::{Result, error::JunctionError, playground::Playground};

/// Connection attempts made by the circuits query unless overridden.
pub const DEFAULT_ATTEMPT_LIMIT: usize = 1000;

/// Number of largest circuits multiplied unless overridden.
pub const DEFAULT_CIRCUIT_COUNT: usize = 3;

/// Configures and constructs [`Playground`] instances.
///
/// # Examples
/// ```
/// use junction_core::PlaygroundBuilder;
///
/// let playground = PlaygroundBuilder::new()
///     .with_attempt_limit(10)
///     .with_circuit_count(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(playground.attempt_limit(), 10);
/// assert_eq!(playground.circuit_count().get(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PlaygroundBuilder {
    attempt_limit: usize,
    circuit_count: usize,
}

impl Default for PlaygroundBuilder {
    fn default() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            circuit_count: DEFAULT_CIRCUIT_COUNT,
        }
    }
}

impl PlaygroundBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use junction_core::PlaygroundBuilder;
    ///
    /// let builder = PlaygroundBuilder::new();
    /// assert_eq!(builder.attempt_limit(), 1000);
    /// assert_eq!(builder.circuit_count(), 3);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of connection attempts.
    #[must_use]
    pub fn with_attempt_limit(mut self, attempt_limit: usize) -> Self {
        self.attempt_limit = attempt_limit;
        self
    }

    /// Returns the configured number of connection attempts.
    #[must_use]
    pub fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    /// Overrides how many of the largest circuits are multiplied.
    #[must_use]
    pub fn with_circuit_count(mut self, circuit_count: usize) -> Self {
        self.circuit_count = circuit_count;
        self
    }

    /// Returns the configured circuit count.
    #[must_use]
    pub fn circuit_count(&self) -> usize {
        self.circuit_count
    }

    /// Validates the configuration and constructs a [`Playground`].
    ///
    /// # Errors
    /// Returns [`JunctionError::InvalidCircuitCount`] when the circuit count
    /// is zero.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{JunctionError, PlaygroundBuilder};
    ///
    /// let err = PlaygroundBuilder::new().with_circuit_count(0).build().unwrap_err();
    /// assert_eq!(err, JunctionError::InvalidCircuitCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<Playground> {
        let circuit_count =
            NonZeroUsize::new(self.circuit_count).ok_or(JunctionError::InvalidCircuitCount {
                got: self.circuit_count,
            })?;

        Ok(Playground::new(self.attempt_limit, circuit_count))
    }
}
