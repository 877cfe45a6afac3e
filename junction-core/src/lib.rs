//! Junction core library.
//!
//! Connects junction boxes in 3D space. Every unordered pair of points is
//! ranked by Euclidean distance and the ranked pairs are applied to a
//! union-find partition to answer two queries: the sizes of the circuits
//! after a bounded number of connection attempts, and the connection that
//! finally joins every point into one circuit.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the crate emits:
//!
//! - `junction_ranked_edges` (counter)
//! - `junction_union_attempts` (counter)
//! - `junction_union_merges` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod connectivity;
mod error;
mod playground;
mod points;
mod ranking;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_ATTEMPT_LIMIT, DEFAULT_CIRCUIT_COUNT, PlaygroundBuilder},
    connectivity::{CircuitSummary, ClosingConnection, connect_attempts, connect_until_single},
    error::{JunctionError, JunctionErrorCode, Query, Result},
    playground::{Playground, Solution},
    points::{LoadError, ParseError, ParseErrorCode, Point, PointSet},
    ranking::{CandidateEdge, RankedEdges, pair_count, rank_edges},
    union_find::DisjointSet,
};
