//! Orchestration for the junction box playground.
//!
//! Provides the [`Playground`] entry point, which ranks candidate edges for a
//! point set and answers the circuits and closing-connection queries.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    connectivity::{CircuitSummary, ClosingConnection, connect_attempts, connect_until_single},
    error::JunctionError,
    points::PointSet,
    ranking::{RankedEdges, rank_edges},
};

/// Both query results for one point set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    circuits: CircuitSummary,
    closing: ClosingConnection,
}

impl Solution {
    /// Returns the circuit summary after the configured attempts.
    #[must_use]
    #[rustfmt::skip]
    pub fn circuits(&self) -> &CircuitSummary { &self.circuits }

    /// Returns the connection that joined every point.
    #[must_use]
    #[rustfmt::skip]
    pub fn closing(&self) -> &ClosingConnection { &self.closing }
}

/// Entry point for connecting junction boxes.
///
/// # Examples
/// ```
/// use junction_core::{PlaygroundBuilder, PointSet};
///
/// let points = PointSet::parse("demo", "0,0,0\n1,0,0\n5,0,0\n6,0,0\n20,0,0")?;
/// let playground = PlaygroundBuilder::new()
///     .with_attempt_limit(2)
///     .build()?;
/// let solution = playground.solve(&points)?;
/// assert_eq!(solution.circuits().product(), 4);
/// assert_eq!(solution.closing().x_product(), 120);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Playground {
    attempt_limit: usize,
    circuit_count: NonZeroUsize,
}

impl Playground {
    pub(crate) fn new(attempt_limit: usize, circuit_count: NonZeroUsize) -> Self {
        Self {
            attempt_limit,
            circuit_count,
        }
    }

    /// Returns the number of connection attempts made by [`Self::circuits`].
    #[must_use]
    pub fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    /// Returns how many of the largest circuits are multiplied.
    #[must_use]
    pub fn circuit_count(&self) -> NonZeroUsize {
        self.circuit_count
    }

    /// Ranks the candidate edges of `points`.
    ///
    /// # Errors
    /// Returns [`JunctionError::EmptyPointSet`] when `points` is empty.
    #[instrument(
        name = "core.rank",
        err,
        skip(self, points),
        fields(point_set = %points.name(), points = points.len()),
    )]
    pub fn rank(&self, points: &PointSet) -> Result<RankedEdges> {
        if points.is_empty() {
            return Err(JunctionError::EmptyPointSet {
                point_set: points.name().to_owned(),
            });
        }
        let edges = rank_edges(points);
        info!(edges = edges.len(), "ranked candidate edges");
        Ok(edges)
    }

    /// Connects the closest pairs for the configured number of attempts and
    /// summarises the resulting circuits.
    ///
    /// # Errors
    /// Returns [`JunctionError::EmptyPointSet`] for an empty set and the
    /// precondition errors of [`connect_attempts`].
    #[instrument(
        name = "core.circuits",
        err,
        skip(self, points),
        fields(
            point_set = %points.name(),
            points = points.len(),
            attempt_limit = self.attempt_limit,
            circuit_count = self.circuit_count.get(),
        ),
    )]
    pub fn circuits(&self, points: &PointSet) -> Result<CircuitSummary> {
        let edges = self.rank(points)?;
        self.circuits_from(points, &edges)
    }

    /// Connects the closest pairs until every point shares one circuit.
    ///
    /// # Errors
    /// Returns [`JunctionError::EmptyPointSet`] for an empty set and the
    /// errors of [`connect_until_single`].
    #[instrument(
        name = "core.closing_connection",
        err,
        skip(self, points),
        fields(point_set = %points.name(), points = points.len()),
    )]
    pub fn closing_connection(&self, points: &PointSet) -> Result<ClosingConnection> {
        let edges = self.rank(points)?;
        connect_until_single(points, &edges)
    }

    /// Ranks once and answers both queries.
    ///
    /// Each query drives its own partition over the shared ranking.
    ///
    /// # Errors
    /// Returns the first error raised by either query.
    #[instrument(
        name = "core.solve",
        err,
        skip(self, points),
        fields(
            point_set = %points.name(),
            points = points.len(),
            attempt_limit = self.attempt_limit,
            circuit_count = self.circuit_count.get(),
        ),
    )]
    pub fn solve(&self, points: &PointSet) -> Result<Solution> {
        let edges = self.rank(points)?;
        let circuits = self.circuits_from(points, &edges)?;
        let closing = connect_until_single(points, &edges)?;
        info!(
            circuits_product = circuits.product(),
            closing_x_product = closing.x_product(),
            "solved point set"
        );
        Ok(Solution { circuits, closing })
    }

    fn circuits_from(&self, points: &PointSet, edges: &RankedEdges) -> Result<CircuitSummary> {
        connect_attempts(points, edges, self.attempt_limit, self.circuit_count.get())
    }
}
