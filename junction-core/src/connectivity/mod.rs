//! Connectivity driver: applies ranked candidate edges to a fresh partition.
//!
//! Two stopping policies share the same ranked sequence:
//!
//! - [`connect_attempts`] calls `union` on the first `attempt_limit` edges and
//!   counts every call, including those joining points that already share a
//!   circuit. It then summarises the circuit sizes.
//! - [`connect_until_single`] counts only successful merges and stops at the
//!   edge that leaves a single circuit.
//!
//! Each call builds its own [`DisjointSet`], so the policies never observe
//! each other's state. Edges are applied strictly in ranked order.

use tracing::debug;

use crate::{
    Result,
    error::{JunctionError, Query},
    points::{Point, PointSet},
    ranking::{CandidateEdge, RankedEdges},
    union_find::DisjointSet,
};

/// Circuit sizes after a bounded number of connection attempts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitSummary {
    attempts: usize,
    merges: usize,
    sizes: Vec<usize>,
    product: u64,
}

impl CircuitSummary {
    /// Returns the number of `union` attempts performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn attempts(&self) -> usize { self.attempts }

    /// Returns how many attempts actually merged two circuits.
    #[must_use]
    #[rustfmt::skip]
    pub fn merges(&self) -> usize { self.merges }

    /// Returns every circuit size, largest first.
    #[must_use]
    #[rustfmt::skip]
    pub fn sizes(&self) -> &[usize] { &self.sizes }

    /// Returns the number of circuits left after the attempts.
    #[must_use]
    pub fn circuit_count(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the product of the largest circuit sizes.
    #[must_use]
    #[rustfmt::skip]
    pub fn product(&self) -> u64 { self.product }
}

/// The connection that joined every point into a single circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosingConnection {
    edge: CandidateEdge,
    left: Point,
    right: Point,
    merges: usize,
    examined: usize,
}

impl ClosingConnection {
    /// Returns the ranked edge whose merge completed connectivity.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> CandidateEdge { self.edge }

    /// Returns the point at the edge's smaller index.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> Point { self.left }

    /// Returns the point at the edge's larger index.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> Point { self.right }

    /// Returns the number of successful merges, always one less than the
    /// number of points.
    #[must_use]
    #[rustfmt::skip]
    pub fn merges(&self) -> usize { self.merges }

    /// Returns the number of ranked edges examined, including no-ops.
    #[must_use]
    #[rustfmt::skip]
    pub fn examined(&self) -> usize { self.examined }

    /// Returns the product of the two endpoints' x coordinates.
    #[must_use]
    pub fn x_product(&self) -> i64 {
        i64::from(self.left.x()) * i64::from(self.right.x())
    }
}

/// Applies the first `attempt_limit` ranked edges and multiplies the sizes of
/// the `circuit_count` largest resulting circuits.
///
/// Every `union` call counts towards the limit, whether or not it merged
/// anything.
///
/// # Errors
/// - [`JunctionError::InsufficientEdges`] when `attempt_limit` exceeds the
///   number of ranked edges.
/// - [`JunctionError::InsufficientComponents`] when fewer than
///   `circuit_count` circuits remain.
/// - [`JunctionError::ProductOverflow`] when the product exceeds `u64`.
///
/// # Panics
/// Panics when an applied edge references an index outside `points`.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, connect_attempts, rank_edges};
///
/// let points = PointSet::new(
///     "line",
///     (0..5).map(|i| Point::new(i * i, 0, 0)).collect(),
/// );
/// let ranked = rank_edges(&points);
/// let summary = connect_attempts(&points, &ranked, 1, 3)?;
/// assert_eq!(summary.sizes(), &[2, 1, 1, 1]);
/// assert_eq!(summary.product(), 2);
/// # Ok::<(), junction_core::JunctionError>(())
/// ```
pub fn connect_attempts(
    points: &PointSet,
    edges: &RankedEdges,
    attempt_limit: usize,
    circuit_count: usize,
) -> Result<CircuitSummary> {
    if attempt_limit > edges.len() {
        return Err(JunctionError::InsufficientEdges {
            query: Query::Circuits,
            attempt_limit,
            available: edges.len(),
        });
    }

    let mut partition = DisjointSet::new(points.len());
    let mut attempts = 0;
    let mut merges = 0;
    for edge in edges.iter().take(attempt_limit) {
        if partition.union(edge.source(), edge.target()) {
            merges += 1;
        }
        attempts += 1;
    }
    record_unions(attempts, merges);

    let mut sizes = partition.component_sizes();
    sizes.sort_unstable_by(|left, right| right.cmp(left));
    debug!(
        attempts,
        merges,
        circuits = sizes.len(),
        largest = sizes.first().copied().unwrap_or_default(),
        "connection attempts exhausted"
    );

    if sizes.len() < circuit_count {
        return Err(JunctionError::InsufficientComponents {
            query: Query::Circuits,
            required: circuit_count,
            found: sizes.len(),
        });
    }
    let product = largest_product(&sizes, circuit_count)?;

    Ok(CircuitSummary {
        attempts,
        merges,
        sizes,
        product,
    })
}

fn largest_product(sorted_sizes: &[usize], count: usize) -> Result<u64> {
    sorted_sizes
        .iter()
        .take(count)
        .try_fold(1u64, |product, &size| {
            u64::try_from(size)
                .ok()
                .and_then(|size| product.checked_mul(size))
        })
        .ok_or(JunctionError::ProductOverflow { count })
}

/// Applies ranked edges until every point shares one circuit and returns the
/// connection that closed it.
///
/// Only successful merges reduce the live circuit count; edges joining points
/// that are already connected are skipped.
///
/// # Errors
/// - [`JunctionError::EmptyPointSet`] when the set holds no points.
/// - [`JunctionError::AlreadyConnected`] when the set holds a single point.
/// - [`JunctionError::Disconnected`] when the edges run out first, which
///   indicates that `edges` was not ranked from `points`.
///
/// # Panics
/// Panics when an edge references an index outside `points`.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, connect_until_single, rank_edges};
///
/// let points = PointSet::new(
///     "path",
///     vec![Point::new(0, 0, 0), Point::new(1, 0, 0), Point::new(3, 0, 0), Point::new(6, 0, 0)],
/// );
/// let ranked = rank_edges(&points);
/// let closing = connect_until_single(&points, &ranked)?;
/// assert_eq!((closing.left().x(), closing.right().x()), (3, 6));
/// assert_eq!(closing.x_product(), 18);
/// # Ok::<(), junction_core::JunctionError>(())
/// ```
pub fn connect_until_single(points: &PointSet, edges: &RankedEdges) -> Result<ClosingConnection> {
    let point_count = points.len();
    if point_count == 0 {
        return Err(JunctionError::EmptyPointSet {
            point_set: points.name().to_owned(),
        });
    }
    if point_count == 1 {
        return Err(JunctionError::AlreadyConnected {
            points: point_count,
        });
    }

    let mut partition = DisjointSet::new(point_count);
    let mut circuits = point_count;
    let mut merges = 0;
    for (rank, edge) in edges.iter().enumerate() {
        if !partition.union(edge.source(), edge.target()) {
            continue;
        }
        merges += 1;
        circuits -= 1;
        if circuits == 1 {
            let examined = rank + 1;
            record_unions(examined, merges);
            debug!(
                source = edge.source(),
                target = edge.target(),
                examined,
                merges,
                "all points joined into one circuit"
            );
            let endpoints = points.points();
            return Ok(ClosingConnection {
                edge: *edge,
                left: endpoints[edge.source()],
                right: endpoints[edge.target()],
                merges,
                examined,
            });
        }
    }

    record_unions(edges.len(), merges);
    Err(JunctionError::Disconnected {
        components: circuits,
        examined: edges.len(),
    })
}

#[cfg(feature = "metrics")]
fn record_unions(attempts: usize, merges: usize) {
    metrics::counter!("junction_union_attempts").increment(attempts as u64);
    metrics::counter!("junction_union_merges").increment(merges as u64);
}

#[cfg(not(feature = "metrics"))]
const fn record_unions(_attempts: usize, _merges: usize) {}
