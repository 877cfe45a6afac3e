//! Distance ranking over every unordered pair of points.
//!
//! Candidate edges are ordered by exact squared Euclidean distance. Equal
//! distances fall back to the pair enumeration order: lower `source` first,
//! then lower `target`. Since `(source, target)` is unique per edge this is a
//! total order, so the ranking is reproducible whether or not the pairwise
//! computation and the sort run in parallel.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::points::{Point, PointSet};

/// An unordered pair of point indices annotated with their distance.
///
/// The pair is stored canonically with `source < target`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CandidateEdge {
    squared_distance: u128,
    source: usize,
    target: usize,
}

impl CandidateEdge {
    /// Creates an edge between `left` and `right`, swapping the endpoints when
    /// needed so that `source <= target`.
    ///
    /// # Examples
    /// ```
    /// use junction_core::CandidateEdge;
    ///
    /// let edge = CandidateEdge::new(4, 1, 25);
    /// assert_eq!((edge.source(), edge.target()), (1, 4));
    /// assert_eq!(edge.distance(), 5.0);
    /// ```
    #[must_use]
    pub const fn new(left: usize, right: usize, squared_distance: u128) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            squared_distance,
            source,
            target,
        }
    }

    fn between(points: &[Point], source: usize, target: usize) -> Self {
        let squared_distance = points[source].squared_distance(&points[target]);
        Self {
            squared_distance,
            source,
            target,
        }
    }

    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the exact squared Euclidean distance between the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn squared_distance(&self) -> u128 { self.squared_distance }

    /// Returns the Euclidean distance between the endpoints.
    ///
    /// Ordering never depends on this value; it is provided for reporting.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.squared_distance as f64).sqrt()
    }
}

impl Ord for CandidateEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.squared_distance
            .cmp(&other.squared_distance)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for CandidateEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Candidate edges sorted by non-decreasing distance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedEdges {
    edges: Vec<CandidateEdge>,
}

impl RankedEdges {
    /// Sorts `edges` into ranked order.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{CandidateEdge, RankedEdges};
    ///
    /// let ranked = RankedEdges::from_edges(vec![
    ///     CandidateEdge::new(0, 2, 9),
    ///     CandidateEdge::new(1, 2, 4),
    ///     CandidateEdge::new(0, 1, 9),
    /// ]);
    /// let order: Vec<_> = ranked.iter().map(|e| (e.source(), e.target())).collect();
    /// assert_eq!(order, vec![(1, 2), (0, 1), (0, 2)]);
    /// ```
    #[must_use]
    pub fn from_edges(mut edges: Vec<CandidateEdge>) -> Self {
        sort_edges(&mut edges);
        Self { edges }
    }

    /// Returns the number of ranked edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when there are no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the edge at `rank`, if any.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&CandidateEdge> {
        self.edges.get(rank)
    }

    /// Iterates the edges in ranked order.
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateEdge> {
        self.edges.iter()
    }

    /// Returns the edges in ranked order.
    #[must_use]
    pub fn as_slice(&self) -> &[CandidateEdge] {
        &self.edges
    }
}

impl<'a> IntoIterator for &'a RankedEdges {
    type Item = &'a CandidateEdge;
    type IntoIter = std::slice::Iter<'a, CandidateEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the number of unordered pairs among `point_count` points.
#[must_use]
pub const fn pair_count(point_count: usize) -> usize {
    if point_count < 2 {
        return 0;
    }
    if point_count % 2 == 0 {
        (point_count / 2) * (point_count - 1)
    } else {
        point_count * ((point_count - 1) / 2)
    }
}

/// Computes and ranks the candidate edge of every unordered pair.
///
/// # Examples
/// ```
/// use junction_core::{Point, PointSet, rank_edges};
///
/// let points = PointSet::new(
///     "line",
///     vec![Point::new(0, 0, 0), Point::new(10, 0, 0), Point::new(1, 0, 0)],
/// );
/// let ranked = rank_edges(&points);
/// let order: Vec<_> = ranked.iter().map(|e| (e.source(), e.target())).collect();
/// assert_eq!(order, vec![(0, 2), (1, 2), (0, 1)]);
/// ```
#[must_use]
pub fn rank_edges(points: &PointSet) -> RankedEdges {
    let edges = collect_edges(points.points());

    #[cfg(feature = "metrics")]
    metrics::counter!("junction_ranked_edges").increment(edges.len() as u64);

    RankedEdges::from_edges(edges)
}

#[cfg(feature = "parallel")]
fn collect_edges(points: &[Point]) -> Vec<CandidateEdge> {
    let mut edges = Vec::with_capacity(pair_count(points.len()));
    edges.par_extend((0..points.len()).into_par_iter().flat_map_iter(|source| {
        (source + 1..points.len()).map(move |target| CandidateEdge::between(points, source, target))
    }));
    edges
}

#[cfg(not(feature = "parallel"))]
fn collect_edges(points: &[Point]) -> Vec<CandidateEdge> {
    let mut edges = Vec::with_capacity(pair_count(points.len()));
    for source in 0..points.len() {
        for target in source + 1..points.len() {
            edges.push(CandidateEdge::between(points, source, target));
        }
    }
    edges
}

#[cfg(feature = "parallel")]
fn sort_edges(edges: &mut [CandidateEdge]) {
    edges.par_sort_unstable();
}

#[cfg(not(feature = "parallel"))]
fn sort_edges(edges: &mut [CandidateEdge]) {
    edges.sort_unstable();
}
