//! Seeded synthetic point sets for benchmarking.
//!
//! Coordinates are drawn uniformly from `0..=extent` on each axis, matching
//! the non-negative integer layout of typical puzzle inputs.

use junction_core::{Point, PointSet};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic point generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The coordinate extent was not positive.
    #[error("coordinate extent must be positive (got {extent})")]
    NonPositiveExtent {
        /// The rejected extent.
        extent: i32,
    },
}

/// Configuration for synthetic point generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Largest coordinate value on every axis.
    pub extent: i32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a point set from `config`.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroPoints`] if `point_count` is zero, or
/// [`SyntheticError::NonPositiveExtent`] if `extent` is not positive.
///
/// # Examples
///
/// ```
/// use junction_benches::source::{SyntheticConfig, generate_points};
///
/// let config = SyntheticConfig { point_count: 10, extent: 1_000, seed: 42 };
/// let points = generate_points(&config).expect("valid config");
/// assert_eq!(points.len(), 10);
/// ```
pub fn generate_points(config: &SyntheticConfig) -> Result<PointSet, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.extent <= 0 {
        return Err(SyntheticError::NonPositiveExtent {
            extent: config.extent,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let extent = config.extent;
    let points: Vec<Point> = (0..config.point_count)
        .map(|_| {
            Point::new(
                rng.gen_range(0..=extent),
                rng.gen_range(0..=extent),
                rng.gen_range(0..=extent),
            )
        })
        .collect();

    Ok(PointSet::new(
        format!("synthetic-{}", config.point_count),
        points,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const fn config(point_count: usize, extent: i32, seed: u64) -> SyntheticConfig {
        SyntheticConfig {
            point_count,
            extent,
            seed,
        }
    }

    #[rstest]
    #[case::small(10)]
    #[case::medium(100)]
    #[case::large(1_000)]
    fn generates_requested_point_count(#[case] point_count: usize) {
        let points =
            generate_points(&config(point_count, 1_000, 42)).expect("generation must succeed");
        assert_eq!(points.len(), point_count);
        assert_eq!(points.name(), format!("synthetic-{point_count}"));
    }

    #[rstest]
    fn coordinates_stay_within_extent() {
        let extent = 50;
        let points = generate_points(&config(200, extent, 7)).expect("generation must succeed");
        assert!(points.points().iter().all(|point| {
            [point.x(), point.y(), point.z()]
                .iter()
                .all(|coordinate| (0..=extent).contains(coordinate))
        }));
    }

    #[rstest]
    fn same_seed_reproduces_points() {
        let first = generate_points(&config(64, 1_000, 9)).expect("generation must succeed");
        let second = generate_points(&config(64, 1_000, 9)).expect("generation must succeed");
        assert_eq!(first, second);
    }

    #[rstest]
    #[case::zero_points(config(0, 10, 1), SyntheticError::ZeroPoints)]
    #[case::zero_extent(config(5, 0, 1), SyntheticError::NonPositiveExtent { extent: 0 })]
    #[case::negative_extent(config(5, -3, 1), SyntheticError::NonPositiveExtent { extent: -3 })]
    fn rejects_invalid_configs(#[case] input: SyntheticConfig, #[case] expected: SyntheticError) {
        assert_eq!(generate_points(&input), Err(expected));
    }
}
