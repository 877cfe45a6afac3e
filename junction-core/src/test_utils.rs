//! Shared test utilities for `junction-core`.

use std::ops::Range;

use junction_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::points::{Point, PointSet};

/// The twenty junction boxes from the puzzle statement.
pub(crate) const EXAMPLE_INPUT: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

/// Parses [`EXAMPLE_INPUT`].
#[must_use]
pub(crate) fn example_points() -> PointSet {
    match PointSet::parse("example", EXAMPLE_INPUT) {
        Ok(points) => points,
        Err(err) => panic!("example input must parse: {err}"),
    }
}

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `JUNCTION_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Generates point sets whose coordinates lie in `-bound..=bound`.
///
/// Small bounds produce many duplicate points and equal distances, which
/// stresses the ranking tie-break.
pub(crate) fn point_set_strategy(
    sizes: Range<usize>,
    bound: i32,
) -> impl Strategy<Value = PointSet> {
    let coordinate = -bound..=bound;
    prop::collection::vec(
        (coordinate.clone(), coordinate.clone(), coordinate)
            .prop_map(|(x, y, z)| Point::new(x, y, z)),
        sizes,
    )
    .prop_map(|points| PointSet::new("generated", points))
}

/// Spatial arrangement used when generating seeded point sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum Layout {
    /// Points sampled uniformly in a cube.
    #[weight(3)]
    Uniform,
    /// Tight clusters around a few distant centres.
    #[weight(3)]
    Clustered,
    /// Points on one axis, so every distance is a coordinate difference.
    #[weight(1)]
    Collinear,
    /// Uniform points where roughly half repeat an earlier point.
    #[weight(1)]
    Duplicates,
}

/// Generates `len` points with the given layout from `seed`.
pub(crate) fn generate_layout(layout: Layout, len: usize, seed: u64) -> PointSet {
    const SPAN: i32 = 10_000;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut points: Vec<Point> = Vec::with_capacity(len);
    match layout {
        Layout::Uniform => {
            for _ in 0..len {
                points.push(random_point(&mut rng, SPAN));
            }
        }
        Layout::Clustered => {
            let centres: Vec<Point> = (0..rng.gen_range(1..=4))
                .map(|_| random_point(&mut rng, SPAN))
                .collect();
            for index in 0..len {
                let centre = centres[index % centres.len()];
                points.push(Point::new(
                    centre.x() + rng.gen_range(-25..=25),
                    centre.y() + rng.gen_range(-25..=25),
                    centre.z() + rng.gen_range(-25..=25),
                ));
            }
        }
        Layout::Collinear => {
            for _ in 0..len {
                points.push(Point::new(rng.gen_range(-SPAN..=SPAN), 0, 0));
            }
        }
        Layout::Duplicates => {
            for _ in 0..len {
                let point = if !points.is_empty() && rng.gen_bool(0.5) {
                    points[rng.gen_range(0..points.len())]
                } else {
                    random_point(&mut rng, SPAN)
                };
                points.push(point);
            }
        }
    }
    PointSet::new(format!("{layout:?}"), points)
}

fn random_point(rng: &mut SmallRng, span: i32) -> Point {
    Point::new(
        rng.gen_range(-span..=span),
        rng.gen_range(-span..=span),
        rng.gen_range(-span..=span),
    )
}
