mod common;

use std::io::Cursor;

use common::{EXAMPLE_INPUT, example};
use junction_core::{
    DEFAULT_ATTEMPT_LIMIT, DEFAULT_CIRCUIT_COUNT, JunctionError, Playground, PlaygroundBuilder,
    Point, PointSet, Query,
};
use junction_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn playground() -> Playground {
    PlaygroundBuilder::new()
        .with_attempt_limit(10)
        .build()
        .expect("configuration must be valid")
}

#[test]
fn builder_defaults_match_the_published_constants() {
    let playground = PlaygroundBuilder::new()
        .build()
        .expect("defaults must be valid");
    assert_eq!(playground.attempt_limit(), DEFAULT_ATTEMPT_LIMIT);
    assert_eq!(playground.circuit_count().get(), DEFAULT_CIRCUIT_COUNT);
}

#[test]
fn builder_rejects_zero_circuit_count() {
    let err = PlaygroundBuilder::new()
        .with_circuit_count(0)
        .build()
        .expect_err("zero circuits must be rejected");
    assert_eq!(err, JunctionError::InvalidCircuitCount { got: 0 });
}

#[rstest]
fn solve_answers_both_queries_for_the_example(playground: Playground) {
    let solution = playground.solve(&example()).expect("example must solve");

    let circuits = solution.circuits();
    assert_eq!(circuits.attempts(), 10);
    assert_eq!(circuits.merges(), 9);
    assert_eq!(&circuits.sizes()[..4], &[5, 4, 2, 2]);
    assert_eq!(circuits.circuit_count(), 11);
    assert_eq!(circuits.product(), 40);

    let closing = solution.closing();
    assert_eq!(closing.left(), Point::new(216, 146, 977));
    assert_eq!(closing.right(), Point::new(117, 168, 530));
    assert_eq!(closing.x_product(), 25_272);
}

#[rstest]
fn single_queries_agree_with_solve(playground: Playground) {
    let points = example();
    let solution = playground.solve(&points).expect("example must solve");

    let circuits = playground.circuits(&points).expect("circuits must succeed");
    let closing = playground
        .closing_connection(&points)
        .expect("closing connection must succeed");
    assert_eq!(&circuits, solution.circuits());
    assert_eq!(&closing, solution.closing());
}

#[rstest]
fn loading_from_a_reader_matches_parsing(playground: Playground) {
    let loaded = PointSet::try_from_reader("example", Cursor::new(EXAMPLE_INPUT))
        .expect("example must load");
    assert_eq!(loaded, example());
    assert_eq!(
        playground.solve(&loaded).expect("example must solve"),
        playground.solve(&example()).expect("example must solve"),
    );
}

#[test]
fn default_attempt_limit_exceeds_the_example_edges() {
    let playground = PlaygroundBuilder::new()
        .build()
        .expect("defaults must be valid");
    let err = playground
        .solve(&example())
        .expect_err("1000 attempts exceed 190 edges");
    assert_eq!(
        err,
        JunctionError::InsufficientEdges {
            query: Query::Circuits,
            attempt_limit: 1000,
            available: 190,
        }
    );
    assert!(err.is_precondition());
}

#[rstest]
fn single_point_fails_both_queries() {
    let points = PointSet::new("lonely", vec![Point::new(1, 2, 3)]);
    let playground = PlaygroundBuilder::new()
        .with_attempt_limit(0)
        .build()
        .expect("configuration must be valid");

    assert_eq!(
        playground.circuits(&points),
        Err(JunctionError::InsufficientComponents {
            query: Query::Circuits,
            required: 3,
            found: 1,
        })
    );
    assert_eq!(
        playground.closing_connection(&points),
        Err(JunctionError::AlreadyConnected { points: 1 })
    );
}

#[rstest]
fn solve_records_core_tracing(playground: Playground) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let solution = tracing::subscriber::with_default(subscriber, || playground.solve(&example()))
        .expect("example must solve");
    assert_eq!(solution.circuits().product(), 40);

    let solve_span = layer.span("core.solve").expect("core.solve span must exist");
    assert_eq!(solve_span.field("point_set"), Some("example"));
    assert_eq!(solve_span.field("points"), Some("20"));
    assert_eq!(solve_span.field("attempt_limit"), Some("10"));
    assert_eq!(solve_span.field("circuit_count"), Some("3"));

    let rank_span = layer.span("core.rank").expect("core.rank span must exist");
    assert_eq!(rank_span.field("points"), Some("20"));

    let events = layer.events();
    let ranked = events
        .iter()
        .find(|event| event.message() == Some("ranked candidate edges"))
        .expect("ranking event must be emitted");
    assert_eq!(ranked.level, Level::INFO);
    assert_eq!(ranked.fields.get("edges"), Some(&"190".to_owned()));

    let solved = events
        .iter()
        .find(|event| event.message() == Some("solved point set"))
        .expect("solve event must be emitted");
    assert_eq!(solved.fields.get("circuits_product"), Some(&"40".to_owned()));
    assert_eq!(
        solved.fields.get("closing_x_product"),
        Some(&"25272".to_owned())
    );
}

#[rstest]
fn empty_point_set_is_reported_through_tracing(playground: Playground) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || {
        playground.solve(&PointSet::new("empty", Vec::new()))
    })
    .expect_err("empty point sets must fail");
    assert_eq!(
        err,
        JunctionError::EmptyPointSet {
            point_set: "empty".into()
        }
    );

    let rank_span = layer.span("core.rank").expect("core.rank span must exist");
    assert_eq!(rank_span.field("points"), Some("0"));
    assert!(layer.events().iter().any(|event| {
        event.level == Level::ERROR
            && event
                .fields
                .get("error")
                .is_some_and(|value| value == "point set `empty` contains no points")
    }));
}
