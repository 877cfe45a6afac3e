use junction_core::{JunctionError, JunctionErrorCode, ParseError, ParseErrorCode, Query};
use rstest::rstest;

#[rstest]
#[case(ParseError::EmptyInput, ParseErrorCode::EmptyInput, "PARSE_EMPTY_INPUT")]
#[case(
    ParseError::FieldCount { line: 2, found: 4 },
    ParseErrorCode::FieldCount,
    "PARSE_FIELD_COUNT",
)]
#[case(
    ParseError::InvalidCoordinate { line: 1, field: 2, token: "z".into() },
    ParseErrorCode::InvalidCoordinate,
    "PARSE_INVALID_COORDINATE",
)]
fn returns_expected_parse_code(
    #[case] error: ParseError,
    #[case] expected: ParseErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
#[case(
    JunctionError::EmptyPointSet { point_set: "empty".into() },
    JunctionErrorCode::EmptyPointSet,
    false,
)]
#[case(
    JunctionError::InvalidCircuitCount { got: 0 },
    JunctionErrorCode::InvalidCircuitCount,
    false,
)]
#[case(
    JunctionError::InsufficientEdges {
        query: Query::Circuits,
        attempt_limit: 11,
        available: 10,
    },
    JunctionErrorCode::InsufficientEdges,
    true,
)]
#[case(
    JunctionError::InsufficientComponents {
        query: Query::Circuits,
        required: 3,
        found: 2,
    },
    JunctionErrorCode::InsufficientComponents,
    true,
)]
#[case(
    JunctionError::AlreadyConnected { points: 1 },
    JunctionErrorCode::AlreadyConnected,
    true,
)]
#[case(
    JunctionError::Disconnected { components: 2, examined: 4 },
    JunctionErrorCode::Disconnected,
    false,
)]
#[case(
    JunctionError::ProductOverflow { count: 3 },
    JunctionErrorCode::ProductOverflow,
    false,
)]
fn returns_expected_junction_code(
    #[case] error: JunctionError,
    #[case] expected: JunctionErrorCode,
    #[case] precondition: bool,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert!(expected.as_str().starts_with("JUNCTION_"));
    assert_eq!(error.is_precondition(), precondition);
}

#[rstest]
#[case(
    JunctionError::InsufficientEdges {
        query: Query::Circuits,
        attempt_limit: 1000,
        available: 190,
    },
    "circuits needs 1000 connection attempts but only 190 candidate edges exist",
)]
#[case(
    JunctionError::InsufficientComponents {
        query: Query::Circuits,
        required: 3,
        found: 1,
    },
    "circuits needs at least 3 circuits but only 1 remain",
)]
#[case(
    JunctionError::AlreadyConnected { points: 1 },
    "1 point(s) already form a single circuit; no connection is needed",
)]
fn messages_name_the_offending_values(#[case] error: JunctionError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn parse_messages_carry_line_numbers() {
    let error = ParseError::InvalidCoordinate {
        line: 7,
        field: 1,
        token: "1.5".into(),
    };
    assert_eq!(
        error.to_string(),
        "line 7: coordinate 1 `1.5` is not a valid integer"
    );
}
