//! Point set loading for the junction box input format.
//!
//! Each non-blank line holds one point as `x,y,z`, three signed decimal
//! integers separated by commas. Whitespace around a field is tolerated.
//! Points are identified by their position among the non-blank lines.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::error::define_error_codes;

const FIELD_DELIMITER: char = ',';

/// A junction box position in 3D space.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    x: i32,
    y: i32,
    z: i32,
}

impl Point {
    /// Creates a point from its coordinates.
    ///
    /// # Examples
    /// ```
    /// use junction_core::Point;
    ///
    /// let point = Point::new(162, 817, 812);
    /// assert_eq!(point.x(), 162);
    /// ```
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i32 { self.x }

    /// Returns the y coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i32 { self.y }

    /// Returns the z coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn z(&self) -> i32 { self.z }

    /// Returns the exact squared Euclidean distance to `other`.
    ///
    /// Differences are widened to `i64` and squares to `u128`, so the result
    /// is exact for every pair of `i32` coordinates.
    ///
    /// # Examples
    /// ```
    /// use junction_core::Point;
    ///
    /// let origin = Point::new(0, 0, 0);
    /// assert_eq!(origin.squared_distance(&Point::new(1, 2, 2)), 9);
    /// ```
    #[must_use]
    pub fn squared_distance(&self, other: &Self) -> u128 {
        axis_square(self.x, other.x) + axis_square(self.y, other.y) + axis_square(self.z, other.z)
    }
}

fn axis_square(left: i32, right: i32) -> u128 {
    let delta = u128::from((i64::from(left) - i64::from(right)).unsigned_abs());
    delta * delta
}

/// Errors raised while parsing point text.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// The input contained no points.
    #[error("input contains no points")]
    EmptyInput,
    /// A line did not split into exactly three fields.
    #[error("line {line}: expected 3 comma-separated coordinates but found {found}")]
    FieldCount {
        /// 1-based line number in the input.
        line: usize,
        /// Number of fields present on the line.
        found: usize,
    },
    /// A field was not a signed 32-bit integer.
    #[error("line {line}: coordinate {field} `{token}` is not a valid integer")]
    InvalidCoordinate {
        /// 1-based line number in the input.
        line: usize,
        /// 0-based field index (`0 = x`, `1 = y`, `2 = z`).
        field: usize,
        /// Offending token after trimming.
        token: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`ParseError`] variants.
    enum ParseErrorCode for ParseError {
        /// The input contained no points.
        EmptyInput => EmptyInput => "PARSE_EMPTY_INPUT",
        /// A line did not split into exactly three fields.
        FieldCount => FieldCount { .. } => "PARSE_FIELD_COUNT",
        /// A field was not a signed 32-bit integer.
        InvalidCoordinate => InvalidCoordinate { .. } => "PARSE_INVALID_COORDINATE",
    }
}

/// Errors raised while loading a [`PointSet`] from a reader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading from the underlying source failed.
    #[error("failed to read points: {source}")]
    Io {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The text could not be parsed as points.
    #[error(transparent)]
    Parse {
        /// Underlying parse failure.
        #[from]
        source: ParseError,
    },
}

impl LoadError {
    /// Returns the [`ParseErrorCode`] when loading failed during parsing.
    #[must_use]
    pub const fn parse_code(&self) -> Option<ParseErrorCode> {
        match self {
            Self::Parse { source } => Some(source.code()),
            Self::Io { .. } => None,
        }
    }
}

/// An ordered, named collection of points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    name: String,
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set from already-parsed points.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{Point, PointSet};
    ///
    /// let set = PointSet::new("demo", vec![Point::new(0, 0, 0), Point::new(1, 1, 1)]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.name(), "demo");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Parses points from in-memory text.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyInput`] when no line holds a point,
    /// [`ParseError::FieldCount`] when a line lacks exactly three fields, and
    /// [`ParseError::InvalidCoordinate`] when a field is not an integer.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{Point, PointSet};
    ///
    /// let set = PointSet::parse("demo", "1,2,3\n-4, 5 ,6\n")?;
    /// assert_eq!(set.points(), &[Point::new(1, 2, 3), Point::new(-4, 5, 6)]);
    /// # Ok::<(), junction_core::ParseError>(())
    /// ```
    pub fn parse(name: impl Into<String>, input: &str) -> Result<Self, ParseError> {
        let mut points = Vec::new();
        for (index, line) in input.lines().enumerate() {
            if let Some(point) = parse_line(index + 1, line)? {
                points.push(point);
            }
        }
        Self::non_empty(name, points)
    }

    /// Reads points line by line from `reader`.
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] when reading fails and [`LoadError::Parse`]
    /// for any [`ParseError`].
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, LoadError> {
        let mut points = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io { source })?;
            if let Some(point) = parse_line(index + 1, &line)? {
                points.push(point);
            }
        }
        Ok(Self::non_empty(name, points)?)
    }

    fn non_empty(name: impl Into<String>, points: Vec<Point>) -> Result<Self, ParseError> {
        if points.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Ok(Self::new(name, points))
    }

    /// Returns the name of the point set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the points in input order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn parse_line(line_number: usize, line: &str) -> Result<Option<Point>, ParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    let [x, y, z] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            line: line_number,
            found: fields.len(),
        });
    };

    Ok(Some(Point::new(
        parse_coordinate(line_number, 0, x)?,
        parse_coordinate(line_number, 1, y)?,
        parse_coordinate(line_number, 2, z)?,
    )))
}

fn parse_coordinate(line: usize, field: usize, token: &str) -> Result<i32, ParseError> {
    token
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidCoordinate {
            line,
            field,
            token: token.to_owned(),
        })
}
