use std::error::Error;
use std::fmt;

/// Error returned when building a matrix from nested rows that are empty
/// or ragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or a first row with no entries.
    Empty,
    /// A later row whose length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "matrix requires a non-empty first row"),
            ShapeError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries, expected {}",
                row, found, expected
            ),
        }
    }
}

impl Error for ShapeError {}

/// Error returned when parsing a rational from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRationalError {
    input: String,
}

impl ParseRationalError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid rational literal `{}`: expected `p` or `p/q` with q != 0",
            self.input
        )
    }
}

impl Error for ParseRationalError {}
