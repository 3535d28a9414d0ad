//! Parse errors with source positions.

use gf2gb_poly::{OrderError, Var};
use thiserror::Error;

/// Error raised while reading a system. Lines and columns are 1-based and
/// refer to the input before whitespace is removed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input has no content.
    #[error("input is empty")]
    Empty,

    /// The first line is not a positive integer.
    #[error("line {line}: expected a positive variable count, found {found:?}")]
    InvalidDimension {
        /// Line of the count.
        line: usize,
        /// The rejected text.
        found: String,
    },

    /// A character that does not fit the grammar.
    #[error("line {line}, column {column}: expected {expected}, found {found}")]
    UnexpectedChar {
        /// Line of the character.
        line: usize,
        /// Column of the character.
        column: usize,
        /// The character, quoted, or `end of line`.
        found: String,
        /// What the grammar allows here.
        expected: &'static str,
    },

    /// A number too large for a variable index or exponent.
    #[error("line {line}, column {column}: number out of range")]
    InvalidNumber {
        /// Line of the number.
        line: usize,
        /// Column of its first digit.
        column: usize,
    },

    /// Exponents of one variable inside a monomial sum past `u32::MAX`.
    #[error("line {line}, column {column}: exponent of the monomial is out of range")]
    ExponentOverflow {
        /// Line of the monomial.
        line: usize,
        /// Column of its first character.
        column: usize,
    },

    /// A variable index outside `1..=N`.
    #[error("line {line}, column {column}: x{var} is not one of x1..x{n}")]
    VariableOutOfRange {
        /// Line of the variable.
        line: usize,
        /// Column of its `x`.
        column: usize,
        /// The index read.
        var: Var,
        /// The variable count.
        n: usize,
    },

    /// The order line is not a permutation of `1..=N`.
    #[error("line {line}: invalid variable order")]
    Order {
        /// Line of the order.
        line: usize,
        /// What is wrong with it.
        #[source]
        source: OrderError,
    },
}

impl ParseError {
    /// Returns the line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::InvalidDimension { line, .. }
            | Self::UnexpectedChar { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::ExponentOverflow { line, .. }
            | Self::VariableOutOfRange { line, .. }
            | Self::Order { line, .. } => Some(*line),
        }
    }
}
