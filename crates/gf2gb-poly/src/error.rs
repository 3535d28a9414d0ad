//! Errors raised while configuring a term order.

use thiserror::Error;

use crate::monomial::Var;

/// A variable permutation that cannot serve as a term order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The variable count is zero or larger than an order can rank.
    #[error("variable count {n} is zero or too large")]
    InvalidDimension {
        /// The rejected count.
        n: usize,
    },

    /// A variable is listed twice.
    #[error("variable x{0} appears more than once in the order")]
    DuplicateVariable(Var),

    /// A variable of `1..=N` is not listed.
    #[error("variable x{0} is missing from the order")]
    MissingVariable(Var),

    /// A listed variable lies outside `1..=N`.
    #[error("variable x{var} is outside 1..={n}")]
    VariableOutOfRange {
        /// The offending variable.
        var: Var,
        /// The variable count.
        n: usize,
    },
}
