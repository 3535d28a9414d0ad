//! Errors raised while assembling a system.

use gf2gb_poly::Var;
use thiserror::Error;

/// A polynomial system that cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SystemError {
    /// The variable count is zero.
    #[error("variable count must be positive, got {n}")]
    InvalidDimension {
        /// The rejected count.
        n: usize,
    },

    /// More variables than the exhaustive solver's 64-bit counter can enumerate.
    #[error("{n} variables exceed the supported maximum of {max}")]
    TooManyVariables {
        /// The requested count.
        n: usize,
        /// The largest supported count.
        max: usize,
    },

    /// A polynomial mentions a variable outside `1..=N`.
    #[error("polynomial {index} uses x{var}, outside 1..={n}")]
    VariableOutOfRange {
        /// Zero-based index of the polynomial.
        index: usize,
        /// The offending variable.
        var: Var,
        /// The variable count.
        n: usize,
    },
}
