//! Gröbner bases over GF(2).
//!
//! This crate provides:
//! - Buchberger's algorithm with the product and chain criteria
//! - A reductor caching leading monomials for top reduction and normal forms
//! - Minimal and reduced bases, plus checks for both properties
//! - Ideal membership through normal forms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod buchberger;
pub mod criteria;
pub mod normalize;
pub mod reductor;

#[cfg(test)]
mod proptests;

pub use basis::GroebnerBasis;
pub use buchberger::{compute_groebner_basis, s_polynomial, Buchberger, BuchbergerConfig, BuchbergerStats};
pub use normalize::minimize_and_reduce;
pub use reductor::Reductor;
