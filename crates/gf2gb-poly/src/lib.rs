//! # gf2gb-poly
//!
//! Polynomial arithmetic over GF(2) for the gf2gb workspace.
//!
//! This crate provides:
//! - Sparse monomials over numbered Boolean unknowns `x1..xN`
//! - Term orders built from a variable permutation (lex, deglex, degrevlex)
//! - Canonical polynomials where addition cancels repeated terms
//! - Single-step and fixed-point reduction against a list of generators
//!
//! Exponents are kept literally (`x1^2` is not folded into `x1`); every
//! operation is pure and returns a new value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod monomial;
pub mod ordering;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use error::OrderError;
pub use monomial::{Exp, Monomial, Var};
pub use ordering::{MonomialOrder, TermOrder};
pub use polynomial::{simplify, Polynomial};
