//! Boolean polynomial systems over GF(2).
//!
//! This crate provides:
//! - [`System`]: equations `p = 0` in the unknowns `x1..xN`
//! - [`Assignment`]: one 0/1 value per unknown
//! - [`ExhaustiveSolver`]: enumeration of all `2^N` assignments, in
//!   parallel above a configurable size

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod exhaustive;
pub mod system;

pub use error::SystemError;
pub use exhaustive::{solve, ExhaustiveSolver, SolverConfig, MAX_VARIABLES};
pub use system::{Assignment, System};
