//! # gf2gb
//!
//! Gröbner bases of Boolean polynomial systems over GF(2), checked
//! against exhaustive search.
//!
//! ## Pipeline
//!
//! 1. Read a system with [`parse::parse_system`]
//! 2. Compute a Gröbner basis with Buchberger's algorithm
//! 3. Minimize and inter-reduce it into the reduced basis
//! 4. Solve the original system and the reduced basis by enumeration
//!    and compare the solution sets
//!
//! [`certify`] runs steps 2 to 4 and reports the outcome.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gf2gb::prelude::*;
//!
//! let parsed = parse_system("2\nx1*x2 + x1\nx1 + 1\n")?;
//! let system = System::new(parsed.num_vars, parsed.polynomials)?;
//! let cert = certify(&system, &parsed.order, &CertifyConfig::default())?;
//! assert!(cert.solutions_agree);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod certify;

#[cfg(test)]
mod proptests;

pub use gf2gb_groebner as groebner;
pub use gf2gb_parse as parse;
pub use gf2gb_poly as poly;
pub use gf2gb_solve as solve;

pub use certify::{certify, Certificate, CertifyConfig, CertifyError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::certify::{certify, Certificate, CertifyConfig, CertifyError};
    pub use gf2gb_groebner::{
        compute_groebner_basis, Buchberger, BuchbergerConfig, BuchbergerStats, GroebnerBasis,
    };
    pub use gf2gb_parse::{parse_system, ParseError, ParsedSystem};
    pub use gf2gb_poly::{Monomial, MonomialOrder, Polynomial, TermOrder};
    pub use gf2gb_solve::{solve, Assignment, ExhaustiveSolver, SolverConfig, System};
}
