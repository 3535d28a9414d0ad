//! Basis computation checked by exhaustive solving.
//!
//! A reduced Gröbner basis generates the same ideal as the input, so over
//! GF(2) both must have the same common zeros among the `2^N` assignments.
//! [`certify`] computes the basis, solves both systems and compares.

use std::fmt;

use gf2gb_groebner::{Buchberger, BuchbergerConfig, BuchbergerStats, GroebnerBasis};
use gf2gb_poly::TermOrder;
use gf2gb_solve::{
    Assignment, ExhaustiveSolver, SolverConfig, System, SystemError, MAX_VARIABLES,
};
use thiserror::Error;

/// Error raised before any basis is computed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CertifyError {
    /// The term order ranks a different number of variables than the system has.
    #[error("term order covers {order} variables but the system has {system}")]
    OrderMismatch {
        /// Variables ranked by the order.
        order: usize,
        /// Variables of the system.
        system: usize,
    },

    /// The system cannot be solved exhaustively, or the basis cannot be
    /// turned into a system.
    #[error(transparent)]
    System(#[from] SystemError),
}

/// Configuration for [`certify`].
#[derive(Clone, Debug, Default)]
pub struct CertifyConfig {
    /// Settings for basis construction.
    pub buchberger: BuchbergerConfig,
    /// Settings for both exhaustive solves.
    pub solver: SolverConfig,
}

/// The outcome of one certification run.
#[derive(Clone, Debug)]
pub struct Certificate {
    /// The reduced Gröbner basis.
    pub basis: GroebnerBasis,
    /// The reduced basis as a system over the same unknowns.
    pub reduced_system: System,
    /// Size of the basis before minimization.
    pub raw_basis_len: usize,
    /// Counters from basis construction.
    pub stats: BuchbergerStats,
    /// Solutions of the input system, in counter order.
    pub original_solutions: Vec<Assignment>,
    /// Solutions of the reduced basis, in counter order.
    pub basis_solutions: Vec<Assignment>,
    /// Whether both solution lists are identical.
    pub solutions_agree: bool,
    /// Whether no leading monomial of the basis divides another.
    pub is_minimal: bool,
    /// Whether the basis is fully inter-reduced.
    pub is_reduced: bool,
    /// Whether basis construction ran to completion.
    pub complete: bool,
}

/// Computes the reduced Gröbner basis of `system` under `order` and checks
/// it against the original system by exhaustive solving.
///
/// # Errors
///
/// Fails if `order` is not an order on the system's unknowns, or if the
/// system has more unknowns than exhaustive solving supports.
pub fn certify(
    system: &System,
    order: &TermOrder,
    config: &CertifyConfig,
) -> Result<Certificate, CertifyError> {
    if order.num_vars() != system.num_vars() {
        return Err(CertifyError::OrderMismatch {
            order: order.num_vars(),
            system: system.num_vars(),
        });
    }
    if system.num_vars() > MAX_VARIABLES {
        return Err(SystemError::TooManyVariables {
            n: system.num_vars(),
            max: MAX_VARIABLES,
        }
        .into());
    }

    let mut buchberger = Buchberger::new(order, config.buchberger.clone());
    let raw = buchberger.compute(system.polynomials());
    let stats = buchberger.stats().clone();
    let basis = raw.minimize_and_reduce();
    tracing::info!(raw = raw.len(), reduced = basis.len(), "basis computed");

    let reduced_system = system.with_polynomials(basis.polynomials().to_vec())?;

    let solver = ExhaustiveSolver::new(config.solver.clone());
    let original_solutions = solver.solve(system)?;
    let basis_solutions = solver.solve(&reduced_system)?;
    let solutions_agree = original_solutions == basis_solutions;
    if solutions_agree {
        tracing::info!(solutions = original_solutions.len(), "solution sets agree");
    } else {
        tracing::error!(
            original = original_solutions.len(),
            basis = basis_solutions.len(),
            "solution sets differ"
        );
    }

    Ok(Certificate {
        is_minimal: basis.is_minimal(),
        is_reduced: basis.is_reduced(),
        complete: basis.is_complete(),
        raw_basis_len: raw.len(),
        basis,
        reduced_system,
        stats,
        original_solutions,
        basis_solutions,
        solutions_agree,
    })
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "New system:")?;
        write!(f, "{}", self.reduced_system)?;
        writeln!(f, "Equal: {}", self.solutions_agree)?;
        writeln!(f, "Is minimal: {}", self.is_minimal)?;
        write!(f, "Is reduced: {}", self.is_reduced)
    }
}
