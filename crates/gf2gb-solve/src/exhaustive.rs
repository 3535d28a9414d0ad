//! Exhaustive search over all assignments.
//!
//! Counter value `c` in `0..2^N` encodes the assignment whose variable
//! `x_{i+1}` is bit `i` of `c`. Solutions are reported in increasing
//! counter order whether or not the search runs in parallel.

use rayon::prelude::*;

use crate::error::SystemError;
use crate::system::{Assignment, System};

/// Largest variable count the 64-bit assignment counter can enumerate.
pub const MAX_VARIABLES: usize = 63;

/// Configuration for the exhaustive solver.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Smallest variable count searched in parallel.
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 12,
        }
    }
}

/// Finds every common zero of a system by enumeration.
#[derive(Clone, Debug, Default)]
pub struct ExhaustiveSolver {
    config: SolverConfig,
}

impl ExhaustiveSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns all assignments satisfying every equation of `system`, in
    /// increasing counter order.
    ///
    /// # Errors
    ///
    /// Fails if the system has more than [`MAX_VARIABLES`] unknowns.
    pub fn solve(&self, system: &System) -> Result<Vec<Assignment>, SystemError> {
        let n = system.num_vars();
        if n > MAX_VARIABLES {
            return Err(SystemError::TooManyVariables {
                n,
                max: MAX_VARIABLES,
            });
        }
        let total = 1u64 << n;
        let parallel = n >= self.config.parallel_threshold;
        tracing::debug!(
            vars = n,
            equations = system.polynomials().len(),
            parallel,
            "enumerating assignments"
        );

        let check = |counter: u64| {
            let assignment = Assignment::from_counter(counter, n);
            system.is_satisfied_by(&assignment).then_some(assignment)
        };

        let solutions: Vec<Assignment> = if parallel {
            (0..total).into_par_iter().filter_map(check).collect()
        } else {
            (0..total).filter_map(check).collect()
        };

        tracing::debug!(solutions = solutions.len(), "enumeration finished");
        Ok(solutions)
    }
}

/// Solves `system` with the default configuration.
///
/// # Errors
///
/// Fails if the system has more than [`MAX_VARIABLES`] unknowns.
pub fn solve(system: &System) -> Result<Vec<Assignment>, SystemError> {
    ExhaustiveSolver::default().solve(system)
}
