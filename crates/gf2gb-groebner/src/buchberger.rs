//! Buchberger's algorithm over GF(2).
//!
//! Pairs are treated incrementally: for `i = 1, 2, ...` over the growing
//! basis and every `j < i`, the S-polynomial of `(g_i, g_j)` is
//! top-reduced against the current basis and appended when nonzero. The
//! loop ends once every pair, including those created by appended
//! elements, has been treated.

use std::fmt;

use gf2gb_poly::{Monomial, Polynomial, TermOrder};

use crate::basis::GroebnerBasis;
use crate::criteria::{chain_criterion, product_criterion};
use crate::reductor::Reductor;

/// Configuration for Buchberger's algorithm.
#[derive(Clone, Debug)]
pub struct BuchbergerConfig {
    /// Skip pairs with coprime leading monomials.
    pub use_product_criterion: bool,
    /// Skip pairs covered by an earlier generator (second criterion).
    pub use_chain_criterion: bool,
    /// Maximum number of generators before giving up (0 = no limit).
    pub max_basis_size: usize,
}

impl Default for BuchbergerConfig {
    fn default() -> Self {
        Self {
            use_product_criterion: true,
            use_chain_criterion: false,
            max_basis_size: 0,
        }
    }
}

/// Counters collected during one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuchbergerStats {
    /// Pairs examined.
    pub pairs_considered: usize,
    /// Pairs skipped by the product criterion.
    pub product_criterion_skips: usize,
    /// Pairs skipped by the chain criterion.
    pub chain_criterion_skips: usize,
    /// S-polynomials that reduced to zero.
    pub zero_reductions: usize,
    /// Top-reduction steps over all S-polynomials.
    pub reduction_steps: usize,
    /// Generators appended to the input.
    pub basis_additions: usize,
}

impl fmt::Display for BuchbergerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pairs: {}, product skips: {}, chain skips: {}, zero: {}, steps: {}, added: {}",
            self.pairs_considered,
            self.product_criterion_skips,
            self.chain_criterion_skips,
            self.zero_reductions,
            self.reduction_steps,
            self.basis_additions
        )
    }
}

/// Buchberger's algorithm under a fixed term order.
#[derive(Clone, Debug)]
pub struct Buchberger<'o> {
    order: &'o TermOrder,
    config: BuchbergerConfig,
    stats: BuchbergerStats,
}

impl<'o> Buchberger<'o> {
    /// Creates a new instance.
    #[must_use]
    pub fn new(order: &'o TermOrder, config: BuchbergerConfig) -> Self {
        Self {
            order,
            config,
            stats: BuchbergerStats::default(),
        }
    }

    /// Returns the statistics of the last run.
    #[must_use]
    pub fn stats(&self) -> &BuchbergerStats {
        &self.stats
    }

    /// Computes a Gröbner basis of the ideal generated by `generators`.
    ///
    /// The result starts with the nonzero input generators in their
    /// original order, followed by the appended remainders.
    pub fn compute(&mut self, generators: &[Polynomial]) -> GroebnerBasis {
        self.stats = BuchbergerStats::default();
        let mut basis = Reductor::with_generators(self.order, generators.iter().cloned());
        tracing::debug!(
            generators = generators.len(),
            nonzero = basis.len(),
            order = %self.order,
            "starting Buchberger"
        );

        let mut complete = true;
        let mut i = 1;
        'outer: while i < basis.len() {
            for j in 0..i {
                if self.config.max_basis_size > 0 && basis.len() >= self.config.max_basis_size {
                    tracing::warn!(
                        limit = self.config.max_basis_size,
                        "basis size limit reached, stopping early"
                    );
                    complete = false;
                    break 'outer;
                }

                if let Some(remainder) = self.process_pair(&basis, i, j) {
                    tracing::trace!(i, j, index = basis.len(), poly = %remainder, "new generator");
                    basis.push(remainder);
                    self.stats.basis_additions += 1;
                }
            }
            i += 1;
        }

        tracing::debug!(size = basis.len(), stats = %self.stats, "Buchberger finished");
        GroebnerBasis::from_parts(basis.into_polys(), self.order.clone(), complete)
    }

    /// Treats the pair `(g_i, g_j)`, `j < i`. Returns the nonzero remainder
    /// of its S-polynomial, if any.
    fn process_pair(&mut self, basis: &Reductor<'_>, i: usize, j: usize) -> Option<Polynomial> {
        self.stats.pairs_considered += 1;
        let (lm_i, lm_j) = (&basis.leads()[i], &basis.leads()[j]);

        if self.config.use_product_criterion && product_criterion(lm_i, lm_j) {
            self.stats.product_criterion_skips += 1;
            return None;
        }

        if self.config.use_chain_criterion && chain_criterion(j, &lm_i.lcm(lm_j), basis.leads()) {
            self.stats.chain_criterion_skips += 1;
            return None;
        }

        let spoly = s_polynomial(&basis.polys()[i], lm_i, &basis.polys()[j], lm_j);
        tracing::trace!(i, j, spoly = %spoly, "S-polynomial");

        let (remainder, steps) = basis.reduce_fully(spoly);
        self.stats.reduction_steps += steps;

        if remainder.is_zero() {
            self.stats.zero_reductions += 1;
            None
        } else {
            Some(remainder)
        }
    }
}

/// Computes the S-polynomial of `f` and `g` given their leading monomials.
///
/// With `d = gcd(lm_f, lm_g)`, returns `(lm_g / d) * f + (lm_f / d) * g`,
/// which cancels `lcm(lm_f, lm_g)`.
#[must_use]
pub fn s_polynomial(
    f: &Polynomial,
    lm_f: &Monomial,
    g: &Polynomial,
    lm_g: &Monomial,
) -> Polynomial {
    let d = lm_f.gcd(lm_g);
    match (lm_f.div(&d), lm_g.div(&d)) {
        (Some(q_f), Some(q_g)) => f.mul_monomial(&q_g).sub(&g.mul_monomial(&q_f)),
        _ => unreachable!("a gcd divides both of its operands"),
    }
}

/// Computes a Gröbner basis with the default configuration.
#[must_use]
pub fn compute_groebner_basis(generators: &[Polynomial], order: &TermOrder) -> GroebnerBasis {
    Buchberger::new(order, BuchbergerConfig::default()).compute(generators)
}
