//! Minimal and reduced Gröbner bases.
//!
//! Minimization drops every generator whose leading monomial is divisible
//! by another generator's leading monomial. Reduction then rewrites each
//! surviving generator into its normal form modulo the others, so no tail
//! term is divisible by any other leading monomial. Minimization must run
//! first; reduction relies on no leading monomial dividing another.

use gf2gb_poly::{Polynomial, TermOrder};
use rayon::prelude::*;

use crate::basis::GroebnerBasis;
use crate::reductor::Reductor;

/// Removes redundant generators.
///
/// Generator `i` is dropped when some `lm(g_j)` divides `lm(g_i)`, except
/// that among equal leading monomials the lowest index survives. Zero
/// polynomials are dropped as well. Survivors keep their relative order.
#[must_use]
pub fn minimize(polys: &[Polynomial], order: &TermOrder) -> Vec<Polynomial> {
    let leads: Vec<_> = polys.iter().map(|p| p.leading_monomial(order)).collect();

    polys
        .iter()
        .enumerate()
        .filter(|&(i, _)| {
            let Some(lm_i) = leads[i] else {
                return false;
            };
            !leads.iter().enumerate().any(|(j, lm_j)| match *lm_j {
                Some(lm_j) if j != i && lm_i.is_divisible_by(lm_j) => lm_i != lm_j || j < i,
                _ => false,
            })
        })
        .map(|(_, p)| p.clone())
        .collect()
}

/// Replaces each generator of a minimal basis by its normal form modulo
/// the other generators. Terms of each result are sorted greatest first.
#[must_use]
pub fn interreduce(polys: Vec<Polynomial>, order: &TermOrder) -> Vec<Polynomial> {
    let reductor = Reductor::with_generators(order, polys);
    (0..reductor.len())
        .into_par_iter()
        .map(|k| {
            reductor
                .normal_form(&reductor.polys()[k], Some(k))
                .sorted(order)
        })
        .collect()
}

/// Checks that no leading monomial divides another.
#[must_use]
pub fn is_minimal(polys: &[Polynomial], order: &TermOrder) -> bool {
    let Some(leads) = polys
        .iter()
        .map(|p| p.leading_monomial(order))
        .collect::<Option<Vec<_>>>()
    else {
        return false;
    };

    leads.iter().enumerate().all(|(i, lm_i)| {
        leads
            .iter()
            .enumerate()
            .all(|(j, lm_j)| i == j || !lm_i.is_divisible_by(lm_j))
    })
}

/// Checks that the basis is minimal and no non-leading term of a
/// generator is divisible by another generator's leading monomial.
#[must_use]
pub fn is_reduced(polys: &[Polynomial], order: &TermOrder) -> bool {
    if !is_minimal(polys, order) {
        return false;
    }
    let reductor = Reductor::with_generators(order, polys.iter().cloned());

    reductor.polys().iter().enumerate().all(|(k, g)| {
        let lead = &reductor.leads()[k];
        g.terms()
            .iter()
            .filter(|t| *t != lead)
            .all(|t| reductor.find_divisor(t, Some(k)).is_none())
    })
}

impl GroebnerBasis {
    /// Returns the minimal basis (redundant generators removed).
    #[must_use]
    pub fn minimize(&self) -> GroebnerBasis {
        let polys = minimize(self.polynomials(), self.order());
        GroebnerBasis::from_parts(polys, self.order().clone(), self.is_complete())
    }

    /// Returns the reduced Gröbner basis: minimization followed by
    /// inter-reduction. Unique for the ideal and term order up to the
    /// order of generators.
    #[must_use]
    pub fn minimize_and_reduce(&self) -> GroebnerBasis {
        let order = self.order();
        let minimal = minimize(self.polynomials(), order);
        tracing::debug!(before = self.len(), after = minimal.len(), "minimized basis");

        let reduced = interreduce(minimal, order);
        tracing::debug!(
            terms = reduced.iter().map(Polynomial::len).sum::<usize>(),
            "reduced basis"
        );
        GroebnerBasis::from_parts(reduced, order.clone(), self.is_complete())
    }

    /// Checks that no leading monomial divides another.
    #[must_use]
    pub fn is_minimal(&self) -> bool {
        is_minimal(self.polynomials(), self.order())
    }

    /// Checks that the basis is minimal and fully inter-reduced.
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        is_reduced(self.polynomials(), self.order())
    }
}

/// Minimizes and reduces `basis` into a new, independent basis.
#[must_use]
pub fn minimize_and_reduce(basis: &GroebnerBasis) -> GroebnerBasis {
    basis.minimize_and_reduce()
}
