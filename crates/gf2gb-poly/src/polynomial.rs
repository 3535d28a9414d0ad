//! Sparse multivariate polynomials over GF(2).
//!
//! Every coefficient is 1, so a polynomial is a set of monomials. Addition
//! is symmetric difference: a monomial survives a sum iff it occurs an odd
//! number of times among the addends. Subtraction is the same operation.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;

use crate::monomial::Monomial;
use crate::ordering::TermOrder;

/// A polynomial over GF(2) in canonical (simplified) form.
///
/// Terms are kept in first-occurrence order and no monomial appears twice.
/// Equality and hashing ignore term order.
#[derive(Clone, Default)]
pub struct Polynomial {
    terms: Vec<Monomial>,
}

/// Canonicalizes a raw monomial sequence.
///
/// Counts occurrences of each monomial; a monomial survives, once, iff its
/// count is odd. Survivors keep the position of their first occurrence.
#[must_use]
pub fn simplify(monomials: Vec<Monomial>) -> Polynomial {
    let mut parity: FxHashMap<&Monomial, bool> = FxHashMap::default();
    for m in &monomials {
        *parity.entry(m).or_insert(false) ^= true;
    }

    let mut survivors: Vec<usize> = Vec::with_capacity(parity.len());
    for (i, m) in monomials.iter().enumerate() {
        // remove() marks the first occurrence as visited
        if let Some(true) = parity.remove(m) {
            survivors.push(i);
        }
    }
    drop(parity);

    let mut keep = survivors.into_iter().peekable();
    let terms = monomials
        .into_iter()
        .enumerate()
        .filter_map(|(i, m)| {
            if keep.peek() == Some(&i) {
                keep.next();
                Some(m)
            } else {
                None
            }
        })
        .collect();

    Polynomial { terms }
}

impl Polynomial {
    /// Creates a polynomial from a raw monomial sequence, cancelling pairs.
    #[must_use]
    pub fn new(monomials: Vec<Monomial>) -> Self {
        simplify(monomials)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_monomial(Monomial::one())
    }

    /// Creates a single-term polynomial.
    #[must_use]
    pub fn from_monomial(m: Monomial) -> Self {
        Self { terms: vec![m] }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Consumes the polynomial and returns its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Monomial> {
        self.terms
    }

    /// Checks whether `m` is a term of this polynomial.
    #[must_use]
    pub fn contains(&self, m: &Monomial) -> bool {
        self.terms.contains(m)
    }

    /// Returns the largest variable index used, or 0 for constants.
    #[must_use]
    pub fn max_variable(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(|m| m.factors().last().map(|&(v, _)| v))
            .max()
            .unwrap_or(0)
    }

    /// Computes the total degree (0 for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.terms.iter().map(Monomial::total_degree).max().unwrap_or(0)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.len() + other.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        simplify(terms)
    }

    /// Subtracts two polynomials. Identical to [`add`](Self::add) in
    /// characteristic 2.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(other)
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// # Panics
    ///
    /// Panics if an exponent of a product term exceeds [`Exp::MAX`](crate::Exp).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for m1 in &self.terms {
            for m2 in &other.terms {
                terms.push(m1.mul(m2));
            }
        }
        simplify(terms)
    }

    /// Multiplies by a monomial (distributes, then simplifies).
    ///
    /// # Panics
    ///
    /// Panics if an exponent of a product term exceeds [`Exp::MAX`](crate::Exp).
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial) -> Self {
        simplify(self.terms.iter().map(|t| m.mul(t)).collect())
    }

    /// Returns the leading (greatest) monomial under `order`, or `None` for
    /// the zero polynomial.
    ///
    /// # Panics
    ///
    /// Panics if two terms compare equal, which cannot happen on a
    /// canonical polynomial.
    #[must_use]
    pub fn leading_monomial(&self, order: &TermOrder) -> Option<&Monomial> {
        order.max_monomial(&self.terms)
    }

    /// Returns a copy with terms sorted from greatest to least.
    #[must_use]
    pub fn sorted(&self, order: &TermOrder) -> Self {
        let mut terms = self.terms.clone();
        order.sort_descending(&mut terms);
        Self { terms }
    }

    /// Performs one reduction step against `basis`.
    ///
    /// Finds the first generator whose leading monomial divides this
    /// polynomial's leading monomial and cancels it. Returns `None` when
    /// this polynomial is zero or no generator applies.
    #[must_use]
    pub fn reduce(&self, basis: &[Polynomial], order: &TermOrder) -> Option<Self> {
        let lead = self.leading_monomial(order)?;
        basis.iter().find_map(|f| {
            let quotient = lead.div(f.leading_monomial(order)?)?;
            Some(self.add(&f.mul_monomial(&quotient)))
        })
    }

    /// Applies [`reduce`](Self::reduce) until it no longer applies.
    ///
    /// Terminates because every step strictly lowers the leading monomial
    /// under a well-order.
    #[must_use]
    pub fn reduce_fully(&self, basis: &[Polynomial], order: &TermOrder) -> Self {
        let mut current = self.clone();
        while let Some(next) = current.reduce(basis, order) {
            current = next;
        }
        current
    }

    /// Evaluates the polynomial at a 0/1 assignment (`assignment[i]` is the
    /// value of `x_{i+1}`).
    #[must_use]
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        self.terms.iter().filter(|m| m.evaluate(assignment)).count() % 2 == 1
    }

    /// Terms in a canonical order independent of any term order.
    fn canonical_terms(&self) -> Vec<&Monomial> {
        let mut terms: Vec<&Monomial> = self.terms.iter().collect();
        terms.sort_unstable();
        terms
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.canonical_terms() == other.canonical_terms()
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_terms().hash(state);
    }
}

impl From<Monomial> for Polynomial {
    fn from(m: Monomial) -> Self {
        Self::from_monomial(m)
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        simplify(iter.into_iter().collect())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, m) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly[{self}]")
    }
}
