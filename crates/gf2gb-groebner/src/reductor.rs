//! Reduction against a growing set of generators.
//!
//! The reductor keeps each generator next to its leading monomial so the
//! divisor search does not re-sort polynomials on every step.

use gf2gb_poly::{Monomial, Polynomial, TermOrder};

/// An ordered list of nonzero generators with cached leading monomials.
#[derive(Clone, Debug)]
pub struct Reductor<'o> {
    order: &'o TermOrder,
    polys: Vec<Polynomial>,
    leads: Vec<Monomial>,
}

impl<'o> Reductor<'o> {
    /// Creates an empty reductor.
    #[must_use]
    pub fn new(order: &'o TermOrder) -> Self {
        Self {
            order,
            polys: Vec::new(),
            leads: Vec::new(),
        }
    }

    /// Creates a reductor from generators, skipping zero polynomials.
    #[must_use]
    pub fn with_generators<I>(order: &'o TermOrder, generators: I) -> Self
    where
        I: IntoIterator<Item = Polynomial>,
    {
        let mut reductor = Self::new(order);
        for g in generators {
            reductor.push(g);
        }
        reductor
    }

    /// Appends a generator. Returns `false` (and stores nothing) for zero.
    pub fn push(&mut self, poly: Polynomial) -> bool {
        match poly.leading_monomial(self.order).cloned() {
            Some(lead) => {
                self.leads.push(lead);
                self.polys.push(poly);
                true
            }
            None => false,
        }
    }

    /// Returns the term order.
    #[must_use]
    pub fn order(&self) -> &'o TermOrder {
        self.order
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if there are no generators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Returns the generators in insertion order.
    #[must_use]
    pub fn polys(&self) -> &[Polynomial] {
        &self.polys
    }

    /// Returns the cached leading monomials, aligned with [`polys`](Self::polys).
    #[must_use]
    pub fn leads(&self) -> &[Monomial] {
        &self.leads
    }

    /// Consumes the reductor and returns its generators.
    #[must_use]
    pub fn into_polys(self) -> Vec<Polynomial> {
        self.polys
    }

    /// Finds the first generator whose leading monomial divides `m`,
    /// skipping index `skip`. Returns its index and the quotient.
    #[must_use]
    pub fn find_divisor(&self, m: &Monomial, skip: Option<usize>) -> Option<(usize, Monomial)> {
        self.leads
            .iter()
            .enumerate()
            .filter(|&(k, _)| Some(k) != skip)
            .find_map(|(k, lead)| m.div(lead).map(|q| (k, q)))
    }

    /// One top-reduction step; `None` when `h` is zero or irreducible.
    #[must_use]
    pub fn top_reduce(&self, h: &Polynomial) -> Option<Polynomial> {
        let lead = h.leading_monomial(self.order)?;
        let (k, quotient) = self.find_divisor(lead, None)?;
        Some(h.add(&self.polys[k].mul_monomial(&quotient)))
    }

    /// Top-reduces `h` to a fixed point. Returns the remainder and the
    /// number of steps taken.
    #[must_use]
    pub fn reduce_fully(&self, h: Polynomial) -> (Polynomial, usize) {
        let mut current = h;
        let mut steps = 0;
        while let Some(next) = self.top_reduce(&current) {
            tracing::trace!(step = steps, remainder = %next, "top reduction");
            current = next;
            steps += 1;
        }
        (current, steps)
    }

    /// Computes the full normal form of `h`: no term of the result is
    /// divisible by any leading monomial (other than generator `skip`).
    ///
    /// Terms are peeled off greatest first; irreducible ones move to the
    /// remainder, reducible ones are cancelled by a multiple of their
    /// divisor, which only introduces smaller terms.
    #[must_use]
    pub fn normal_form(&self, h: &Polynomial, skip: Option<usize>) -> Polynomial {
        let mut pending = h.clone();
        let mut remainder = Vec::new();

        while let Some(lead) = pending.leading_monomial(self.order).cloned() {
            match self.find_divisor(&lead, skip) {
                Some((k, quotient)) => {
                    pending = pending.add(&self.polys[k].mul_monomial(&quotient));
                }
                None => {
                    pending = pending.add(&Polynomial::from(lead.clone()));
                    remainder.push(lead);
                }
            }
        }

        Polynomial::new(remainder)
    }
}
