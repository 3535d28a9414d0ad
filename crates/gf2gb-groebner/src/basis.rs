//! Gröbner bases bound to the term order they were computed under.

use std::fmt;

use gf2gb_poly::{Monomial, Polynomial, TermOrder};

use crate::reductor::Reductor;

/// A Gröbner basis (raw, minimal or reduced) together with its order.
#[derive(Clone, Debug)]
pub struct GroebnerBasis {
    polys: Vec<Polynomial>,
    order: TermOrder,
    complete: bool,
}

impl GroebnerBasis {
    pub(crate) fn from_parts(polys: Vec<Polynomial>, order: TermOrder, complete: bool) -> Self {
        Self {
            polys,
            order,
            complete,
        }
    }

    /// Returns the generators.
    #[must_use]
    pub fn polynomials(&self) -> &[Polynomial] {
        &self.polys
    }

    /// Consumes the basis and returns its generators.
    #[must_use]
    pub fn into_polynomials(self) -> Vec<Polynomial> {
        self.polys
    }

    /// Returns the term order.
    #[must_use]
    pub fn order(&self) -> &TermOrder {
        &self.order
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the basis has no generators (the zero ideal).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Returns false when construction stopped early at the configured
    /// size limit, in which case the generators are not known to form a
    /// Gröbner basis.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns true if the ideal is the whole ring (some generator is 1).
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.polys.iter().any(|p| p.len() == 1 && p.terms()[0].is_constant())
    }

    /// Returns the leading monomial of every generator.
    #[must_use]
    pub fn leading_monomials(&self) -> Vec<&Monomial> {
        self.polys
            .iter()
            .filter_map(|p| p.leading_monomial(&self.order))
            .collect()
    }

    /// Computes the remainder of `p` modulo the basis.
    #[must_use]
    pub fn normal_form(&self, p: &Polynomial) -> Polynomial {
        Reductor::with_generators(&self.order, self.polys.iter().cloned()).normal_form(p, None)
    }

    /// Decides ideal membership: `p` lies in the ideal iff its normal form
    /// is zero. Only meaningful on a complete basis.
    #[must_use]
    pub fn contains(&self, p: &Polynomial) -> bool {
        self.normal_form(p).is_zero()
    }

    /// Returns a copy with every generator's terms sorted greatest first
    /// and generators sorted by decreasing leading monomial.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut polys: Vec<Polynomial> = self.polys.iter().map(|p| p.sorted(&self.order)).collect();
        polys.sort_by(|a, b| match (a.terms().first(), b.terms().first()) {
            (Some(la), Some(lb)) => self.order.compare(lb, la),
            (la, lb) => lb.is_some().cmp(&la.is_some()),
        });
        Self::from_parts(polys, self.order.clone(), self.complete)
    }
}

impl fmt::Display for GroebnerBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.polys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
