//! Term orders over a permutation of the variables.
//!
//! A [`TermOrder`] fixes which variable is most significant (a permutation
//! of `1..=N`) and a [`MonomialOrder`] family that turns that precedence
//! into a total order on monomials. The order is an explicit value handed
//! to every operation that compares monomials.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::error::OrderError;
use crate::monomial::{Exp, Monomial, Var};

/// A monomial ordering family.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order over the variable precedence.
    ///
    /// The first variable (in precedence) at which the exponents differ
    /// decides; a monomial carrying a variable beats one that lacks it.
    #[default]
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    DegLex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then looks at the least significant
    /// variable: the monomial with the smaller exponent there is greater.
    DegRevLex,
}

impl MonomialOrder {
    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::DegLex => "deglex",
            MonomialOrder::DegRevLex => "degrevlex",
        }
    }
}

impl fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated total order on the monomials in `N` variables.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TermOrder {
    /// Variables from most to least significant.
    precedence: Vec<Var>,
    /// `rank[v - 1]` is the position of `v` in `precedence`.
    rank: Vec<usize>,
    kind: MonomialOrder,
}

/// A monomial's factors keyed by precedence rank, most significant first.
type Ranked = SmallVec<[(usize, Exp); 4]>;

impl TermOrder {
    /// Largest number of variables an order can rank.
    pub const MAX_VARIABLES: usize = 1 << 20;

    /// Creates an order from a permutation of `1..=n`, most significant
    /// variable first.
    ///
    /// # Errors
    ///
    /// Fails if `n` is zero or above [`MAX_VARIABLES`](Self::MAX_VARIABLES),
    /// or if `precedence` repeats, omits or exceeds a variable.
    pub fn new(precedence: &[Var], n: usize) -> Result<Self, OrderError> {
        if n == 0 || n > Self::MAX_VARIABLES {
            return Err(OrderError::InvalidDimension { n });
        }

        let mut rank = vec![usize::MAX; n];
        for (pos, &var) in precedence.iter().enumerate() {
            let slot = (var as usize)
                .checked_sub(1)
                .and_then(|i| rank.get_mut(i))
                .ok_or(OrderError::VariableOutOfRange { var, n })?;
            if *slot != usize::MAX {
                return Err(OrderError::DuplicateVariable(var));
            }
            *slot = pos;
        }

        if let Some(i) = rank.iter().position(|&r| r == usize::MAX) {
            return Err(OrderError::MissingVariable(i as Var + 1));
        }

        Ok(Self {
            precedence: precedence.to_vec(),
            rank,
            kind: MonomialOrder::default(),
        })
    }

    /// Creates the identity order `x1 > x2 > ... > xn`.
    ///
    /// # Errors
    ///
    /// Fails if `n` is zero or above [`MAX_VARIABLES`](Self::MAX_VARIABLES).
    pub fn identity(n: usize) -> Result<Self, OrderError> {
        if n > Self::MAX_VARIABLES {
            return Err(OrderError::InvalidDimension { n });
        }
        let last = Var::try_from(n).map_err(|_| OrderError::InvalidDimension { n })?;
        let precedence: Vec<Var> = (1..=last).collect();
        Self::new(&precedence, n)
    }

    /// Replaces the ordering family, keeping the variable precedence.
    #[must_use]
    pub fn with_kind(mut self, kind: MonomialOrder) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.rank.len()
    }

    /// Returns the variables from most to least significant.
    #[must_use]
    pub fn precedence(&self) -> &[Var] {
        &self.precedence
    }

    /// Returns the ordering family.
    #[must_use]
    pub fn kind(&self) -> MonomialOrder {
        self.kind
    }

    /// Returns the significance rank of `var` (0 is most significant).
    ///
    /// Variables outside `1..=N` rank after every known variable, by index,
    /// so comparisons stay total.
    #[must_use]
    pub fn rank(&self, var: Var) -> usize {
        (var as usize)
            .checked_sub(1)
            .and_then(|i| self.rank.get(i).copied())
            .unwrap_or(self.rank.len() + var as usize)
    }

    /// Compares two monomials.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let (ra, rb) = (self.ranked(a), self.ranked(b));
        match self.kind {
            MonomialOrder::Lex => cmp_lex(&ra, &rb),
            MonomialOrder::DegLex => a
                .total_degree()
                .cmp(&b.total_degree())
                .then_with(|| cmp_lex(&ra, &rb)),
            MonomialOrder::DegRevLex => a
                .total_degree()
                .cmp(&b.total_degree())
                .then_with(|| cmp_revlex(&ra, &rb)),
        }
    }

    /// Returns the greatest monomial of `terms`, or `None` when empty.
    ///
    /// # Panics
    ///
    /// Panics if two entries compare equal, which means the terms were not
    /// canonicalized.
    pub fn max_monomial<'a, I>(&self, terms: I) -> Option<&'a Monomial>
    where
        I: IntoIterator<Item = &'a Monomial>,
    {
        let mut iter = terms.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, |best, m| match self.compare(m, best) {
            Ordering::Greater => m,
            Ordering::Less => best,
            Ordering::Equal => duplicate_monomial(best, m),
        }))
    }

    /// Sorts monomials from greatest to least.
    ///
    /// # Panics
    ///
    /// Panics if two entries compare equal.
    pub fn sort_descending(&self, terms: &mut [Monomial]) {
        terms.sort_by(|a, b| match self.compare(b, a) {
            Ordering::Equal => duplicate_monomial(a, b),
            ord => ord,
        });
    }

    fn ranked(&self, m: &Monomial) -> Ranked {
        let mut ranked: Ranked = m.factors().iter().map(|&(v, e)| (self.rank(v), e)).collect();
        ranked.sort_unstable_by_key(|&(r, _)| r);
        ranked
    }
}

impl fmt::Display for TermOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vars: Vec<String> = self.precedence.iter().map(|v| format!("x{v}")).collect();
        write!(f, "{} ({})", self.kind, vars.join(" > "))
    }
}

/// Lex over rank-sorted factor lists.
fn cmp_lex(a: &[(usize, Exp)], b: &[(usize, Exp)]) -> Ordering {
    for (&(ra, ea), &(rb, eb)) in a.iter().zip(b) {
        if ra != rb {
            // The side holding the more significant variable is greater
            return rb.cmp(&ra);
        }
        match ea.cmp(&eb) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Reverse lex over rank-sorted factor lists, walking from the least
/// significant variable.
fn cmp_revlex(a: &[(usize, Exp)], b: &[(usize, Exp)]) -> Ordering {
    for (&(ra, ea), &(rb, eb)) in a.iter().rev().zip(b.iter().rev()) {
        if ra != rb {
            // The side holding the less significant variable is smaller
            return rb.cmp(&ra);
        }
        match eb.cmp(&ea) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Aborts on two equal monomials met during leading-term selection.
///
/// Reaching this is a canonicalization defect, not a data error.
#[cold]
#[inline(never)]
#[track_caller]
fn duplicate_monomial(a: &Monomial, b: &Monomial) -> ! {
    panic!("invariant violated: monomials {a} and {b} compare equal in a canonical polynomial")
}
