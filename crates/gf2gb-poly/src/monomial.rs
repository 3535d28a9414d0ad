//! Sparse monomials over Boolean unknowns.
//!
//! A monomial is a finite map from variable index to a positive exponent,
//! stored as a short vector of `(variable, exponent)` pairs sorted by
//! variable index. The empty monomial is the constant `1`.
//!
//! Exponents are accumulated literally: `x1 * x1` is `x1^2`, which is kept
//! distinct from `x1` even though the two agree on every 0/1 assignment.
//! Solution sets are unaffected because evaluation ignores the exponent.

use std::fmt;

use smallvec::SmallVec;

/// A variable index, `1..=N`.
pub type Var = u32;

/// An exponent. Stored exponents are always at least 1.
pub type Exp = u32;

/// A monomial over GF(2).
///
/// The derived `Ord` is a structural order on the factor list and is only
/// meant for canonical sorting; algebraic comparisons go through
/// [`TermOrder::compare`](crate::ordering::TermOrder::compare).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Monomial {
    /// Factors sorted by variable index, no zero exponents.
    factors: SmallVec<[(Var, Exp); 4]>,
}

impl Monomial {
    /// Creates the identity monomial (1).
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates the monomial `x_var`.
    #[must_use]
    pub fn var(var: Var) -> Self {
        Self::pow(var, 1)
    }

    /// Creates the monomial `x_var^exp`. A zero exponent yields 1.
    #[must_use]
    pub fn pow(var: Var, exp: Exp) -> Self {
        let mut factors = SmallVec::new();
        if exp > 0 {
            factors.push((var, exp));
        }
        Self { factors }
    }

    /// Builds a monomial from `(variable, exponent)` pairs in any order.
    ///
    /// Repeated variables multiply (their exponents add) and zero exponents
    /// are dropped.
    ///
    /// # Panics
    ///
    /// Panics if a summed exponent exceeds [`Exp::MAX`]; see
    /// [`try_from_factors`](Self::try_from_factors).
    #[must_use]
    #[track_caller]
    pub fn from_factors<I>(factors: I) -> Self
    where
        I: IntoIterator<Item = (Var, Exp)>,
    {
        match Self::try_from_factors(factors) {
            Some(m) => m,
            None => exponent_overflow(),
        }
    }

    /// Like [`from_factors`](Self::from_factors), but returns `None` when a
    /// summed exponent does not fit in [`Exp`].
    #[must_use]
    pub fn try_from_factors<I>(factors: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Var, Exp)>,
    {
        let mut raw: SmallVec<[(Var, Exp); 4]> = factors.into_iter().filter(|&(_, e)| e > 0).collect();
        raw.sort_unstable_by_key(|&(v, _)| v);

        let mut factors: SmallVec<[(Var, Exp); 4]> = SmallVec::with_capacity(raw.len());
        for (v, e) in raw {
            match factors.last_mut() {
                Some((last, acc)) if *last == v => *acc = acc.checked_add(e)?,
                _ => factors.push((v, e)),
            }
        }
        Some(Self { factors })
    }

    /// Returns the factors, sorted by variable index.
    #[must_use]
    pub fn factors(&self) -> &[(Var, Exp)] {
        &self.factors
    }

    /// Returns the exponent of `var` (0 when absent).
    #[must_use]
    pub fn exponent(&self, var: Var) -> Exp {
        self.factors
            .binary_search_by_key(&var, |&(v, _)| v)
            .map_or(0, |i| self.factors[i].1)
    }

    /// Returns the variables carried by this monomial.
    pub fn variables(&self) -> impl Iterator<Item = Var> + '_ {
        self.factors.iter().map(|&(v, _)| v)
    }

    /// Returns the number of distinct variables.
    #[must_use]
    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.factors.iter().map(|&(_, e)| u64::from(e)).sum()
    }

    /// Checks if this is the identity monomial (1).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    /// Multiplies two monomials: union of supports, exponents add.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the product exceeds [`Exp::MAX`]; see
    /// [`checked_mul`](Self::checked_mul).
    #[must_use]
    #[track_caller]
    pub fn mul(&self, other: &Self) -> Self {
        match self.checked_mul(other) {
            Some(m) => m,
            None => exponent_overflow(),
        }
    }

    /// Multiplies two monomials, or returns `None` when an exponent of the
    /// product does not fit in [`Exp`].
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        let (a, b) = (&self.factors, &other.factors);
        let mut factors = SmallVec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            let ((va, ea), (vb, eb)) = (a[i], b[j]);
            if va == vb {
                factors.push((va, ea.checked_add(eb)?));
                i += 1;
                j += 1;
            } else if va < vb {
                factors.push((va, ea));
                i += 1;
            } else {
                factors.push((vb, eb));
                j += 1;
            }
        }
        factors.extend_from_slice(&a[i..]);
        factors.extend_from_slice(&b[j..]);

        Some(Self { factors })
    }

    /// Divides this monomial by another, if divisible.
    ///
    /// Returns `None` if `other` does not divide `self`. That is an ordinary
    /// outcome for the callers, not an error.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        let mut factors = SmallVec::with_capacity(self.factors.len());
        let mut rest = other.factors.iter().peekable();

        for &(v, e) in &self.factors {
            match rest.peek() {
                Some(&&(w, _)) if w < v => return None,
                Some(&&(w, d)) if w == v => {
                    rest.next();
                    match e.checked_sub(d) {
                        None => return None,
                        Some(0) => {}
                        Some(q) => factors.push((v, q)),
                    }
                }
                _ => factors.push((v, e)),
            }
        }

        if rest.next().is_some() {
            return None;
        }
        Some(Self { factors })
    }

    /// Checks if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        if other.factors.len() > self.factors.len() {
            return false;
        }
        other.factors.iter().all(|&(v, d)| self.exponent(v) >= d)
    }

    /// Computes the greatest common divisor: minimum exponent over the
    /// shared variables, 1 when the supports are disjoint.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let factors = self
            .factors
            .iter()
            .filter_map(|&(v, e)| match other.exponent(v) {
                0 => None,
                d => Some((v, e.min(d))),
            })
            .collect();
        Self { factors }
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let only_other = other
            .factors
            .iter()
            .filter(|&&(v, _)| self.exponent(v) == 0)
            .copied();
        Self::from_factors(
            self.factors
                .iter()
                .map(|&(v, e)| (v, e.max(other.exponent(v))))
                .chain(only_other),
        )
    }

    /// Checks if two monomials are coprime (GCD = 1).
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.factors.iter().all(|&(v, _)| other.exponent(v) == 0)
    }

    /// Evaluates the monomial at a 0/1 assignment.
    ///
    /// `assignment[i]` is the value of variable `i + 1`; variables past the
    /// end of the slice read as 0. Any positive power of a bit is the bit
    /// itself, so this is the conjunction of the assigned values.
    #[must_use]
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        self.factors
            .iter()
            .all(|&(v, _)| v >= 1 && assignment.get(v as usize - 1).copied().unwrap_or(false))
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn exponent_overflow() -> ! {
    panic!("exponent overflow: a monomial degree exceeds {}", Exp::MAX)
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }
        for (i, &(v, e)) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if e == 1 {
                write!(f, "x{v}")?;
            } else {
                write!(f, "x{v}^{e}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono({self})")
    }
}
