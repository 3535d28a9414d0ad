//! Polynomial systems and 0/1 assignments.

use std::fmt;

use gf2gb_poly::Polynomial;

use crate::error::SystemError;

/// A system of equations `p = 0` over GF(2) in the unknowns `x1..xN`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct System {
    num_vars: usize,
    polynomials: Vec<Polynomial>,
}

impl System {
    /// Creates a system, checking that every variable lies in `1..=n`.
    ///
    /// # Errors
    ///
    /// Fails if `n` is zero or if a polynomial uses a variable outside
    /// `1..=n`.
    pub fn new(num_vars: usize, polynomials: Vec<Polynomial>) -> Result<Self, SystemError> {
        if num_vars == 0 {
            return Err(SystemError::InvalidDimension { n: num_vars });
        }
        for (index, p) in polynomials.iter().enumerate() {
            let var = p.max_variable();
            if var as usize > num_vars {
                return Err(SystemError::VariableOutOfRange {
                    index,
                    var,
                    n: num_vars,
                });
            }
        }
        Ok(Self {
            num_vars,
            polynomials,
        })
    }

    /// Returns a system over the same unknowns with other equations.
    ///
    /// # Errors
    ///
    /// Fails if a polynomial uses a variable outside `1..=N`.
    pub fn with_polynomials(&self, polynomials: Vec<Polynomial>) -> Result<Self, SystemError> {
        Self::new(self.num_vars, polynomials)
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the equations' left-hand sides.
    #[must_use]
    pub fn polynomials(&self) -> &[Polynomial] {
        &self.polynomials
    }

    /// Consumes the system and returns its polynomials.
    #[must_use]
    pub fn into_polynomials(self) -> Vec<Polynomial> {
        self.polynomials
    }

    /// Checks whether `assignment` satisfies every equation.
    #[must_use]
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.polynomials.iter().all(|p| !p.evaluate(assignment.bits()))
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System ({} variables):", self.num_vars)?;
        for (i, p) in self.polynomials.iter().enumerate() {
            writeln!(f, "{} | {p} = 0", i + 1)?;
        }
        Ok(())
    }
}

/// A 0/1 value for each of the `N` unknowns.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment {
    bits: Vec<bool>,
}

impl Assignment {
    /// Creates an assignment from explicit bits (`bits[i]` is `x_{i+1}`).
    #[must_use]
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Decodes counter value `counter`: bit `i` is the value of `x_{i+1}`.
    #[must_use]
    pub fn from_counter(counter: u64, num_vars: usize) -> Self {
        Self {
            bits: (0..num_vars).map(|i| (counter >> i) & 1 == 1).collect(),
        }
    }

    /// Returns the bits.
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the value of `x_var`, if `var` is in range.
    #[must_use]
    pub fn value(&self, var: u32) -> Option<bool> {
        (var as usize).checked_sub(1).and_then(|i| self.bits.get(i).copied())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &b) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{}={}", i + 1, u8::from(b))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for &b in &self.bits {
            write!(f, "{}", u8::from(b))?;
        }
        write!(f, "]")
    }
}
