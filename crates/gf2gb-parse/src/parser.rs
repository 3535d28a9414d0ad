//! Recursive-descent reader for systems, polynomials and order lines.
//!
//! Grammar, after whitespace removal:
//!
//! ```text
//! polynomial := monomial ('+' monomial)*
//! monomial   := '1' | term ('*' term)*
//! term       := 'x' number ('^' number)?
//! order      := '#' (number (',' number)*)?
//! ```
//!
//! A zero exponent drops its factor and a variable repeated inside one
//! monomial multiplies. Repeated monomials cancel in pairs.

use gf2gb_poly::{Exp, Monomial, Polynomial, TermOrder, Var};

use crate::error::ParseError;

/// The contents of a system file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedSystem {
    /// Number of unknowns.
    pub num_vars: usize,
    /// Term order from the `#` line, or the identity order.
    pub order: TermOrder,
    /// One polynomial per non-blank line, in file order.
    pub polynomials: Vec<Polynomial>,
}

/// Parses a whole system file.
///
/// # Errors
///
/// Returns the first error met, with its line and column.
pub fn parse_system(text: &str) -> Result<ParsedSystem, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l)).peekable();

    let (first_no, first) = lines.next().ok_or(ParseError::Empty)?;
    let num_vars = parse_dimension(first, first_no)?;

    let order = match lines.peek() {
        Some(&(no, line)) if line.trim_start().starts_with('#') => {
            lines.next();
            order_at(line, no, num_vars)?
        }
        _ => TermOrder::identity(num_vars).map_err(|source| ParseError::Order {
            line: first_no,
            source,
        })?,
    };

    let polynomials = lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(no, line)| polynomial_at(line, no, num_vars))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        vars = num_vars,
        polynomials = polynomials.len(),
        order = %order,
        "parsed system"
    );
    Ok(ParsedSystem {
        num_vars,
        order,
        polynomials,
    })
}

/// Parses one polynomial over `x1..xn`. Errors report line 1.
///
/// # Errors
///
/// Fails on text outside the grammar, on numbers above `u32::MAX`, and on
/// variables outside `1..=n`.
pub fn parse_polynomial(line: &str, n: usize) -> Result<Polynomial, ParseError> {
    polynomial_at(line, 1, n)
}

/// Parses an order line such as `# 2, 1, 3`. Errors report line 1.
///
/// # Errors
///
/// Fails if the line does not start with `#`, is outside the grammar, or
/// is not a permutation of `1..=n`.
pub fn parse_order(line: &str, n: usize) -> Result<TermOrder, ParseError> {
    order_at(line, 1, n)
}

fn parse_dimension(line: &str, line_no: usize) -> Result<usize, ParseError> {
    let text: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    match text.parse::<usize>() {
        Ok(n) if (1..=TermOrder::MAX_VARIABLES).contains(&n) => Ok(n),
        _ => Err(ParseError::InvalidDimension {
            line: line_no,
            found: line.trim().to_string(),
        }),
    }
}

fn polynomial_at(line: &str, line_no: usize, n: usize) -> Result<Polynomial, ParseError> {
    let mut cursor = Cursor::new(line, line_no);
    let mut monomials = vec![cursor.monomial(n)?];
    while cursor.eat('+') {
        monomials.push(cursor.monomial(n)?);
    }
    cursor.finish("'+' or end of line")?;
    Ok(Polynomial::new(monomials))
}

fn order_at(line: &str, line_no: usize, n: usize) -> Result<TermOrder, ParseError> {
    let mut cursor = Cursor::new(line, line_no);
    cursor.expect('#', "'#'")?;

    let mut precedence = Vec::new();
    if !cursor.at_end() {
        precedence.push(cursor.number()?);
        while cursor.eat(',') {
            precedence.push(cursor.number()?);
        }
    }
    cursor.finish("',' or end of line")?;

    TermOrder::new(&precedence, n).map_err(|source| ParseError::Order {
        line: line_no,
        source,
    })
}

/// Position over the non-whitespace characters of one line.
struct Cursor {
    chars: Vec<(usize, char)>,
    pos: usize,
    line: usize,
    end_column: usize,
}

impl Cursor {
    fn new(text: &str, line: usize) -> Self {
        let chars: Vec<(usize, char)> = text
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, c)| (i + 1, c))
            .collect();
        Self {
            chars,
            pos: 0,
            line,
            end_column: text.chars().count() + 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn column(&self) -> usize {
        self.chars.get(self.pos).map_or(self.end_column, |&(col, _)| col)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn finish(&self, expected: &'static str) -> Result<(), ParseError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedChar {
            line: self.line,
            column: self.column(),
            found: self
                .peek()
                .map_or_else(|| "end of line".to_string(), |c| format!("{c:?}")),
            expected,
        }
    }

    fn number(&mut self) -> Result<u32, ParseError> {
        let column = self.column();
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.unexpected("a digit"));
        }

        let mut value: u32 = 0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or(ParseError::InvalidNumber {
                    line: self.line,
                    column,
                })?;
            self.pos += 1;
        }
        Ok(value)
    }

    fn monomial(&mut self, n: usize) -> Result<Monomial, ParseError> {
        match self.peek() {
            Some('1') => {
                self.pos += 1;
                Ok(Monomial::one())
            }
            Some('x') => {
                let column = self.column();
                let mut factors = vec![self.term(n)?];
                while self.eat('*') {
                    factors.push(self.term(n)?);
                }
                Monomial::try_from_factors(factors).ok_or(ParseError::ExponentOverflow {
                    line: self.line,
                    column,
                })
            }
            _ => Err(self.unexpected("'1' or 'x'")),
        }
    }

    fn term(&mut self, n: usize) -> Result<(Var, Exp), ParseError> {
        let column = self.column();
        self.expect('x', "'x'")?;
        let var = self.number()?;
        if var == 0 || var as usize > n {
            return Err(ParseError::VariableOutOfRange {
                line: self.line,
                column,
                var,
                n,
            });
        }

        let exp = if self.eat('^') { self.number()? } else { 1 };
        Ok((var, exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf2gb_poly::{MonomialOrder, OrderError};

    fn x(v: Var) -> Monomial {
        Monomial::var(v)
    }

    #[test]
    fn test_parse_polynomial() {
        let p = parse_polynomial("x1*x2 + x3^2 + 1", 3).unwrap();
        assert_eq!(
            p,
            Polynomial::new(vec![
                Monomial::from_factors([(1, 1), (2, 1)]),
                Monomial::pow(3, 2),
                Monomial::one(),
            ])
        );
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let spaced = parse_polynomial(" x 1 * x 2 +\t1 ", 2).unwrap();
        let tight = parse_polynomial("x1*x2+1", 2).unwrap();
        assert_eq!(spaced, tight);
    }

    #[test]
    fn test_zero_exponent_and_repeats() {
        assert_eq!(parse_polynomial("x3^0*x1", 3).unwrap(), Polynomial::from(x(1)));
        assert_eq!(parse_polynomial("x1*x1", 1).unwrap(), Polynomial::from(Monomial::pow(1, 2)));
        assert_eq!(parse_polynomial("x2^0", 2).unwrap(), Polynomial::one());
        // x1 + x1 cancels
        assert!(parse_polynomial("x1 + x1", 1).unwrap().is_zero());
    }

    #[test]
    fn test_unexpected_characters() {
        assert_eq!(
            parse_polynomial("x1 + y2", 2),
            Err(ParseError::UnexpectedChar {
                line: 1,
                column: 6,
                found: "'y'".to_string(),
                expected: "'1' or 'x'",
            })
        );
        assert_eq!(
            parse_polynomial("x1 +", 1),
            Err(ParseError::UnexpectedChar {
                line: 1,
                column: 5,
                found: "end of line".to_string(),
                expected: "'1' or 'x'",
            })
        );
        assert!(matches!(
            parse_polynomial("x1^", 1),
            Err(ParseError::UnexpectedChar { expected: "a digit", .. })
        ));
        assert!(matches!(
            parse_polynomial("1*x1", 1),
            Err(ParseError::UnexpectedChar { column: 2, .. })
        ));
        assert!(matches!(parse_polynomial("", 1), Err(ParseError::UnexpectedChar { .. })));
    }

    #[test]
    fn test_variable_range() {
        assert_eq!(
            parse_polynomial("x1 + x4", 3),
            Err(ParseError::VariableOutOfRange {
                line: 1,
                column: 6,
                var: 4,
                n: 3,
            })
        );
        assert!(matches!(parse_polynomial("x0", 3), Err(ParseError::VariableOutOfRange { var: 0, .. })));
        assert!(matches!(
            parse_polynomial("x99999999999", 3),
            Err(ParseError::InvalidNumber { column: 2, .. })
        ));
    }

    #[test]
    fn test_exponent_overflow() {
        assert_eq!(
            parse_polynomial("x1^4294967295*x1", 1),
            Err(ParseError::ExponentOverflow { line: 1, column: 1 })
        );
        assert!(matches!(
            parse_polynomial("1 + x2 * x1^4294967295 * x1", 2),
            Err(ParseError::ExponentOverflow { column: 5, .. })
        ));
        assert_eq!(
            parse_polynomial("x1^4294967295", 1).unwrap(),
            Polynomial::from(Monomial::pow(1, u32::MAX))
        );
    }

    #[test]
    fn test_parse_order() {
        let order = parse_order("# 2, 1, 3", 3).unwrap();
        assert_eq!(order.precedence(), &[2, 1, 3]);
        assert_eq!(order.kind(), MonomialOrder::Lex);

        assert_eq!(
            parse_order("#1,1", 2).unwrap_err(),
            ParseError::Order {
                line: 1,
                source: OrderError::DuplicateVariable(1),
            }
        );
        assert!(matches!(
            parse_order("#", 1),
            Err(ParseError::Order {
                source: OrderError::MissingVariable(1),
                ..
            })
        ));
        assert!(matches!(parse_order("1,2", 2), Err(ParseError::UnexpectedChar { .. })));
        assert!(matches!(parse_order("#1;2", 2), Err(ParseError::UnexpectedChar { .. })));
    }

    #[test]
    fn test_parse_system() {
        let text = "3\n# 3, 1, 2\nx1*x2 + x3\n\nx2 + 1\n";
        let parsed = parse_system(text).unwrap();
        assert_eq!(parsed.num_vars, 3);
        assert_eq!(parsed.order.precedence(), &[3, 1, 2]);
        assert_eq!(
            parsed.polynomials,
            [
                Polynomial::new(vec![Monomial::from_factors([(1, 1), (2, 1)]), x(3)]),
                Polynomial::new(vec![x(2), Monomial::one()]),
            ]
        );
    }

    #[test]
    fn test_parse_system_without_order() {
        let parsed = parse_system("2\r\nx1 + x2\r\n").unwrap();
        assert_eq!(parsed.order.precedence(), &[1, 2]);
        assert_eq!(parsed.polynomials.len(), 1);
    }

    #[test]
    fn test_parse_system_errors() {
        assert_eq!(parse_system(""), Err(ParseError::Empty));
        assert_eq!(parse_system(" \n\n"), Err(ParseError::Empty));
        assert!(matches!(
            parse_system("0\nx1"),
            Err(ParseError::InvalidDimension { line: 1, .. })
        ));
        assert!(matches!(
            parse_system("4294967297\nx1\n"),
            Err(ParseError::InvalidDimension { line: 1, .. })
        ));
        let too_many = format!("{}\nx1\n", TermOrder::MAX_VARIABLES + 1);
        assert!(matches!(
            parse_system(&too_many),
            Err(ParseError::InvalidDimension { line: 1, .. })
        ));
        assert!(matches!(
            parse_system("two\nx1"),
            Err(ParseError::InvalidDimension { line: 1, .. })
        ));

        let err = parse_system("2\n#2,1\nx1\n\nx3\n").unwrap_err();
        assert_eq!(err.line(), Some(5));
        assert!(matches!(err, ParseError::VariableOutOfRange { var: 3, .. }));

        let err = parse_system("2\n#2,3\nx1\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
