//! Text format for polynomial systems over GF(2).
//!
//! ```text
//! 3
//! # 2, 1, 3
//! x1*x2 + x3^2 + 1
//! x2 + x3
//! ```
//!
//! The first line is the variable count `N`. An optional second line
//! starting with `#` lists the variables from most to least significant;
//! without it the order is `x1 > x2 > ... > xN`. Every further non-blank
//! line is one polynomial. Whitespace is insignificant everywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_order, parse_polynomial, parse_system, ParsedSystem};
