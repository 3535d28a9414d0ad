//! Criteria for detecting useless S-polynomials.
//!
//! These criteria allow early rejection of pairs whose S-polynomial is
//! known to reduce to zero.

use gf2gb_poly::Monomial;

/// Checks Buchberger's first criterion (product criterion).
///
/// If the leading monomials are coprime (their gcd is 1), then S(f, g)
/// reduces to zero.
#[must_use]
pub fn product_criterion(lm_f: &Monomial, lm_g: &Monomial) -> bool {
    lm_f.gcd(lm_g).is_constant()
}

/// Checks the chain criterion (Buchberger's second criterion) for the pair
/// `(i, j)` with `j < i`.
///
/// Pairs are visited as `i` ascending, then `j` ascending below `i`, so
/// when `(i, j)` comes up both `(i, k)` and `(j, k)` have already been
/// treated for every `k < j`. If some such `lm(g_k)` divides
/// `lcm(lm(g_i), lm(g_j))`, the pair is redundant.
#[must_use]
pub fn chain_criterion(j: usize, lcm: &Monomial, leads: &[Monomial]) -> bool {
    leads[..j].iter().any(|lm_k| lcm.is_divisible_by(lm_k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(factors: &[(u32, u32)]) -> Monomial {
        Monomial::from_factors(factors.iter().copied())
    }

    #[test]
    fn test_product_criterion() {
        let m1 = mono(&[(1, 2)]); // x1^2
        let m2 = mono(&[(2, 3)]); // x2^3

        assert!(product_criterion(&m1, &m2)); // Coprime

        let m3 = mono(&[(1, 1), (2, 1)]); // x1*x2
        assert!(!product_criterion(&m1, &m3)); // Not coprime (share x1)

        // The constant is coprime to everything
        assert!(product_criterion(&Monomial::one(), &m3));
    }

    #[test]
    fn test_chain_criterion() {
        let leads = vec![mono(&[(1, 1)]), mono(&[(2, 1)]), mono(&[(1, 1), (3, 1)]), mono(&[(2, 1), (3, 1)])];
        // Pair (3, 2): lcm = x1*x2*x3, x1 at k = 0 divides it
        let lcm = leads[3].lcm(&leads[2]);
        assert!(chain_criterion(2, &lcm, &leads));
        // Pair (1, 0): nothing below j = 0
        assert!(!chain_criterion(0, &leads[1].lcm(&leads[0]), &leads));
        // Pair (3, 1): lcm = x2*x3, x1 does not divide it
        assert!(!chain_criterion(1, &leads[3].lcm(&leads[1]), &leads));
    }
}
