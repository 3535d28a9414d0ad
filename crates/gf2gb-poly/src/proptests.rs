//! Property-based tests for monomial and polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::monomial::{Monomial, Var};
    use crate::ordering::{MonomialOrder, TermOrder};
    use crate::polynomial::{simplify, Polynomial};

    const N: usize = 4;

    // Strategy for monomials in x1..x4 with exponents up to 3
    fn small_mono() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec((1..=N as Var, 0u32..=3), 0..=3).prop_map(Monomial::from_factors)
    }

    // Raw monomial lists, duplicates allowed
    fn raw_terms() -> impl Strategy<Value = Vec<Monomial>> {
        proptest::collection::vec(small_mono(), 0..=6)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        raw_terms().prop_map(simplify)
    }

    // Any permutation of x1..x4 with any ordering family
    fn term_order() -> impl Strategy<Value = TermOrder> {
        let kind = prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::DegLex),
            Just(MonomialOrder::DegRevLex),
        ];
        (Just((1..=N as Var).collect::<Vec<_>>()).prop_shuffle(), kind)
            .prop_map(|(perm, kind)| TermOrder::new(&perm, N).unwrap().with_kind(kind))
    }

    fn assignment() -> impl Strategy<Value = Vec<bool>> {
        proptest::collection::vec(any::<bool>(), N)
    }

    proptest! {
        // Monomial algebra

        #[test]
        fn mono_mul_then_div(a in small_mono(), b in small_mono()) {
            prop_assert_eq!(a.mul(&b).div(&b), Some(a));
        }

        #[test]
        fn mono_gcd_divides_both(a in small_mono(), b in small_mono()) {
            let g = a.gcd(&b);
            prop_assert!(a.is_divisible_by(&g));
            prop_assert!(b.is_divisible_by(&g));
            prop_assert_eq!(g.is_constant(), a.is_coprime(&b));
        }

        #[test]
        fn mono_lcm_times_gcd(a in small_mono(), b in small_mono()) {
            prop_assert_eq!(a.lcm(&b).mul(&a.gcd(&b)), a.mul(&b));
        }

        #[test]
        fn mono_div_agrees_with_divisibility(a in small_mono(), b in small_mono()) {
            prop_assert_eq!(a.div(&b).is_some(), a.is_divisible_by(&b));
        }

        // Term order

        #[test]
        fn order_is_antisymmetric(order in term_order(), a in small_mono(), b in small_mono()) {
            prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
            prop_assert_eq!(order.compare(&a, &a), Ordering::Equal);
            prop_assert_eq!(order.compare(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn order_is_transitive(
            order in term_order(),
            a in small_mono(),
            b in small_mono(),
            c in small_mono(),
        ) {
            if order.compare(&a, &b) != Ordering::Less && order.compare(&b, &c) != Ordering::Less {
                prop_assert_ne!(order.compare(&a, &c), Ordering::Less);
            }
        }

        #[test]
        fn order_respects_multiplication(
            order in term_order(),
            a in small_mono(),
            b in small_mono(),
            c in small_mono(),
        ) {
            prop_assert_eq!(order.compare(&a.mul(&c), &b.mul(&c)), order.compare(&a, &b));
        }

        #[test]
        fn constant_is_minimum(order in term_order(), a in small_mono()) {
            if !a.is_constant() {
                prop_assert_eq!(order.compare(&Monomial::one(), &a), Ordering::Less);
            }
        }

        // Polynomial algebra

        #[test]
        fn simplify_is_idempotent(terms in raw_terms()) {
            let once = simplify(terms);
            let twice = simplify(once.terms().to_vec());
            prop_assert_eq!(once.terms(), twice.terms());
        }

        #[test]
        fn simplify_removes_duplicates(terms in raw_terms()) {
            let p = simplify(terms);
            for (i, m) in p.terms().iter().enumerate() {
                prop_assert!(!p.terms()[i + 1..].contains(m));
            }
        }

        #[test]
        fn poly_add_self_is_zero(a in small_poly()) {
            prop_assert!(a.add(&a).is_zero());
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_monomial_matches_mul(a in small_poly(), m in small_mono()) {
            prop_assert_eq!(a.mul_monomial(&m), a.mul(&Polynomial::from(m)));
        }

        // Evaluation is a ring homomorphism onto GF(2)

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in assignment()) {
            prop_assert_eq!(a.add(&b).evaluate(&x), a.evaluate(&x) ^ b.evaluate(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in assignment()) {
            prop_assert_eq!(a.mul(&b).evaluate(&x), a.evaluate(&x) & b.evaluate(&x));
        }

        // Reduction

        #[test]
        fn reduce_lowers_leading_monomial(
            order in term_order(),
            h in small_poly(),
            basis in proptest::collection::vec(small_poly(), 1..=3),
        ) {
            if let Some(next) = h.reduce(&basis, &order) {
                let before = h.leading_monomial(&order).cloned();
                let after = next.leading_monomial(&order).cloned();
                match (before, after) {
                    (Some(b), Some(a)) => prop_assert_eq!(order.compare(&a, &b), Ordering::Less),
                    (Some(_), None) => {}
                    (None, _) => prop_assert!(false, "zero polynomial reduced"),
                }
            }
        }

        #[test]
        fn reduce_fully_is_irreducible(
            order in term_order(),
            h in small_poly(),
            basis in proptest::collection::vec(small_poly(), 1..=3),
        ) {
            let r = h.reduce_fully(&basis, &order);
            prop_assert!(r.reduce(&basis, &order).is_none());
        }
    }
}
