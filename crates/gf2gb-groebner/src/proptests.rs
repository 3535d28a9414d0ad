//! Property-based tests for basis construction and normalization.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use gf2gb_poly::{simplify, Monomial, MonomialOrder, Polynomial, TermOrder, Var};

    use crate::basis::GroebnerBasis;
    use crate::buchberger::{compute_groebner_basis, s_polynomial, Buchberger, BuchbergerConfig};

    const N: usize = 3;

    fn small_mono() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec((1..=N as Var, 1u32..=2), 0..=2).prop_map(Monomial::from_factors)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_mono(), 1..=3).prop_map(simplify)
    }

    fn generators() -> impl Strategy<Value = Vec<Polynomial>> {
        proptest::collection::vec(small_poly(), 1..=3)
    }

    fn term_order() -> impl Strategy<Value = TermOrder> {
        let kind = prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::DegLex),
            Just(MonomialOrder::DegRevLex),
        ];
        (Just((1..=N as Var).collect::<Vec<_>>()).prop_shuffle(), kind)
            .prop_map(|(perm, kind)| TermOrder::new(&perm, N).unwrap().with_kind(kind))
    }

    /// Common zeros in GF(2)^N, by enumeration.
    fn zeros(polys: &[Polynomial]) -> Vec<u32> {
        (0..1u32 << N)
            .filter(|&bits| {
                let point: Vec<bool> = (0..N).map(|i| (bits >> i) & 1 == 1).collect();
                polys.iter().all(|p| !p.evaluate(&point))
            })
            .collect()
    }

    fn as_set(basis: &GroebnerBasis) -> HashSet<Polynomial> {
        basis.polynomials().iter().cloned().collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn generators_lie_in_ideal(order in term_order(), gens in generators()) {
            let basis = compute_groebner_basis(&gens, &order);
            for g in &gens {
                prop_assert!(basis.contains(g), "{} not reduced to zero by {}", g, basis);
            }
        }

        #[test]
        fn reduced_basis_is_closed_under_s_polynomials(order in term_order(), gens in generators()) {
            let reduced = compute_groebner_basis(&gens, &order).minimize_and_reduce();
            let polys = reduced.polynomials();
            for i in 0..polys.len() {
                for j in 0..i {
                    let lm_i = polys[i].leading_monomial(&order).unwrap();
                    let lm_j = polys[j].leading_monomial(&order).unwrap();
                    let s = s_polynomial(&polys[i], lm_i, &polys[j], lm_j);
                    prop_assert!(reduced.normal_form(&s).is_zero());
                }
            }
        }

        #[test]
        fn reduced_basis_is_minimal_and_reduced(order in term_order(), gens in generators()) {
            let reduced = compute_groebner_basis(&gens, &order).minimize_and_reduce();
            prop_assert!(reduced.is_minimal());
            prop_assert!(reduced.is_reduced());
        }

        #[test]
        fn reduced_basis_keeps_common_zeros(order in term_order(), gens in generators()) {
            let reduced = compute_groebner_basis(&gens, &order).minimize_and_reduce();
            prop_assert_eq!(zeros(&gens), zeros(reduced.polynomials()));
        }

        #[test]
        fn reduced_basis_is_unique(order in term_order(), gens in generators()) {
            let plain = compute_groebner_basis(&gens, &order).minimize_and_reduce();

            let config = BuchbergerConfig { use_chain_criterion: true, ..BuchbergerConfig::default() };
            let chained = Buchberger::new(&order, config).compute(&gens).minimize_and_reduce();
            prop_assert_eq!(as_set(&plain), as_set(&chained));

            let reversed: Vec<Polynomial> = gens.iter().rev().cloned().collect();
            let flipped = compute_groebner_basis(&reversed, &order).minimize_and_reduce();
            prop_assert_eq!(as_set(&plain), as_set(&flipped));
        }
    }
}
