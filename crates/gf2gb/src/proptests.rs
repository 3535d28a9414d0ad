//! Property-based tests for the certification pipeline.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use gf2gb_poly::{simplify, Monomial, MonomialOrder, Polynomial, TermOrder, Var};
    use gf2gb_solve::System;

    use crate::certify::{certify, CertifyConfig};

    const N: usize = 4;

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        let mono = proptest::collection::vec((1..=N as Var, 1u32..=2), 0..=2)
            .prop_map(Monomial::from_factors);
        proptest::collection::vec(mono, 1..=3).prop_map(simplify)
    }

    fn system() -> impl Strategy<Value = System> {
        proptest::collection::vec(small_poly(), 1..=3)
            .prop_map(|polys| System::new(N, polys).unwrap())
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

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn certificate_always_holds(system in system(), order in term_order()) {
            let cert = certify(&system, &order, &CertifyConfig::default()).unwrap();
            prop_assert!(cert.complete);
            prop_assert!(cert.solutions_agree);
            prop_assert!(cert.is_minimal);
            prop_assert!(cert.is_reduced);
            for a in &cert.original_solutions {
                prop_assert!(system.is_satisfied_by(a));
            }
        }

        #[test]
        fn solutions_do_not_depend_on_order(system in system(), a in term_order(), b in term_order()) {
            let config = CertifyConfig::default();
            let first = certify(&system, &a, &config).unwrap();
            let second = certify(&system, &b, &config).unwrap();
            prop_assert_eq!(first.basis_solutions, second.basis_solutions);
        }
    }
}
