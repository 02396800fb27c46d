use computor_ast::{Degree, Monomial, SolutionSet, SparsePolynomial};
use computor_solver::{normalize, solve};
use proptest::prelude::*;

fn arb_monomial() -> impl Strategy<Value = Monomial> {
    let coefficient = (-50i32..=50).prop_map(f64::from);
    prop_oneof![
        4 => (coefficient.clone(), 0u32..6).prop_map(|(c, e)| Monomial::power(c, e)),
        1 => coefficient.prop_map(Monomial::folded),
    ]
}

fn arb_sparse() -> impl Strategy<Value = SparsePolynomial> {
    prop::collection::vec(arb_monomial(), 0..12)
        .prop_map(|monomials| monomials.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn canonical_has_no_trailing_zero(sparse in arb_sparse()) {
        let n = normalize(sparse);
        let coefficients = n.polynomial.coefficients();
        if coefficients.len() > 1 {
            prop_assert_ne!(coefficients[coefficients.len() - 1], 0.0);
        }
    }

    #[test]
    fn renormalizing_is_a_fixed_point(sparse in arb_sparse()) {
        let first = normalize(sparse);
        let second = normalize(first.polynomial.to_sparse());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn folded_terms_only_touch_the_constant(
        sparse in arb_sparse(),
        extra in -50i32..=50,
    ) {
        let extra = f64::from(extra);
        let base = normalize(sparse.clone());

        let mut with_folded = sparse;
        with_folded.add_monomial(Monomial::folded(extra));
        let folded = normalize(with_folded);

        let len = base.polynomial.len().max(folded.polynomial.len());
        for i in 1..len {
            prop_assert_eq!(base.polynomial.coefficient(i), folded.polynomial.coefficient(i));
        }
        prop_assert_eq!(base.polynomial.coefficient(0) + extra, folded.polynomial.coefficient(0));
    }

    #[test]
    fn degree_matches_length(sparse in arb_sparse()) {
        let n = normalize(sparse);
        match n.degree {
            Degree::Identity => prop_assert!(n.polynomial.is_zero()),
            Degree::Contradiction => prop_assert_eq!(n.polynomial.len(), 1),
            Degree::Exact(d) => prop_assert_eq!(n.polynomial.len(), d + 1),
        }
    }

    #[test]
    fn real_roots_satisfy_the_equation(
        a in (1i32..=20).prop_flat_map(|m| prop_oneof![Just(m), Just(-m)]),
        b in -50i32..=50,
        c in -50i32..=50,
    ) {
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        let sparse: SparsePolynomial = [
            Monomial::power(a, 2),
            Monomial::power(b, 1),
            Monomial::constant(c),
        ]
        .into_iter()
        .collect();
        let n = normalize(sparse);
        let solution = solve(&n).unwrap();

        for x in solution.real_roots() {
            let residual = a * x * x + b * x + c;
            let scale = a.abs() * x * x + b.abs() * x.abs() + c.abs() + 1.0;
            prop_assert!(residual.abs() <= 1e-9 * scale, "x = {x}, residual = {residual}");
        }
        if let SolutionSet::Two(x1, x2) = solution {
            prop_assert!(x1 < x2);
        }
    }
}
