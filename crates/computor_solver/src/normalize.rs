//! Sparse-to-dense canonicalization.

use computor_ast::{CanonicalPolynomial, Degree, Normalized, SparsePolynomial};
use tracing::debug;

/// Reduce a sparse polynomial to its canonical dense form and degree.
///
/// Total: every input yields exactly one result.
/// 1. fold the non-positive-power accumulator into `c0`
/// 2. lay out coefficients densely, index = exponent, gaps = 0
/// 3. strip trailing zeros
/// 4. classify the degree
pub fn normalize(sparse: SparsePolynomial) -> Normalized {
    let (mut terms, folded) = sparse.into_parts();
    if folded != 0.0 {
        *terms.entry(0).or_insert(0.0) += folded;
    }

    let len = terms.keys().next_back().map_or(0, |max| *max as usize + 1);
    let mut dense = vec![0.0; len];
    for (exponent, coefficient) in terms {
        dense[exponent as usize] = coefficient;
    }

    let polynomial = CanonicalPolynomial::trimmed(dense);
    let degree = Degree::classify(&polynomial);
    debug!(coefficients = ?polynomial.coefficients(), %degree, "normalized");

    Normalized { polynomial, degree }
}

#[cfg(test)]
mod tests {
    use super::*;
    use computor_ast::Monomial;

    fn sparse(monomials: &[Monomial]) -> SparsePolynomial {
        monomials.iter().copied().collect()
    }

    #[test]
    fn test_normalize_dense_quadratic() {
        let n = normalize(sparse(&[
            Monomial::power(2.0, 2),
            Monomial::constant(4.0),
            Monomial::power(3.0, 1),
        ]));
        assert_eq!(n.polynomial.coefficients(), &[4.0, 3.0, 2.0]);
        assert_eq!(n.degree, Degree::Exact(2));
    }

    #[test]
    fn test_normalize_fills_gaps() {
        let n = normalize(sparse(&[Monomial::power(1.0, 3), Monomial::constant(-1.0)]));
        assert_eq!(n.polynomial.coefficients(), &[-1.0, 0.0, 0.0, 1.0]);
        assert_eq!(n.degree, Degree::Exact(3));
    }

    #[test]
    fn test_normalize_folds_into_constant() {
        let n = normalize(sparse(&[
            Monomial::folded(2.0),
            Monomial::constant(1.0),
            Monomial::power(5.0, 1),
        ]));
        assert_eq!(n.polynomial.coefficients(), &[3.0, 5.0]);
    }

    #[test]
    fn test_normalize_folded_creates_constant_slot() {
        let n = normalize(sparse(&[Monomial::folded(-7.0)]));
        assert_eq!(n.polynomial.coefficients(), &[-7.0]);
        assert_eq!(n.degree, Degree::Contradiction);
    }

    #[test]
    fn test_normalize_cancelled_high_terms_are_trimmed() {
        let n = normalize(sparse(&[
            Monomial::power(2.0, 2),
            Monomial::power(-2.0, 2),
            Monomial::power(1.0, 1),
        ]));
        assert_eq!(n.polynomial.coefficients(), &[0.0, 1.0]);
        assert_eq!(n.degree, Degree::Exact(1));
    }

    #[test]
    fn test_normalize_everything_cancels() {
        let n = normalize(sparse(&[Monomial::power(4.0, 2), Monomial::power(-4.0, 2)]));
        assert_eq!(n.polynomial.coefficients(), &[0.0]);
        assert_eq!(n.degree, Degree::Identity);
    }

    #[test]
    fn test_normalize_empty() {
        let n = normalize(SparsePolynomial::new());
        assert!(n.polynomial.is_empty());
        assert_eq!(n.degree, Degree::Identity);
    }

    #[test]
    fn test_normalize_canonical_is_fixed_point() {
        let first = normalize(sparse(&[
            Monomial::power(1.0, 2),
            Monomial::folded(2.0),
            Monomial::power(-3.0, 1),
        ]));
        let second = normalize(first.polynomial.to_sparse());
        assert_eq!(first, second);
    }
}
