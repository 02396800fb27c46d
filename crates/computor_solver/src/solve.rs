//! Closed-form solutions for degrees -1, 0, 1 and 2.

use computor_ast::{Degree, Normalized, SolutionSet};
use tracing::debug;

use crate::ensure_solver_invariant;
use crate::error::SolveError;

/// Quadratic discriminant `b^2 - 4ac` of `a*X^2 + b*X + c`.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve a normalized equation. Degree 3 and above is `Unsupported`.
pub fn solve(normalized: &Normalized) -> Result<SolutionSet, SolveError> {
    let poly = &normalized.polynomial;
    let solution = match normalized.degree {
        Degree::Identity => SolutionSet::AllReals,
        Degree::Contradiction => SolutionSet::NoSolution,
        Degree::Exact(1) => {
            ensure_solver_invariant!(poly.len() == 2, "degree 1 with {} coefficients", poly.len());
            linear(poly.coefficient(0), poly.coefficient(1))?
        }
        Degree::Exact(2) => {
            ensure_solver_invariant!(poly.len() == 3, "degree 2 with {} coefficients", poly.len());
            quadratic(poly.coefficient(2), poly.coefficient(1), poly.coefficient(0))?
        }
        Degree::Exact(_) => SolutionSet::Unsupported,
    };

    debug!(degree = %normalized.degree, ?solution, "solved");
    Ok(solution)
}

fn linear(c0: f64, c1: f64) -> Result<SolutionSet, SolveError> {
    ensure_solver_invariant!(c1 != 0.0, "linear coefficient is zero");
    Ok(SolutionSet::One(unsigned_zero(-c0 / c1)))
}

fn quadratic(a: f64, b: f64, c: f64) -> Result<SolutionSet, SolveError> {
    ensure_solver_invariant!(a != 0.0, "quadratic coefficient is zero");

    let delta = discriminant(a, b, c);
    let two_a = 2.0 * a;
    debug!(delta, "quadratic discriminant");

    let solution = if delta > 0.0 {
        let sqrt_delta = delta.sqrt();
        let x1 = unsigned_zero((-b - sqrt_delta) / two_a);
        let x2 = unsigned_zero((-b + sqrt_delta) / two_a);
        SolutionSet::Two(x1.min(x2), x1.max(x2))
    } else if delta == 0.0 {
        SolutionSet::One(unsigned_zero(-b / two_a))
    } else {
        SolutionSet::TwoComplex {
            real: unsigned_zero(-b / two_a),
            imag: (-delta).sqrt() / two_a,
        }
    };
    Ok(solution)
}

// -0.0 -> 0.0
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use computor_ast::CanonicalPolynomial;

    fn solve_coeffs(coefficients: &[f64]) -> SolutionSet {
        let polynomial = CanonicalPolynomial::trimmed(coefficients.to_vec());
        let degree = Degree::classify(&polynomial);
        solve(&Normalized { polynomial, degree }).unwrap()
    }

    #[test]
    fn test_solve_identity_and_contradiction() {
        assert_eq!(solve_coeffs(&[]), SolutionSet::AllReals);
        assert_eq!(solve_coeffs(&[0.0]), SolutionSet::AllReals);
        assert_eq!(solve_coeffs(&[-1.0]), SolutionSet::NoSolution);
    }

    #[test]
    fn test_solve_linear() {
        assert_eq!(solve_coeffs(&[3.0, 4.0]), SolutionSet::One(-0.75));
    }

    #[test]
    fn test_solve_linear_zero_root_is_unsigned() {
        match solve_coeffs(&[0.0, 5.0]) {
            SolutionSet::One(x) => assert!(x == 0.0 && x.is_sign_positive()),
            other => panic!("expected One, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_quadratic_two_roots_lower_first() {
        assert_eq!(solve_coeffs(&[-4.0, 0.0, 1.0]), SolutionSet::Two(-2.0, 2.0));
        // negative leading coefficient flips the formula order
        assert_eq!(solve_coeffs(&[4.0, 0.0, -1.0]), SolutionSet::Two(-2.0, 2.0));
    }

    #[test]
    fn test_solve_quadratic_double_root() {
        assert_eq!(solve_coeffs(&[1.0, -2.0, 1.0]), SolutionSet::One(1.0));
    }

    #[test]
    fn test_solve_quadratic_complex() {
        match solve_coeffs(&[1.0, 1.0, 1.0]) {
            SolutionSet::TwoComplex { real, imag } => {
                assert_eq!(real, -0.5);
                assert!((imag - 0.866025).abs() < 1e-6);
            }
            other => panic!("expected TwoComplex, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_higher_degree_unsupported() {
        assert_eq!(solve_coeffs(&[1.0, 0.0, 0.0, 2.0]), SolutionSet::Unsupported);
    }

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(1.0, 3.0, 2.0), 1.0);
        assert_eq!(discriminant(2.0, 3.0, 4.0), -23.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "degree 1 with 1 coefficients")]
    fn test_solve_rejects_inconsistent_degree() {
        let polynomial = CanonicalPolynomial::trimmed(vec![3.0]);
        let _ = solve(&Normalized {
            polynomial,
            degree: Degree::Exact(1),
        });
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_solve_rejects_inconsistent_degree() {
        let polynomial = CanonicalPolynomial::trimmed(vec![3.0]);
        let result = solve(&Normalized {
            polynomial,
            degree: Degree::Exact(1),
        });
        assert!(matches!(result, Err(SolveError::InternalError(_))));
    }
}
