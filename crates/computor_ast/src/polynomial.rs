//! Polynomial representations: sparse (as parsed) and canonical (dense).

use std::collections::BTreeMap;
use std::fmt;

/// Largest exponent accepted anywhere in an equation.
///
/// The canonical form is dense, so this bounds its length.
pub const MAX_EXPONENT: u32 = 4096;

/// Exponent of a parsed monomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exponent {
    /// Regular power of the variable (0 for a bare number).
    Power(u32),
    /// Parsed power was zero or negative; the term folds into the constant.
    Folded,
}

impl Exponent {
    /// Exponent of a product. `Folded` absorbs everything.
    ///
    /// Returns `None` when the sum exceeds [`MAX_EXPONENT`].
    pub fn checked_add(self, other: Exponent) -> Option<Exponent> {
        match (self, other) {
            (Exponent::Folded, _) | (_, Exponent::Folded) => Some(Exponent::Folded),
            (Exponent::Power(a), Exponent::Power(b)) => a
                .checked_add(b)
                .filter(|sum| *sum <= MAX_EXPONENT)
                .map(Exponent::Power),
        }
    }
}

/// One parsed factor or term: `coefficient * X^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monomial {
    pub coefficient: f64,
    pub exponent: Exponent,
}

impl Monomial {
    pub fn new(coefficient: f64, exponent: Exponent) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    pub fn constant(coefficient: f64) -> Self {
        Self::new(coefficient, Exponent::Power(0))
    }

    pub fn power(coefficient: f64, exponent: u32) -> Self {
        Self::new(coefficient, Exponent::Power(exponent))
    }

    pub fn folded(coefficient: f64) -> Self {
        Self::new(coefficient, Exponent::Folded)
    }

    /// Product of two monomials, `None` if the exponent overflows or the
    /// coefficient is no longer finite.
    pub fn checked_mul(self, other: Monomial) -> Option<Monomial> {
        let exponent = self.exponent.checked_add(other.exponent)?;
        let coefficient = self.coefficient * other.coefficient;
        coefficient
            .is_finite()
            .then(|| Monomial::new(coefficient, exponent))
    }

    pub fn negated(self) -> Monomial {
        Monomial::new(-self.coefficient, self.exponent)
    }
}

/// Exponent -> coefficient mapping built by the parser.
///
/// Terms whose power was zero or negative never enter `terms`; they are
/// summed into the separate `folded` accumulator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparsePolynomial {
    terms: BTreeMap<u32, f64>,
    folded: f64,
}

impl SparsePolynomial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a monomial, summing coefficients of equal exponents.
    pub fn add_monomial(&mut self, monomial: Monomial) {
        match monomial.exponent {
            Exponent::Power(p) => *self.terms.entry(p).or_insert(0.0) += monomial.coefficient,
            Exponent::Folded => self.folded += monomial.coefficient,
        }
    }

    /// `self - rhs`, entry by entry. Exponents only present in `rhs` appear
    /// negated.
    pub fn subtract(mut self, rhs: &SparsePolynomial) -> SparsePolynomial {
        for (&exponent, &coefficient) in &rhs.terms {
            *self.terms.entry(exponent).or_insert(0.0) -= coefficient;
        }
        self.folded -= rhs.folded;
        self
    }

    pub fn coefficient(&self, exponent: u32) -> Option<f64> {
        self.terms.get(&exponent).copied()
    }

    pub fn terms(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.terms.iter().map(|(e, c)| (*e, *c))
    }

    pub fn folded(&self) -> f64 {
        self.folded
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.folded == 0.0
    }

    /// Every coefficient is finite, including the constant that normalization
    /// will build from `terms[0] + folded`.
    pub fn is_finite(&self) -> bool {
        let constant = self.coefficient(0).unwrap_or(0.0) + self.folded;
        constant.is_finite() && self.terms.values().all(|c| c.is_finite())
    }

    /// Consume into the raw map and the folded accumulator.
    pub fn into_parts(self) -> (BTreeMap<u32, f64>, f64) {
        (self.terms, self.folded)
    }
}

impl FromIterator<Monomial> for SparsePolynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        let mut poly = SparsePolynomial::new();
        for monomial in iter {
            poly.add_monomial(monomial);
        }
        poly
    }
}

/// Dense coefficients `[c0, c1, ..., cn]`, index = exponent.
///
/// Invariant: `len > 1 => last != 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalPolynomial {
    coefficients: Vec<f64>,
}

impl CanonicalPolynomial {
    /// Strip trailing zero coefficients until the last one is non-zero or
    /// a single coefficient remains.
    pub fn trimmed(mut coefficients: Vec<f64>) -> Self {
        while coefficients.len() > 1 && coefficients.last() == Some(&0.0) {
            coefficients.pop();
        }
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient of `X^exponent`, zero past the end.
    pub fn coefficient(&self, exponent: usize) -> f64 {
        self.coefficients.get(exponent).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// True for `[]` and `[0]`.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.0)
    }

    /// Sparse view without zero entries, for re-normalization.
    pub fn to_sparse(&self) -> SparsePolynomial {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(i, c)| Monomial::power(*c, i as u32))
            .collect()
    }
}

/// Effective degree of a reduced equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    /// `c = 0` with `c != 0`: no solution (degree -1).
    Contradiction,
    /// `0 = 0`: every real is a solution (degree 0).
    Identity,
    /// Regular polynomial degree, always >= 1.
    Exact(usize),
}

impl Degree {
    pub fn classify(polynomial: &CanonicalPolynomial) -> Degree {
        match polynomial.coefficients() {
            [] => Degree::Identity,
            [c] if *c == 0.0 => Degree::Identity,
            [_] => Degree::Contradiction,
            coefficients => Degree::Exact(coefficients.len() - 1),
        }
    }

    /// Numeric convention: -1, 0, or the polynomial degree.
    pub fn value(&self) -> i64 {
        match self {
            Degree::Contradiction => -1,
            Degree::Identity => 0,
            Degree::Exact(n) => *n as i64,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Canonical polynomial together with its classified degree.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub polynomial: CanonicalPolynomial,
    pub degree: Degree,
}
