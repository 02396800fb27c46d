/// Solution set of a reduced equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolutionSet {
    /// `0 = 0`.
    AllReals,
    /// `c = 0` with `c != 0`.
    NoSolution,
    /// Single real root (linear, or quadratic with zero discriminant).
    One(f64),
    /// Two distinct real roots, lower first.
    Two(f64, f64),
    /// Conjugate pair `real +/- i * imag`.
    TwoComplex { real: f64, imag: f64 },
    /// Degree 3 or higher.
    Unsupported,
}

impl SolutionSet {
    /// Real roots in reporting order (empty for non-discrete sets).
    pub fn real_roots(&self) -> Vec<f64> {
        match self {
            SolutionSet::One(x) => vec![*x],
            SolutionSet::Two(x1, x2) => vec![*x1, *x2],
            _ => Vec::new(),
        }
    }

    /// Short machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SolutionSet::AllReals => "all_reals",
            SolutionSet::NoSolution => "no_solution",
            SolutionSet::One(_) => "one",
            SolutionSet::Two(_, _) => "two",
            SolutionSet::TwoComplex { .. } => "two_complex",
            SolutionSet::Unsupported => "unsupported",
        }
    }
}
