use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Internal invariant violation
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Invariant guard for solver inputs.
/// In debug: trips `debug_assert!`.
/// In release: returns `Err(SolveError::InternalError)`.
#[macro_export]
macro_rules! ensure_solver_invariant {
    ($cond:expr, $msg:literal $(, $args:expr)* $(,)?) => {
        if cfg!(debug_assertions) {
            debug_assert!($cond, $msg $(, $args)*);
        }
        if !$cond {
            return Err($crate::error::SolveError::InternalError(format!($msg $(, $args)*)));
        }
    };
}
