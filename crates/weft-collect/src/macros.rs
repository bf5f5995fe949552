//! Repetition helpers for the per-arity family macros.

/// Substitutes any captured fragment with `usize`; used to spell the
/// homogeneous coordinate tuple type for an arity.
macro_rules! one_usize {
    ($_x:tt) => {
        usize
    };
}

/// Substitutes a captured fragment with an expression; used to repeat
/// one expression once per dimension.
macro_rules! same_expr {
    ($_x:tt, $e:expr) => {
        $e
    };
}

pub(crate) use one_usize;
pub(crate) use same_expr;
