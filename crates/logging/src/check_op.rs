//! crates/logging/src/check_op.rs
//! Comparison evaluation behind the `check_*!` macros.
//!
//! Each helper returns `None` when the comparison holds, without allocating.
//! On failure it returns `"<names> (<lhs> vs. <rhs>)"`, which the caller moves
//! into a fatal [`LogRecord`](crate::LogRecord).

use std::fmt::{self, Display, Write as _};

/// Relational operator checked by a comparison assertion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CheckOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<=`
    Le,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `>`
    Gt,
}

impl CheckOp {
    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Le => "<=",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Gt => ">",
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    pub fn holds<T, U>(self, lhs: &T, rhs: &U) -> bool
    where
        T: PartialOrd<U> + ?Sized,
        U: ?Sized,
    {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Le => lhs <= rhs,
            Self::Lt => lhs < rhs,
            Self::Ge => lhs >= rhs,
            Self::Gt => lhs > rhs,
        }
    }
}

impl fmt::Display for CheckOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `lhs op rhs`, returning a diagnostic only when it fails.
///
/// # Examples
///
/// ```
/// use logging::check_op::{CheckOp, evaluate};
///
/// assert_eq!(evaluate(CheckOp::Eq, &3, &3, "a == b"), None);
/// assert_eq!(
///     evaluate(CheckOp::Eq, &3, &4, "a == b").as_deref(),
///     Some("a == b (3 vs. 4)")
/// );
/// ```
pub fn evaluate<T, U>(op: CheckOp, lhs: &T, rhs: &U, names: &str) -> Option<String>
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    if op.holds(lhs, rhs) {
        None
    } else {
        Some(make_check_op_string(lhs, rhs, names))
    }
}

/// Renders `"<names> (<lhs> vs. <rhs>)"`.
pub fn make_check_op_string<T, U>(lhs: &T, rhs: &U, names: &str) -> String
where
    T: Display + ?Sized,
    U: Display + ?Sized,
{
    let mut message = String::with_capacity(names.len() + 16);
    let _ = write!(message, "{names} ({lhs} vs. {rhs})");
    message
}

/// `lhs == rhs`; only needs [`PartialEq`].
pub fn check_eq<T, U>(lhs: &T, rhs: &U, names: &str) -> Option<String>
where
    T: PartialEq<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    if lhs == rhs {
        None
    } else {
        Some(make_check_op_string(lhs, rhs, names))
    }
}

/// `lhs != rhs`; only needs [`PartialEq`].
pub fn check_ne<T, U>(lhs: &T, rhs: &U, names: &str) -> Option<String>
where
    T: PartialEq<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    if lhs == rhs {
        Some(make_check_op_string(lhs, rhs, names))
    } else {
        None
    }
}

/// `lhs <= rhs`.
pub fn check_le<T, U>(lhs: &T, rhs: &U, names: &str) -> Option<String>
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    evaluate(CheckOp::Le, lhs, rhs, names)
}

/// `lhs < rhs`.
pub fn check_lt<T, U>(lhs: &T, rhs: &U, names: &str) -> Option<String>
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    evaluate(CheckOp::Lt, lhs, rhs, names)
}

/// `lhs >= rhs`.
pub fn check_ge<T, U>(lhs: &T, rhs: &U, names: &str) -> Option<String>
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    evaluate(CheckOp::Ge, lhs, rhs, names)
}

/// `lhs > rhs`.
pub fn check_gt<T, U>(lhs: &T, rhs: &U, names: &str) -> Option<String>
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    evaluate(CheckOp::Gt, lhs, rhs, names)
}
