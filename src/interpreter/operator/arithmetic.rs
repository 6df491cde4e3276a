//! Arithmetic operators.
//!
//! All functions index `args` directly; the parser guarantees the operand
//! count matches the arity listed in the catalogue.

/// `(+ a b)`
#[must_use]
pub fn add(args: &[f64]) -> f64 {
    args[0] + args[1]
}

/// `(- a b)`
#[must_use]
pub fn subtract(args: &[f64]) -> f64 {
    args[0] - args[1]
}

/// `(* a b)`
#[must_use]
pub fn multiply(args: &[f64]) -> f64 {
    args[0] * args[1]
}

/// `(/ a b)`. Division by zero yields an infinity, or `NaN` for `0 / 0`.
#[must_use]
pub fn divide(args: &[f64]) -> f64 {
    args[0] / args[1]
}

/// `(** base exponent)`
#[must_use]
pub fn power(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}

/// `(% a b)`: floating remainder, carrying the sign of the dividend.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::arithmetic::modulo;
///
/// assert_eq!(modulo(&[7.5, 2.0]), 1.5);
/// assert_eq!(modulo(&[-7.0, 3.0]), -1.0);
/// assert!(modulo(&[1.0, 0.0]).is_nan());
/// ```
#[must_use]
pub fn modulo(args: &[f64]) -> f64 {
    args[0] % args[1]
}

/// `(- a)` and `(unaryMinus a)`
#[must_use]
pub fn negate(args: &[f64]) -> f64 {
    -args[0]
}

/// `(abs a)`
#[must_use]
pub fn abs(args: &[f64]) -> f64 {
    args[0].abs()
}

/// `(max a b)`. `NaN` in either operand gives `NaN`.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::arithmetic::max;
///
/// assert_eq!(max(&[2.5, 1.0]), 2.5);
/// assert!(max(&[f64::NAN, 1.0]).is_nan());
/// ```
#[must_use]
pub fn max(args: &[f64]) -> f64 {
    min_max(args, f64::max)
}

/// `(min a b)`. `NaN` in either operand gives `NaN`.
#[must_use]
pub fn min(args: &[f64]) -> f64 {
    min_max(args, f64::min)
}

/// `f64::min` and `f64::max` ignore a single `NaN`; these operators propagate
/// it instead.
fn min_max(args: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    let (left, right) = (args[0], args[1]);
    if left.is_nan() || right.is_nan() {
        return f64::NAN;
    }
    pick(left, right)
}
