/// Applies an `f64` method to the single operand.
///
/// The generated functions accept exactly one argument and never fail: out of
/// domain inputs follow IEEE-754 (`ln(0)` is `-inf`, `sqrt(-1)` is `NaN`).
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::math::{ln, sqrt};
///
/// assert_eq!(ln(&[1.0]), 0.0);
/// assert_eq!(ln(&[0.0]), f64::NEG_INFINITY);
/// assert!(sqrt(&[-1.0]).is_nan());
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`(", stringify!($fname), " x)`")]
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            args[0].$real_fn()
        }
    };
}

unary_builtin!(ln, ln);
unary_builtin!(log2, log2);
unary_builtin!(exp, exp);
unary_builtin!(sqrt, sqrt);
unary_builtin!(floor, floor);
unary_builtin!(ceil, ceil);
unary_builtin!(cos, cos);
unary_builtin!(sin, sin);
unary_builtin!(tan, tan);
unary_builtin!(tanh, tanh);

/// `(ln1plus x)`: natural logarithm of `1 + x`.
#[must_use]
pub fn ln1plus(args: &[f64]) -> f64 {
    (1.0 + args[0]).ln()
}

/// `(sigmoid x)`: the logistic function `1 / (1 + e^-x)`.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::math::sigmoid;
///
/// assert_eq!(sigmoid(&[0.0]), 0.5);
/// assert_eq!(sigmoid(&[5.0]), 1.0 / (1.0 + (-5.0f64).exp()));
/// ```
#[must_use]
pub fn sigmoid(args: &[f64]) -> f64 {
    1.0 / (1.0 + (-args[0]).exp())
}

/// `(sign x)`: `-1.0`, `1.0`, or `x` itself when it is zero or `NaN`.
///
/// Unlike [`f64::signum`], zero maps to zero.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::math::sign;
///
/// assert_eq!(sign(&[-42.0]), -1.0);
/// assert_eq!(sign(&[0.0]), 0.0);
/// assert_eq!(sign(&[11.0]), 1.0);
/// ```
#[must_use]
pub fn sign(args: &[f64]) -> f64 {
    let x = args[0];
    if x == 0.0 || x.is_nan() { x } else { x.signum() }
}

/// `(round x)`: rounds to the nearest integer, ties towards positive infinity.
///
/// The result is a 64-bit integer value: `NaN` rounds to `0` and anything
/// outside the `i64` range saturates at its bounds.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::math::round;
///
/// assert_eq!(round(&[2.5]), 3.0);
/// assert_eq!(round(&[-2.5]), -2.0);
/// assert_eq!(round(&[3.7]), 4.0);
/// assert_eq!(round(&[0.49999999999999994]), 0.0);
/// assert_eq!(round(&[f64::NAN]), 0.0);
/// assert_eq!(round(&[f64::INFINITY]), 9.223372036854776e18);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn round(args: &[f64]) -> f64 {
    let x = args[0];
    if x.is_nan() {
        return 0.0;
    }
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded.clamp(i64::MIN as f64, i64::MAX as f64)
}
