/// Converts a boolean into the language's numeric truth values.
#[must_use]
pub const fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Reads a double as a boolean: anything but `0.0` (or `-0.0`) is true.
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

/// `(&& a b)`
///
/// Both operands have already been evaluated by the time this runs; the
/// language does not short-circuit.
#[must_use]
pub fn and(args: &[f64]) -> f64 {
    truth(is_truthy(args[0]) && is_truthy(args[1]))
}

/// `(|| a b)`, evaluated like [`and`].
#[must_use]
pub fn or(args: &[f64]) -> f64 {
    truth(is_truthy(args[0]) || is_truthy(args[1]))
}

/// `(! a)`
#[must_use]
pub fn not(args: &[f64]) -> f64 {
    truth(!is_truthy(args[0]))
}

/// `(if condition then otherwise)`: picks `then` when the condition is
/// truthy. All three operands are evaluated.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::logic::if_else;
///
/// assert_eq!(if_else(&[0.0, 1.0, 2.0]), 2.0);
/// assert_eq!(if_else(&[-3.0, 1.0, 2.0]), 1.0);
/// ```
#[must_use]
pub fn if_else(args: &[f64]) -> f64 {
    if is_truthy(args[0]) { args[1] } else { args[2] }
}
