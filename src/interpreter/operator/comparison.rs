use crate::interpreter::operator::logic::truth;

/// Generates a binary comparison returning `1.0` when it holds and `0.0`
/// otherwise. Comparisons involving `NaN` never hold, except `!=`.
macro_rules! comparison {
    ($fname:ident, $op:tt, $symbol:literal) => {
        #[doc = concat!("`(", $symbol, " a b)`")]
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            truth(args[0] $op args[1])
        }
    };
}

comparison!(eq, ==, "==");
comparison!(ne, !=, "!=");
comparison!(gt, >, ">");
comparison!(ge, >=, ">=");
comparison!(lt, <, "<");
comparison!(le, <=, "<=");

/// `(in x low high)`: tests whether `x` lies in the half-open interval
/// `[low, high)`.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::comparison::in_range;
///
/// assert_eq!(in_range(&[4.0, 4.0, 5.0]), 1.0);
/// assert_eq!(in_range(&[5.0, 4.0, 5.0]), 0.0);
/// assert_eq!(in_range(&[3.0, 4.0, 5.0]), 0.0);
/// ```
#[must_use]
pub fn in_range(args: &[f64]) -> f64 {
    let value = args[0];
    truth(value >= args[1] && value < args[2])
}
