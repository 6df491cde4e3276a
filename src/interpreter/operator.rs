/// Operator descriptors and the catalogue.
///
/// Declares the `Operator` type, the literal table every operator is listed
/// in, and the process-wide lookup structure built from it.
pub mod core;

/// `+ - * / ** %`, negation, `abs`, `min` and `max`.
pub mod arithmetic;
/// `== != > >= < <=` and the half-open interval test `in`.
pub mod comparison;
/// `&& || !` and the ternary `if`.
///
/// Doubles double as booleans: `0.0` is false and every other value,
/// `NaN` included, is true. Results are `1.0` or `0.0`.
pub mod logic;
/// Logarithms, exponentials, rounding, roots and trigonometry.
pub mod math;
/// `rand` and `rand-in`, each drawing from its own seeded generator.
pub mod random;

pub use self::core::{Catalogue, Operator, OperatorFn, catalogue};
