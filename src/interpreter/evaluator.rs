use crate::ast::Expr;

impl Expr {
    /// Evaluates the tree with the current variable values.
    ///
    /// Operands are evaluated left to right before their operator is applied,
    /// and every operand is always evaluated: `&&`, `||` and `if` do not
    /// short-circuit. Nothing is cached, so each call reflects the values held
    /// by the registry at that moment.
    ///
    /// Numeric domain problems are not errors. Division by zero, the logarithm
    /// of a non-positive number and similar cases produce infinities or `NaN`.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use scorexpr::{interpreter::registry::Registry, parse};
    ///
    /// let registry = Registry::new();
    /// let expr = parse("(sigmoid (+ (* a x) b))", &registry).unwrap().unwrap();
    ///
    /// registry.set("a", 2.0);
    /// registry.set("x", 1.0);
    /// registry.set("b", 3.0);
    /// assert_eq!(expr.evaluate(), 1.0 / (1.0 + (-5.0f64).exp()));
    ///
    /// registry.set("x", 4.0);
    /// assert_eq!(expr.evaluate(), 1.0 / (1.0 + (-11.0f64).exp()));
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Variable(variable) => variable.value(),
            Self::Expression { operator, operands } => match operands.as_slice() {
                [] => operator.apply(&[]),
                [a] => operator.apply(&[a.evaluate()]),
                [a, b] => operator.apply(&[a.evaluate(), b.evaluate()]),
                [a, b, c] => operator.apply(&[a.evaluate(), b.evaluate(), c.evaluate()]),
                _ => {
                    let values = operands.iter().map(Self::evaluate).collect::<Vec<_>>();
                    operator.apply(&values)
                },
            },
        }
    }
}
