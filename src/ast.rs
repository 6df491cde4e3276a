use std::{collections::BTreeSet, sync::Arc};

use crate::{
    error::{ParseError, ParseResult},
    interpreter::{operator::Operator, registry::Variable},
};

/// A node of a parsed expression tree.
///
/// Trees are built bottom-up by the parser and never change afterwards, except
/// for the values reachable through [`Expr::Variable`] handles. Those handles
/// point into the [`Registry`] the tree was parsed against, so setting a
/// variable there changes the result of the next [`Expr::evaluate`] call
/// without re-parsing.
///
/// [`Registry`]: crate::interpreter::registry::Registry
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric literal such as `0.5` or `1000`.
    Constant(f64),
    /// A reference to a registry-owned variable.
    Variable(Arc<Variable>),
    /// An operator applied to its operands.
    ///
    /// Build it with [`Expr::apply`], which checks the operand count.
    /// Operator functions index their operands directly, so a node built by
    /// hand with the wrong number of operands panics when evaluated.
    Expression {
        /// The operator, taken from the catalogue.
        operator: &'static Operator,
        /// Operand subtrees in source order; exactly `operator.arity()` of
        /// them.
        operands: Vec<Self>,
    },
}

impl Expr {
    /// Builds an operator node, checking the operand count.
    ///
    /// # Errors
    /// Returns `ParseError::ArityMismatch` if `operands` does not hold exactly
    /// `operator.arity()` subtrees.
    ///
    /// # Example
    /// ```
    /// use scorexpr::{ast::Expr, interpreter::operator::catalogue};
    ///
    /// let add = catalogue().lookup("+").unwrap();
    /// let expr = Expr::apply(add, vec![Expr::Constant(1.0), Expr::Constant(2.0)]).unwrap();
    /// assert_eq!(expr.evaluate(), 3.0);
    ///
    /// assert!(Expr::apply(add, vec![Expr::Constant(1.0)]).is_err());
    /// ```
    pub fn apply(operator: &'static Operator, operands: Vec<Self>) -> ParseResult<Self> {
        if operands.len() != operator.arity() {
            return Err(ParseError::ArityMismatch { operator: operator.symbol().to_string(),
                                                   expected: operator.arity(),
                                                   found:    operands.len(), });
        }
        Ok(Self::Expression { operator,
                              operands })
    }

    /// Returns `true` for constants and variables.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    /// Names of the distinct variables referenced anywhere in the tree, sorted.
    ///
    /// # Example
    /// ```
    /// use scorexpr::{interpreter::registry::Registry, parse};
    ///
    /// let registry = Registry::new();
    /// let expr = parse("(+ (* a x) (* b x))", &registry).unwrap().unwrap();
    /// assert_eq!(expr.variables(), vec!["a", "b", "x"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().map(str::to_string).collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Constant(_) => {},
            Self::Variable(variable) => {
                names.insert(variable.name());
            },
            Self::Expression { operands, .. } => {
                for operand in operands {
                    operand.collect_variables(names);
                }
            },
        }
    }
}
