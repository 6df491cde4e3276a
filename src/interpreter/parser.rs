use tracing::trace;

use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        operator::catalogue,
        registry::Registry,
        tokenizer::{is_group, strip_group, tokenize},
    },
};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for the parser.
///
/// # Example
/// ```
/// use scorexpr::{
///     error::ParseError,
///     interpreter::{parser::{ParseOptions, parse_with_options}, registry::Registry},
/// };
///
/// let options = ParseOptions { max_depth: 2 };
/// let registry = Registry::new();
///
/// assert!(parse_with_options("(+ 1 (* 2 3))", &registry, &options).is_ok());
/// assert_eq!(parse_with_options("(+ 1 (* 2 (- 3)))", &registry, &options).unwrap_err(),
///            ParseError::TooDeep { limit: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested parenthesized groups.
    ///
    /// Parsing, evaluation and printing all recurse once per level, so this
    /// also bounds their stack usage.
    ///
    /// Default: 512
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Parses an s-expression with the default [`ParseOptions`].
///
/// Variables are resolved through `registry`: every occurrence of a name,
/// here or in any other expression parsed against the same registry, refers to
/// the same cell.
///
/// # Parameters
/// - `input`: The expression text, e.g. `(+ 0.5 (* a x))`.
/// - `registry`: Registry that owns the expression's variables.
///
/// # Returns
/// `Some(Expr)` for the parsed tree, or `None` when `input` contains nothing to
/// parse (it is empty, blank, or just `()`).
///
/// # Errors
/// - `ParseError::Syntax` for unbalanced parentheses.
/// - `ParseError::UnsupportedOperator` for an unknown operator symbol.
/// - `ParseError::ArityMismatch` when an operator gets the wrong number of
///   operands.
/// - `ParseError::EmptyOperand` when an operand is an empty group.
/// - `ParseError::TooDeep` when nesting exceeds the default depth limit.
///
/// Variables registered before the error was found stay registered.
///
/// # Example
/// ```
/// use scorexpr::{interpreter::registry::Registry, parse};
///
/// let registry = Registry::new();
/// let expr = parse("(* 2 x)", &registry).unwrap().unwrap();
///
/// registry.set("x", 21.0);
/// assert_eq!(expr.evaluate(), 42.0);
///
/// assert!(parse("   ", &registry).unwrap().is_none());
/// ```
pub fn parse(input: &str, registry: &Registry) -> ParseResult<Option<Expr>> {
    parse_with_options(input, registry, &ParseOptions::default())
}

/// Parses an s-expression with explicit options. See [`parse`].
///
/// # Errors
/// Same as [`parse`], with the depth limit taken from `options`.
pub fn parse_with_options(input: &str,
                          registry: &Registry,
                          options: &ParseOptions)
                          -> ParseResult<Option<Expr>> {
    Parser { registry,
             max_depth: options.max_depth }.parse_expr(input, 0)
}

/// Recursive-descent parser over top-level tokens.
///
/// Each call tokenizes one nesting level; parenthesized groups are re-parsed
/// with their outer parentheses removed. The registry is threaded through
/// every call so repeated names resolve to one cell.
struct Parser<'r> {
    registry:  &'r Registry,
    max_depth: usize,
}

impl Parser<'_> {
    /// Parses one expression.
    ///
    /// Grammar:
    /// ```text
    ///     expr      := <nothing> | group | atom | operation
    ///     group     := "(" expr ")"
    ///     operation := symbol operand+
    ///     operand   := group | atom
    /// ```
    fn parse_expr(&self, input: &str, depth: usize) -> ParseResult<Option<Expr>> {
        let tokens = tokenize(input)?;

        match tokens.as_slice() {
            [] => Ok(None),
            [group] if is_group(group) => self.parse_group(group, depth),
            [atom] => Ok(Some(self.parse_atom(atom))),
            [symbol, operands @ ..] => self.parse_operation(symbol, operands, depth).map(Some),
        }
    }

    /// Parses the contents of a parenthesized group.
    ///
    /// A group whose only content is the symbol of a zero-operand operator,
    /// such as `(rand)`, is that operator. Anything else is parsed as an
    /// expression one level deeper.
    fn parse_group(&self, group: &str, depth: usize) -> ParseResult<Option<Expr>> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(ParseError::TooDeep { limit: self.max_depth });
        }

        let inner = strip_group(group);
        if let Some(operator) = catalogue().lookup(inner.trim())
                                           .filter(|operator| operator.arity() == 0)
        {
            trace!(operator = operator.symbol(), depth, "nullary operator");
            return Expr::apply(operator, Vec::new()).map(Some);
        }

        self.parse_expr(inner, depth)
    }

    /// Parses a bare token as a constant, or failing that as a variable name.
    fn parse_atom(&self, atom: &str) -> Expr {
        if let Some(value) = parse_number(atom) {
            return Expr::Constant(value);
        }
        Expr::Variable(self.registry.lookup_or_create(atom))
    }

    /// Parses `symbol operand+`.
    ///
    /// `-` with a single operand is negation; every other symbol is looked up
    /// in the catalogue. The operand count must match the operator's arity
    /// before any operand is parsed. Operands are parsed left to right.
    fn parse_operation(&self, symbol: &str, operands: &[&str], depth: usize) -> ParseResult<Expr> {
        let operator = if symbol == "-" && operands.len() == 1 {
            catalogue().unary_minus()
        } else {
            catalogue().lookup(symbol)
                       .ok_or_else(|| ParseError::UnsupportedOperator { symbol:    symbol.to_string(),
                                                                        supported: catalogue().supported_symbols(), })?
        };

        if operands.len() != operator.arity() {
            return Err(ParseError::ArityMismatch { operator: operator.symbol().to_string(),
                                                   expected: operator.arity(),
                                                   found:    operands.len(), });
        }

        trace!(operator = operator.symbol(), depth, "parsing operands");

        let mut parsed = Vec::with_capacity(operands.len());
        for (index, operand) in operands.iter().enumerate() {
            let expr =
                self.parse_expr(operand, depth)?
                    .ok_or_else(|| ParseError::EmptyOperand { operator: operator.symbol().to_string(),
                                                              index })?;
            parsed.push(expr);
        }

        Expr::apply(operator, parsed)
    }
}

/// Reads a numeric literal.
///
/// Decimal and exponent forms are accepted as `f64` parses them. Of the
/// spelled-out special values only `Infinity` and `NaN`, optionally signed,
/// are numbers; `inf`, `nan`, `infinity` and other spellings are variable
/// names.
fn parse_number(atom: &str) -> Option<f64> {
    let unsigned = atom.strip_prefix(['+', '-']).unwrap_or(atom);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic())
       && !matches!(unsigned, "Infinity" | "NaN")
    {
        return None;
    }
    atom.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(input: &str) -> Expr {
        parse(input, &Registry::new()).unwrap().unwrap()
    }

    #[test]
    fn redundant_parentheses_are_stripped() {
        assert_eq!(parse_one("((((7))))").evaluate(), 7.0);
        assert_eq!(parse_one("((+ 1 2))").evaluate(), 3.0);
    }

    #[test]
    fn bare_operation_without_parentheses_parses() {
        assert_eq!(parse_one("+ 1 2").evaluate(), 3.0);
    }

    #[test]
    fn numeric_literal_forms() {
        assert_eq!(parse_one("1e3").evaluate(), 1000.0);
        assert_eq!(parse_one(".5").evaluate(), 0.5);
        assert_eq!(parse_one("-2.5").evaluate(), -2.5);
        assert_eq!(parse_one("+4").evaluate(), 4.0);
    }

    #[test]
    fn non_numeric_atoms_become_variables() {
        let registry = Registry::new();
        let expr = parse("(+ 1+1 feature.score)", &registry).unwrap().unwrap();
        assert!(registry.contains("1+1"));
        assert!(registry.contains("feature.score"));
        assert_eq!(expr.variables(), vec!["1+1", "feature.score"]);
    }

    #[test]
    fn lowercase_special_values_are_variables() {
        let registry = Registry::new();
        let expr = parse("(* 2 inf)", &registry).unwrap().unwrap();
        assert!(registry.contains("inf"));
        assert_eq!(expr.to_string(), "(2.0*inf)");

        registry.set("inf", 4.0);
        assert_eq!(expr.evaluate(), 8.0);

        for name in ["nan", "infinity", "Inf", "-inf", "NAN"] {
            parse(&format!("(* 2 {name})"), &registry).unwrap().unwrap();
            assert!(registry.contains(name), "{name} should be a variable");
        }
    }

    #[test]
    fn spelled_out_special_values_are_constants() {
        assert_eq!(parse_one("Infinity").evaluate(), f64::INFINITY);
        assert_eq!(parse_one("+Infinity").evaluate(), f64::INFINITY);
        assert_eq!(parse_one("-Infinity").evaluate(), f64::NEG_INFINITY);
        assert!(parse_one("NaN").evaluate().is_nan());
        assert_eq!(parse_one("1e999").evaluate(), f64::INFINITY);
    }

    #[test]
    fn minus_with_one_operand_is_negation() {
        let Expr::Expression { operator, .. } = parse_one("(- x)") else {
            panic!("expected an operator node");
        };
        assert_eq!(operator.symbol(), "unaryMinus");
    }

    #[test]
    fn unary_minus_is_reachable_by_name() {
        assert_eq!(parse_one("(unaryMinus 3)").evaluate(), -3.0);
    }

    #[test]
    fn nullary_operator_in_parentheses_is_an_operation() {
        let expr = parse_one("(rand)");
        assert!(matches!(expr, Expr::Expression { ref operands, .. } if operands.is_empty()));
        assert!((0.0..1.0).contains(&expr.evaluate()));
    }

    #[test]
    fn bare_nullary_symbol_is_a_variable() {
        let registry = Registry::new();
        parse("(+ rand 1)", &registry).unwrap().unwrap();
        assert!(registry.contains("rand"));
    }

    #[test]
    fn arity_is_checked_before_operands_are_parsed() {
        let registry = Registry::new();
        let err = parse("(+ a b c)", &registry).unwrap_err();
        assert!(matches!(err, ParseError::ArityMismatch { expected: 2, found: 3, .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_operand_is_an_error() {
        let err = parse("(+ 1 ())", &Registry::new()).unwrap_err();
        assert_eq!(err,
                   ParseError::EmptyOperand { operator: "+".to_string(),
                                              index:    1, });
    }

    #[test]
    fn operator_position_must_hold_a_symbol() {
        let err = parse("((+) 1 2)", &Registry::new()).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedOperator { ref symbol, .. } if symbol == "(+)"));
    }

    #[test]
    fn depth_limit_counts_groups() {
        let registry = Registry::new();
        let options = ParseOptions { max_depth: 3 };
        assert!(parse_with_options("(((1)))", &registry, &options).is_ok());
        assert_eq!(parse_with_options("((((1))))", &registry, &options).unwrap_err(),
                   ParseError::TooDeep { limit: 3 });
    }

    #[test]
    fn deep_input_within_the_default_limit_parses() {
        let depth = 200;
        let source = format!("{}x{}", "(abs ".repeat(depth), ")".repeat(depth));
        let registry = Registry::new();
        let expr = parse(&source, &registry).unwrap().unwrap();
        registry.set("x", -2.0);
        assert_eq!(expr.evaluate(), 2.0);
    }
}
