/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// s-expression: unbalanced parentheses, unknown operator symbols, operand
/// counts that do not match an operator's arity, empty operands and nesting
/// that exceeds the configured depth limit.
pub mod parse_error;

pub use parse_error::{ParseError, ParseResult, SyntaxError};
