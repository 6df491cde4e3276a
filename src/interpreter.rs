/// The evaluator module computes the value of a parsed tree.
///
/// Evaluation is a post-order walk: operands are evaluated left to right and
/// the operator is applied to their values. Variables are read from their
/// registry cells at the moment of evaluation, so a tree can be evaluated again
/// after its inputs change without being parsed again.
pub mod evaluator;
/// The operator module defines the catalogue of supported operators.
///
/// Every operator is a symbol, a fixed arity and a numeric function. The
/// catalogue is a process-wide, read-only table built on first use.
///
/// # Responsibilities
/// - Declares the operator table and the functions behind each entry.
/// - Resolves symbols to descriptors for the parser.
/// - Owns the seeded generators behind the random operators.
pub mod operator;
/// The parser module builds expression trees from s-expression text.
///
/// The parser tokenizes one nesting level at a time, strips the parentheses
/// of groups and recurses into them. Operators are resolved through the
/// catalogue and variables through a caller-supplied registry.
///
/// # Responsibilities
/// - Recognizes constants, variables and operator applications.
/// - Checks operator symbols and operand counts.
/// - Bounds nesting depth.
pub mod parser;
/// Human-readable renderings of expression trees: infix text and an ASCII
/// diagram.
pub mod printer;
/// The registry module owns the variables of an evaluation context.
pub mod registry;
/// The tokenizer module splits one nesting level of input into tokens.
///
/// A token is either a maximal run of characters without whitespace or
/// parentheses, or a balanced parenthesized group kept as a single piece of
/// text. Unbalanced parentheses are reported with their position.
pub mod tokenizer;
