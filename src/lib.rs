//! # scorexpr
//!
//! scorexpr parses and evaluates scoring formulas written as prefix
//! s-expressions, such as `(+ 0.5 (* (/ 15 1000) (ln (- 55 12))))`.
//!
//! A formula is parsed once into an immutable tree. Its variables live in a
//! [`Registry`] shared by every tree parsed against it, so new inputs can be
//! fed in through the registry and the tree re-evaluated without parsing
//! again. Trees can also be printed as infix text or as an ASCII diagram.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use scorexpr::{Registry, parse};
//!
//! let registry = Registry::new();
//! let score = parse("(sigmoid (+ (* w x) b))", &registry).unwrap().unwrap();
//!
//! registry.refresh(&HashMap::from([("w".to_string(), 1.0), ("x".to_string(), 0.0)]));
//! assert_eq!(score.evaluate(), 0.5);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum: a tree of constants, variable
/// references and operator applications. Trees are built by the parser,
/// evaluated by the evaluator and rendered by the printer.
pub mod ast;
/// Provides the error types of the tokenizer and the parser.
///
/// Evaluation never fails, so every error in this crate is raised while
/// turning text into a tree. Each error carries enough context (positions,
/// symbols, operand counts) to explain the failure to the author of the
/// formula.
pub mod error;
/// Ties together tokenizing, parsing, evaluation and printing.
///
/// # Responsibilities
/// - Tokenizes and parses s-expression text into trees.
/// - Holds the operator catalogue and the variable registry.
/// - Evaluates and renders trees.
pub mod interpreter;

pub use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        parser::{ParseOptions, parse, parse_with_options},
        registry::{Registry, Variable},
    },
};

/// Parses and evaluates a formula in one step.
///
/// The formula is parsed against a fresh registry, so every variable it
/// mentions evaluates to `0.0`. Use [`parse`] with a [`Registry`] to supply
/// values.
///
/// # Errors
/// Returns any error [`parse`] returns, and `ParseError::EmptyInput` if the
/// source holds no expression.
///
/// # Examples
/// ```
/// use scorexpr::{ParseError, evaluate};
///
/// assert_eq!(evaluate("(+ 1 (* 2 3))"), Ok(7.0));
/// assert_eq!(evaluate("(* 10 unknown)"), Ok(0.0));
///
/// assert_eq!(evaluate(""), Err(ParseError::EmptyInput));
/// assert!(evaluate("(atan 1)").is_err());
/// ```
pub fn evaluate(source: &str) -> ParseResult<f64> {
    let registry = Registry::new();
    parse(source, &registry)?.map(|expr| expr.evaluate())
                             .ok_or(ParseError::EmptyInput)
}
