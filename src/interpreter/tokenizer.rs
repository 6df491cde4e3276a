use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token of the s-expression grammar.
///
/// The grammar only distinguishes parentheses from everything else, so the
/// lexer produces three kinds of tokens and skips whitespace. Grouping is done
/// afterwards by [`tokenize`], which tracks nesting depth over the spans.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A run of characters that are neither whitespace nor parentheses, such
    /// as `+`, `rand-in`, `0.5` or `x`.
    #[regex(r"[^ \t\r\n\f()]+")]
    Atom,
}

/// Splits an s-expression into its top-level tokens.
///
/// A token is either a bare run of non-whitespace, non-parenthesis characters,
/// or a complete parenthesized group (including any nested groups) returned as
/// one opaque slice. Leading and trailing whitespace is ignored.
///
/// The parser calls this once per nesting level, each time on the text inside
/// one pair of parentheses.
///
/// # Parameters
/// - `input`: Text to split.
///
/// # Returns
/// The top-level tokens in source order, borrowed from `input`.
///
/// # Errors
/// - `SyntaxError::UnmatchedClose` if a `)` appears while no group is open.
/// - `SyntaxError::UnmatchedOpen` if the input ends inside a group. The
///   position points at the `(` that opened it.
///
/// # Example
/// ```
/// use scorexpr::interpreter::tokenizer::tokenize;
///
/// let tokens = tokenize("(a b (c d)) e f (g)").unwrap();
/// assert_eq!(tokens, vec!["(a b (c d))", "e", "f", "(g)"]);
///
/// assert!(tokenize("a b)").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<&str>, SyntaxError> {
    let input = input.trim();

    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut group_start = 0usize;

    let mut lexer = Token::lexer(input);
    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(Token::LParen) => {
                if depth == 0 {
                    group_start = span.start;
                }
                depth += 1;
            },
            Ok(Token::RParen) => {
                if depth == 0 {
                    return Err(SyntaxError::UnmatchedClose { position: char_offset(input,
                                                                                   span.start),
                                                             input:    input.to_string(), });
                }
                depth -= 1;
                if depth == 0 {
                    tokens.push(&input[group_start..span.end]);
                }
            },
            _ => {
                if depth == 0 {
                    tokens.push(lexer.slice());
                }
            },
        }
    }

    if depth > 0 {
        return Err(SyntaxError::UnmatchedOpen { position: char_offset(input, group_start),
                                                input:    input.to_string(), });
    }

    Ok(tokens)
}

/// Returns `true` if the token is a parenthesized group.
#[must_use]
pub fn is_group(token: &str) -> bool {
    token.starts_with('(') && token.ends_with(')')
}

/// Strips one layer of parentheses from a group token.
///
/// # Example
/// ```
/// use scorexpr::interpreter::tokenizer::strip_group;
///
/// assert_eq!(strip_group("(+ 1 (- 2))"), "+ 1 (- 2)");
/// assert_eq!(strip_group("x"), "x");
/// ```
#[must_use]
pub fn strip_group(token: &str) -> &str {
    if is_group(token) {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

fn char_offset(input: &str, byte_offset: usize) -> usize {
    input[..byte_offset].chars().count()
}
