use thiserror::Error;

/// Result type used by the tokenizer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents an unbalanced parenthesis found by the tokenizer.
///
/// Positions are character offsets into the input after leading and trailing
/// whitespace has been trimmed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `)` was found while no group was open.
    #[error("Unmatched close parenthesis at position {position} of input '{input}'.")]
    UnmatchedClose {
        /// Offset of the offending `)`.
        position: usize,
        /// The trimmed input that was being tokenized.
        input:    String,
    },
    /// The input ended while a group was still open.
    #[error("Unmatched open parenthesis at position {position} of input '{input}'.")]
    UnmatchedOpen {
        /// Offset of the `(` that opened the unterminated group.
        position: usize,
        /// The trimmed input that was being tokenized.
        input:    String,
    },
}

impl SyntaxError {
    /// Returns the character offset carried by the error.
    ///
    /// # Example
    /// ```
    /// use scorexpr::interpreter::tokenizer::tokenize;
    ///
    /// let err = tokenize("(+ 1 2").unwrap_err();
    /// assert_eq!(err.position(), 0);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnmatchedClose { position, .. } | Self::UnmatchedOpen { position, .. } => {
                *position
            },
        }
    }
}

/// Represents all errors that can occur while parsing an expression.
///
/// Every variant aborts the current parse; no partial tree is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has unbalanced parentheses.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The operator symbol is not in the catalogue.
    #[error("Operator not supported: {symbol}, the list of supported operators are: {supported}")]
    UnsupportedOperator {
        /// The symbol that was looked up.
        symbol:    String,
        /// Every supported symbol, space separated.
        supported: String,
    },
    /// The operator received the wrong number of operands.
    #[error("{operator} expect {expected} operands, actual number of operands is: {found}")]
    ArityMismatch {
        /// Symbol of the operator.
        operator: String,
        /// The operator's declared arity.
        expected: usize,
        /// The number of operand strings supplied.
        found:    usize,
    },
    /// An operand contained nothing to parse, as in `(+ 1 ())`.
    #[error("Operand {index} of {operator} is empty.")]
    EmptyOperand {
        /// Symbol of the operator.
        operator: String,
        /// Zero-based position of the empty operand.
        index:    usize,
    },
    /// Parenthesis nesting went past [`ParseOptions::max_depth`].
    ///
    /// [`ParseOptions::max_depth`]: crate::interpreter::parser::ParseOptions::max_depth
    #[error("Expression is nested deeper than the limit of {limit} levels.")]
    TooDeep {
        /// The configured limit.
        limit: usize,
    },
    /// The input held no expression where one was required.
    #[error("Nothing to parse.")]
    EmptyInput,
}
