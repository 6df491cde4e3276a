use std::{collections::HashMap, fmt, sync::LazyLock};

use tracing::debug;

use crate::interpreter::operator::{arithmetic, comparison, logic, math, random};

/// Type alias for operator implementations.
///
/// An operator receives its evaluated operands, exactly as many as its arity,
/// in source order. Implementations are total: numeric domain problems produce
/// infinities or `NaN` instead of errors.
pub type OperatorFn = fn(&[f64]) -> f64;

/// Describes one operator of the language.
///
/// Descriptors are `'static` and never change; expression trees refer to them
/// by reference.
pub struct Operator {
    symbol: &'static str,
    arity:  usize,
    func:   OperatorFn,
}

impl Operator {
    /// Symbol used for this operator in source text and in printed output.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Number of operands the operator requires.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Applies the operator to already evaluated operands.
    ///
    /// # Parameters
    /// - `args`: Operand values, `self.arity()` of them.
    ///
    /// # Returns
    /// The result of the operator.
    ///
    /// # Example
    /// ```
    /// use scorexpr::interpreter::operator::catalogue;
    ///
    /// let add = catalogue().lookup("+").unwrap();
    /// assert_eq!(add.apply(&[2.0, 3.0]), 5.0);
    /// ```
    #[must_use]
    pub fn apply(&self, args: &[f64]) -> f64 {
        debug_assert_eq!(args.len(), self.arity, "operand count for {}", self.symbol);
        (self.func)(args)
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Operator {}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
         .field("symbol", &self.symbol)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

/// Defines the operator table.
///
/// Each entry provides a symbol, an arity and a function pointer. The macro
/// produces `OPERATOR_TABLE` (the descriptors) and `OPERATOR_SYMBOLS` (their
/// symbols in declaration order).
macro_rules! operators {
    (
        $(
            $symbol:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static OPERATOR_TABLE: &[Operator] = &[
            $(
                Operator { symbol: $symbol, arity: $arity, func: $func },
            )*
        ];
        /// Symbols of every operator reachable by name, in declaration order.
        pub const OPERATOR_SYMBOLS: &[&str] = &[
            $($symbol,)*
        ];
    };
}

operators! {
    "=="         => { arity: 2, func: comparison::eq },
    "!="         => { arity: 2, func: comparison::ne },
    ">"          => { arity: 2, func: comparison::gt },
    ">="         => { arity: 2, func: comparison::ge },
    "<"          => { arity: 2, func: comparison::lt },
    "<="         => { arity: 2, func: comparison::le },
    "||"         => { arity: 2, func: logic::or },
    "&&"         => { arity: 2, func: logic::and },
    "!"          => { arity: 1, func: logic::not },
    "sign"       => { arity: 1, func: math::sign },
    "+"          => { arity: 2, func: arithmetic::add },
    "-"          => { arity: 2, func: arithmetic::subtract },
    "*"          => { arity: 2, func: arithmetic::multiply },
    "/"          => { arity: 2, func: arithmetic::divide },
    "**"         => { arity: 2, func: arithmetic::power },
    "ln"         => { arity: 1, func: math::ln },
    "ln1plus"    => { arity: 1, func: math::ln1plus },
    "log2"       => { arity: 1, func: math::log2 },
    "max"        => { arity: 2, func: arithmetic::max },
    "min"        => { arity: 2, func: arithmetic::min },
    "abs"        => { arity: 1, func: arithmetic::abs },
    "unaryMinus" => { arity: 1, func: arithmetic::negate },
    "%"          => { arity: 2, func: arithmetic::modulo },
    "if"         => { arity: 3, func: logic::if_else },
    "exp"        => { arity: 1, func: math::exp },
    "sigmoid"    => { arity: 1, func: math::sigmoid },
    "tanh"       => { arity: 1, func: math::tanh },
    "rand"       => { arity: 0, func: random::rand },
    "rand-in"    => { arity: 2, func: random::rand_in },
    "floor"      => { arity: 1, func: math::floor },
    "ceil"       => { arity: 1, func: math::ceil },
    "round"      => { arity: 1, func: math::round },
    "sqrt"       => { arity: 1, func: math::sqrt },
    "in"         => { arity: 3, func: comparison::in_range },
    "cos"        => { arity: 1, func: math::cos },
    "sin"        => { arity: 1, func: math::sin },
    "tan"        => { arity: 1, func: math::tan },
}

/// Symbol under which negation is listed. The parser also selects it when `-`
/// is given a single operand.
pub const UNARY_MINUS_SYMBOL: &str = "unaryMinus";

static CATALOGUE: LazyLock<Catalogue> = LazyLock::new(Catalogue::new);

/// Returns the process-wide operator catalogue.
///
/// The catalogue is built on first use and never changes afterwards, so it can
/// be read from any thread without locking.
pub fn catalogue() -> &'static Catalogue {
    &CATALOGUE
}

/// Lookup structure over the operator table.
///
/// Maps every symbol to its descriptor. Building it also seeds the generators
/// used by `rand` and `rand-in`.
pub struct Catalogue {
    by_symbol:   HashMap<&'static str, &'static Operator>,
    unary_minus: &'static Operator,
}

impl Catalogue {
    /// Builds the catalogue from the operator table.
    ///
    /// # Panics
    /// Panics if two table entries share a symbol or if negation is missing
    /// from the table. Both are properties of the literal table above and are
    /// covered by unit tests.
    fn new() -> Self {
        random::seed_generators();

        let mut by_symbol = HashMap::with_capacity(OPERATOR_TABLE.len());
        for operator in OPERATOR_TABLE {
            let previous = by_symbol.insert(operator.symbol, operator);
            assert!(previous.is_none(), "duplicate operator symbol '{}'", operator.symbol);
        }

        let unary_minus = by_symbol.get(UNARY_MINUS_SYMBOL)
                                   .copied()
                                   .unwrap_or_else(|| panic!("'{UNARY_MINUS_SYMBOL}' missing"));

        debug!(operators = by_symbol.len(), "operator catalogue built");

        Self { by_symbol,
               unary_minus }
    }

    /// Finds the operator registered under `symbol`.
    ///
    /// # Example
    /// ```
    /// use scorexpr::interpreter::operator::catalogue;
    ///
    /// assert_eq!(catalogue().lookup("if").map(|op| op.arity()), Some(3));
    /// assert!(catalogue().lookup("atan").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, symbol: &str) -> Option<&'static Operator> {
        self.by_symbol.get(symbol).copied()
    }

    /// Returns `true` if `symbol` names an operator.
    #[must_use]
    pub fn is_supported(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Returns the negation operator.
    #[must_use]
    pub const fn unary_minus(&self) -> &'static Operator {
        self.unary_minus
    }

    /// Number of operators in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    /// Always `false`; present for symmetry with [`Catalogue::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// Iterates over every operator in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Operator> {
        OPERATOR_TABLE.iter()
    }

    /// Lists every supported symbol, sorted and separated by single spaces.
    ///
    /// Used in `UnsupportedOperator` diagnostics.
    #[must_use]
    pub fn supported_symbols(&self) -> String {
        let mut symbols = self.by_symbol.keys().copied().collect::<Vec<_>>();
        symbols.sort_unstable();
        symbols.join(" ")
    }
}

impl fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
         .entries(self.iter().map(Operator::symbol))
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn symbols_are_unique() {
        let unique = OPERATOR_SYMBOLS.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), OPERATOR_SYMBOLS.len());
        assert_eq!(catalogue().len(), OPERATOR_SYMBOLS.len());
    }

    #[test]
    fn every_arity_is_at_most_three() {
        assert!(catalogue().iter().all(|op| op.arity() <= 3));
    }

    #[test]
    fn unary_minus_is_listed_by_name() {
        let minus = catalogue().unary_minus();
        assert_eq!(minus.symbol(), UNARY_MINUS_SYMBOL);
        assert_eq!(minus.arity(), 1);
        assert_eq!(catalogue().lookup(UNARY_MINUS_SYMBOL), Some(minus));
        assert_eq!(minus.apply(&[4.0]), -4.0);
    }

    #[test]
    fn binary_minus_is_a_different_operator() {
        let minus = catalogue().lookup("-").unwrap();
        assert_eq!(minus.arity(), 2);
        assert_ne!(minus, catalogue().unary_minus());
    }

    #[test]
    fn supported_symbols_lists_everything_sorted() {
        let listed = catalogue().supported_symbols();
        let symbols = listed.split(' ').collect::<Vec<_>>();
        assert_eq!(symbols.len(), OPERATOR_SYMBOLS.len());

        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);

        for symbol in ["rand-in", "ln1plus", "**", "&&", "||", "in", "tanh"] {
            assert!(symbols.contains(&symbol), "{symbol} missing");
        }
    }

    #[test]
    fn arities_match_the_language() {
        let expected = [("rand", 0),
                        ("!", 1),
                        ("sigmoid", 1),
                        ("rand-in", 2),
                        ("%", 2),
                        ("if", 3),
                        ("in", 3)];
        for (symbol, arity) in expected {
            assert_eq!(catalogue().lookup(symbol).map(Operator::arity), Some(arity), "{symbol}");
        }
    }
}
