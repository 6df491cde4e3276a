use std::fmt::{self, Write};

use crate::ast::Expr;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const INDENT: &str = "|   ";
const LAST_INDENT: &str = "    ";

/// Renders the tree as human-readable infix text.
///
/// - Constants use the shortest representation that round-trips, always with
///   a fractional part (`15.0`, `0.5`).
/// - Variables use their name.
/// - Unary operators render as `symbol(operand)`.
/// - Binary operators render as `(left symbol right)`.
/// - Any other arity renders as `(symbol operand1 operand2 ...)`.
///
/// # Example
/// ```
/// use scorexpr::{interpreter::registry::Registry, parse};
///
/// let registry = Registry::new();
/// let expr = parse("(+ 0.5 (* (/ 15 1000) (ln (- 55 12))))", &registry).unwrap()
///                                                                      .unwrap();
/// assert_eq!(expr.to_string(), "(0.5+((15.0/1000.0)*ln((55.0-12.0))))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value:?}"),
            Self::Variable(variable) => write!(f, "{variable}"),
            Self::Expression { operator, operands } => match operands.as_slice() {
                [operand] => write!(f, "{operator}({operand})"),
                [left, right] => write!(f, "({left}{operator}{right})"),
                _ => {
                    write!(f, "({operator}")?;
                    for operand in operands {
                        write!(f, " {operand}")?;
                    }
                    f.write_char(')')
                },
            },
        }
    }
}

/// Renders the tree as infix text. Same as `expr.to_string()`.
#[must_use]
pub fn render_infix(expr: &Expr) -> String {
    expr.to_string()
}

/// Renders the tree as an ASCII diagram.
///
/// Each operator or atom sits on its own line. Children are introduced with
/// `├── `, the last child of a node with `└── `. Lines below a last child are
/// indented with four spaces, lines below any other child with `|   `. Every
/// line ends with a newline. A tree consisting of a single atom renders as the
/// bare atom text.
///
/// # Example
/// ```
/// use scorexpr::{interpreter::{printer::render_tree, registry::Registry}, parse};
///
/// let registry = Registry::new();
/// let expr = parse("(if (> x 1) x 1)", &registry).unwrap().unwrap();
///
/// assert_eq!(render_tree(&expr),
///            "└── if\n    ├── >\n    |   ├── x\n    |   └── 1.0\n    ├── x\n    └── 1.0\n");
/// ```
#[must_use]
pub fn render_tree(expr: &Expr) -> String {
    if expr.is_atom() {
        return expr.to_string();
    }

    let mut out = String::new();
    write_node(expr, "", true, &mut out);
    out
}

fn write_node(expr: &Expr, prefix: &str, is_last: bool, out: &mut String) {
    let branch = if is_last { LAST_BRANCH } else { BRANCH };

    let Expr::Expression { operator, operands } = expr else {
        let _ = writeln!(out, "{prefix}{branch}{expr}");
        return;
    };

    let _ = writeln!(out, "{prefix}{branch}{operator}");

    let child_prefix = format!("{prefix}{}", if is_last { LAST_INDENT } else { INDENT });
    let count = operands.len();
    for (index, operand) in operands.iter().enumerate() {
        write_node(operand, &child_prefix, index + 1 == count, out);
    }
}

impl Expr {
    /// Renders the tree as an ASCII diagram. See [`render_tree`].
    #[must_use]
    pub fn to_tree_string(&self) -> String {
        render_tree(self)
    }
}
