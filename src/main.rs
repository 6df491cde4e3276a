use std::{collections::HashMap, fs, process::ExitCode};

use clap::Parser;
use scorexpr::{
    ParseOptions, Registry,
    interpreter::{parser::DEFAULT_MAX_DEPTH, printer::render_tree},
    parse_with_options,
};
use tracing::warn;

/// scorexpr parses a scoring formula written as an s-expression, prints it in
/// infix form, evaluates it and draws its tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells scorexpr to read the formula from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Assigns a value to a variable before evaluating, as NAME=VALUE. May be
    /// repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    vars: Vec<(String, f64)>,

    /// Maximum parenthesis nesting accepted by the parser.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn parse_assignment(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))
                                                  .unwrap_or_default();

    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let registry = Registry::new();
    let options = ParseOptions { max_depth: args.max_depth };

    let expr = match parse_with_options(&source, &registry, &options) {
        Ok(Some(expr)) => expr,
        Ok(None) => {
            eprintln!("Nothing to parse.");
            return ExitCode::FAILURE;
        },
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    println!("={expr}");

    if !args.vars.is_empty() {
        let values = args.vars.into_iter().collect::<HashMap<_, _>>();
        for name in values.keys().filter(|name| !registry.contains(name)) {
            warn!(name = name.as_str(), "variable does not occur in the formula");
        }
        registry.refresh(&values);
        println!("={}", expr.evaluate());
    } else if registry.is_empty() {
        println!("={}", expr.evaluate());
    }

    println!("tree");
    print!("{}", render_tree(&expr));
    if expr.is_atom() {
        println!();
    }

    ExitCode::SUCCESS
}
