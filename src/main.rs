use std::collections::HashMap;

use clap::Parser;
use verdict::{Value, evaluate};

/// verdict evaluates a rule-condition expression against a set of
/// variable bindings and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Variable bindings of the form `name=value`. Values are parsed as
    /// integer, float, or boolean when possible, and kept as strings
    /// otherwise.
    #[arg(short, long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// The condition expression to evaluate.
    expression: String,
}

fn main() {
    let args = Args::parse();

    let mut variables = HashMap::new();
    for binding in &args.vars {
        let Some((name, raw)) = binding.split_once('=') else {
            eprintln!("Invalid binding '{binding}'. Expected the form name=value.");
            std::process::exit(1);
        };
        variables.insert(name.to_string(), parse_value(raw));
    }

    match evaluate(&args.expression, &variables, &HashMap::new()) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Interprets a command-line value literal.
///
/// Tries the narrowest kind first: integer, then float, then boolean;
/// anything else stays a string.
fn parse_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return Value::Float(x);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Str(raw.to_string()),
    }
}
