use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use condition_expression::interpreter::ConditionExpression;
use log::{debug, info};
use std::collections::HashMap;

/// Evaluates a condition expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The condition to evaluate, e.g. "deployed && !being-captured"
    #[clap(allow_hyphen_values = true)]
    expression: String,

    /// Sets a variable, as NAME=VALUE. `true` and `false` are predefined as 1 and 0
    #[clap(short, long, value_name = "NAME=VALUE", parse(try_from_str = parse_definition))]
    define: Vec<(String, i32)>,

    /// Prints the syntax tree of the condition
    #[clap(long)]
    tree: bool,

    /// Prints the variables the condition refers to
    #[clap(long)]
    list_variables: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let condition = ConditionExpression::new(&args.expression)
        .with_context(|| format!("could not compile condition `{}`", args.expression))?;
    debug!("normalized condition: {}", condition);

    if args.tree {
        print!("{}", condition.tree());
    }
    if args.list_variables {
        for name in condition.variables() {
            println!("{}", name);
        }
    }

    let mut variables: HashMap<String, i32> = HashMap::new();
    variables.insert("true".into(), 1);
    variables.insert("false".into(), 0);
    variables.extend(args.define);

    for name in condition.variables() {
        if !variables.contains_key(name) {
            info!("variable `{}` is not defined and counts as 0", name);
        }
    }

    println!("{}", condition.evaluate(&variables));
    Ok(())
}

fn parse_definition(definition: &str) -> Result<(String, i32), String> {
    let (name, value) = definition
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found `{}`", definition))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in `{}`", definition));
    }
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid value for `{}`: {}", name, error))?;
    Ok((name.to_string(), value))
}
