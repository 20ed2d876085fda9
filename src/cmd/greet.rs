//! Example commands: `greet` and `add`.

use anyhow::Result;
use serde_json::json;

use mailform::example::{self, Greeter};

use crate::cmd::ui::Output;

/// Greet `name`, optionally with fallback or HTML escaping.
pub fn cmd_greet(out: &Output, greeter: &Greeter, name: &str, safe: bool, web: bool) -> Result<()> {
    let greeting = if safe {
        greeter.safe_greet(Some(name))?
    } else if web {
        greeter.greet_for_web(name)?
    } else {
        greeter.greet(name)?
    };

    out.result(&greeting, json!({ "greeting": greeting }));
    Ok(())
}

/// Add two integers.
pub fn cmd_add(out: &Output, a: i64, b: i64, verbose: bool) -> Result<()> {
    let sum = example::add_numbers(a, b)?;

    if verbose {
        out.detail(&format!("Calculating: {} + {}", a, b));
        out.result(&format!("Result: {}", sum), json!({ "a": a, "b": b, "sum": sum }));
    } else {
        out.result(&sum.to_string(), json!({ "sum": sum }));
    }

    Ok(())
}
