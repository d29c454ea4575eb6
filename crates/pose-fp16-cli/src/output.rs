//! Console output helpers shared by the subcommands.

use serde_json::Value;

/// Print a JSON value, pretty-printed, to stdout.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}

/// Print an indented `key value` line with the key column aligned.
pub fn print_kv(key: &str, value: &str) {
    println!("  {key:<22} {value}");
}
