//! Output formatting utilities for the demo.

use mapmut_core::Value;
use mapmut_mutation::MutationResult;

/// Format a mutation result for display.
pub fn format_result(result: &MutationResult<Value>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => format!("{:?} error: {}", err.kind(), err),
    }
}

/// Print help information.
pub fn print_help() {
    println!("Usage: mapmut-demo [OPTIONS]");
    println!();
    println!("Runs the reference add/update/delete scenarios against");
    println!("{{\"name\": \"John\", \"age\": 30}} and prints each result.");
    println!();
    println!("Options:");
    println!("  -v, --verbose  Log mutations to stderr (repeat for trace)");
    println!("  -h, --help     Show this help");
}
