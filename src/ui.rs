//! Operator-facing status output
//!
//! Every decision the publisher makes is reported here as a human-readable
//! line. Output is informational only and not part of the contract under
//! test.

use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_skip(message: &str) {
    println!("{} {}", style("·").dim(), message);
}
