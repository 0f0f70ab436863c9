//! User-facing progress output

use colored::Colorize;

use crate::process::CommandLine;

/// Echo a command line before it runs
pub fn command(cmd: &CommandLine) {
    println!("{}", format!("$ {cmd}").bold());
}

/// Print a section header such as "Fetching latest commits"
pub fn section(title: &str) {
    println!("{}", title.yellow().bold());
}

/// Print a plain informational line
pub fn note(message: &str) {
    println!("{message}");
}
