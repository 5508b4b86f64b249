//! Output formatting.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

const SCHEMA_VERSION: &str = "global-id.inspect.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Unrecognized names fall back to the table format.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No identifiers given.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data)),
    }
}

/// Print a one-line validation summary to stderr.
pub fn print_summary(total: usize, invalid: usize) {
    if invalid == 0 {
        eprintln!("{} {} identifiers valid", "OK:".green().bold(), total);
    } else {
        eprintln!(
            "{} {} of {} identifiers invalid",
            "Invalid:".yellow().bold(),
            invalid,
            total
        );
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!([]));
    let wrapped = serde_json::json!({
        "schemaVersion": SCHEMA_VERSION,
        "data": value
    });
    serde_json::to_string_pretty(&wrapped).unwrap_or_else(|_| "{}".to_string())
}
