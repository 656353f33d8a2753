//! Command-line surface.
//!
//! With no subcommand the binary runs the interactive menu; `inspect`
//! dumps the discovered catalog without entering it.

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::catalog::Catalog;
use crate::Result;

/// Patternarium: interactive gallery of the 23 Gang of Four design patterns
#[derive(Parser)]
#[command(name = "patternarium")]
#[command(version)]
#[command(about = "Interactive gallery of the 23 Gang of Four design patterns")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log verbosity for diagnostic output (narration always goes to stdout)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the discovered catalog without entering the menu
    Inspect {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One row of `inspect` output.
#[derive(Serialize, Tabled)]
struct DemoSummary {
    #[tabled(rename = "Pattern")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render the catalog as a table or JSON array.
pub fn run_inspect(catalog: &Catalog, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let rows: Vec<DemoSummary> = catalog
        .entries()
        .iter()
        .map(|entry| DemoSummary {
            name: entry.name().to_string(),
            category: entry.category.as_str().to_string(),
            description: entry.demo.description().to_string(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        OutputFormat::Text => {
            let mut table = Table::new(&rows);
            table.with(Style::sharp());
            writeln!(out, "{table}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults_to_interactive() {
        let cli = Cli::parse_from(["patternarium"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_inspect_parsing() {
        let cli = Cli::parse_from(["patternarium", "inspect", "--format", "json"]);
        match cli.command {
            Some(Commands::Inspect { format }) => assert_eq!(format, OutputFormat::Json),
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn test_inspect_format_default() {
        let cli = Cli::parse_from(["patternarium", "inspect"]);
        match cli.command {
            Some(Commands::Inspect { format }) => assert_eq!(format, OutputFormat::Text),
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn test_log_level_directives() {
        assert_eq!(LogLevel::Error.to_filter_directive(), "error");
        assert_eq!(LogLevel::Trace.to_filter_directive(), "trace");
    }
}
