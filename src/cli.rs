use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "brand-audit")]
#[command(author, version, about = "Scan a codebase for leftover references to a previous brand")]
#[command(long_about = "Recursively scans text files (excluding node_modules, .git, build \
    output and similar) for old brand tokens and reports every match.\n\n\
    Exit codes:\n  \
    0 - No old brand tokens found\n  \
    1 - Tokens found, or a configuration/audit error occurred")]
#[command(after_help = "Examples:\n  \
    brand-audit\n  \
    brand-audit site --tokens custom-tokens.json")]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Use custom token patterns from a JSON array of regex strings
    #[arg(long, value_name = "FILE")]
    pub tokens: Option<PathBuf>,

    /// Path to configuration file (default: <ROOT>/.brand-audit.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything except the report
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Default `tracing` filter directive for the requested verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
