//! CLI argument parsing for alertkit

use clap::{Parser, Subcommand, ValueEnum};
use presentfmt::ByteUnit;
use serde_json::Value;
use std::path::PathBuf;

use crate::domain::Choice;

#[derive(Parser, Debug)]
#[command(name = "ak")]
#[command(author, version, about = "Coalescing error alerts and presentation formatting", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the error key an error is grouped under
    Classify {
        /// Error as JSON (e.g. '{"code": 10}') or a bare error name
        #[arg(required = true)]
        error: String,
    },

    /// Print the alert an error would show
    Present {
        /// Error as JSON or a bare error name
        #[arg(required = true)]
        error: String,
    },

    /// Report errors to a live coordinator that answers every alert the same way
    Simulate {
        /// Errors as JSON or bare error names, reported in order
        #[arg(required = true)]
        errors: Vec<String>,

        /// Answer given to every alert
        #[arg(long, value_enum, default_value_t = ChoiceArg::Positive)]
        choice: ChoiceArg,
    },

    /// Format a byte count in B/KB/MB/GB/TB
    Bytes {
        #[arg(required = true)]
        bytes: u64,

        /// Smallest unit to render (default: B)
        #[arg(short, long)]
        from: Option<ByteUnit>,
    },

    /// Format a seconds count as H:MM:SS
    Clock {
        #[arg(required = true)]
        seconds: String,
    },

    /// Split a number into digits, least significant first
    Digits {
        #[arg(required = true)]
        number: u64,

        /// Minimum digit count
        #[arg(short, long, default_value = "3")]
        length: usize,

        /// Numeric base
        #[arg(short, long, default_value = "10")]
        base: u64,
    },
}

/// Alert answer on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChoiceArg {
    Positive,
    Negative,
}

impl From<ChoiceArg> for Choice {
    fn from(arg: ChoiceArg) -> Self {
        match arg {
            ChoiceArg::Positive => Choice::Positive,
            ChoiceArg::Negative => Choice::Negative,
        }
    }
}

/// Read an error argument as JSON, falling back to a bare string
pub fn parse_error_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
