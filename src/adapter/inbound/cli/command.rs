//! Command-line interface definitions.
//!
//! Defines the CLI structure for factorlab using `clap`. Every computation
//! flag is optional so the settings file and built-in defaults can fill in
//! whatever the command line leaves out.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::config::{ComputeConfig, OutputFormat};
use crate::domain::Algorithm;

/// Factorial calculator with interchangeable strategies and guardrails
#[derive(Parser, Debug)]
#[command(name = "factorlab")]
#[command(version, about)]
pub struct Cli {
    /// Increase output verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute factorials from --n, --input, or stdin
    Calc(CalcArgs),

    /// Check a value against the guardrails without computing
    Validate(ValidateArgs),

    /// Time factorial computation across a range
    Bench(BenchArgs),

    /// List available strategies and their aliases
    Strategies,
}

/// Guardrail and algorithm overrides shared by every computing command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ComputeArgs {
    /// Strategy name or alias (iter, rec, prod, math, ...)
    #[arg(long)]
    pub method: Option<Algorithm>,

    /// Largest accepted n
    #[arg(long = "max-n")]
    pub max_n: Option<u64>,
}

impl ComputeArgs {
    /// Apply these overrides on top of `base`.
    #[must_use]
    pub fn apply(&self, base: ComputeConfig) -> ComputeConfig {
        let mut config = base;
        if let Some(algorithm) = self.method {
            config = config.with_algorithm(algorithm);
        }
        if let Some(max_input) = self.max_n {
            config = config.with_max_input(max_input);
        }
        config
    }
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Single value of n
    #[arg(long, allow_hyphen_values = true)]
    pub n: Option<String>,

    /// File with one n per line
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output format [text, json, csv]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub compute: ComputeArgs,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Value of n to check
    #[arg(long, allow_hyphen_values = true)]
    pub n: String,

    #[command(flatten)]
    pub compute: ComputeArgs,
}

/// Arguments for the `bench` subcommand.
#[derive(Parser, Debug)]
pub struct BenchArgs {
    /// Range as start:stop[:step]
    #[arg(long, allow_hyphen_values = true)]
    pub range: String,

    /// CSV output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub compute: ComputeArgs,
}
