//! CLI definitions for the `suggest` command-line interface.
//!
//! Two subcommands: `query` lists substring suggestions and `exact` looks up
//! a single case-insensitive match. Both answer from the configured default
//! source unless `--source` overrides it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "suggest", about = "Substring suggestions over a string dataset", version)]
pub struct Cli {
    /// Configuration file (JSON or TOML); otherwise the environment and the
    /// standard locations are tried
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Source identifier (URL or path) overriding the configured one
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List entries containing TEXT, case-insensitively
    Query {
        /// Text to search for
        text: String,

        /// Maximum number of suggestions (defaults to the source's cap)
        #[arg(short, long)]
        max: Option<usize>,

        /// Entry to leave out of the results; repeatable
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Print the entry equal to TEXT, ignoring case
    Exact {
        /// Text to look up
        text: String,
    },
}

impl Commands {
    /// Stable name used in log fields.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Query { .. } => "query",
            Self::Exact { .. } => "exact",
        }
    }
}
