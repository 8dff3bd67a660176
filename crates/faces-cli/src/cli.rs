//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Select the faces initializer for a web application
#[derive(Parser, Debug)]
#[command(name = "faces-init")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the initializer for a deployment descriptor
    ///
    /// Examples:
    ///   faces-init resolve web.toml            # No JSP runtime present
    ///   faces-init resolve web.toml --jsp      # JSP runtime present
    ///   faces-init resolve web.yaml --json     # Machine-readable output
    Resolve {
        /// Path to the descriptor (.toml, .json, .yaml)
        descriptor: PathBuf,

        /// Report the JSP integration as available
        #[arg(long)]
        jsp: bool,

        /// Additional capabilities present in the host
        #[arg(short, long = "capability")]
        capabilities: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List registered initializer types
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
