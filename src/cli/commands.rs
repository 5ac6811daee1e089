//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - open: open an existing list file and start a session
//! - create: start a session for a new list file
//!
//! With no subcommand, the interactive top-level menu runs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Taskr - a file-backed to-do list manager
#[derive(Parser, Debug)]
#[command(name = "taskr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open an existing to-do list file and start a session
    Open {
        /// List file to open (relative names resolve against the configured
        /// lists directory)
        file: PathBuf,
    },

    /// Create a new to-do list and start a session
    Create {
        /// File the new list will save to
        file: PathBuf,
    },
}
