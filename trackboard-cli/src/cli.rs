//! Command-line definition

use crate::config::{OutputFormat, RoleMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replay drag gestures against a kanban board without a browser.
#[derive(Debug, Parser)]
#[command(name = "trackboard", version, about)]
pub struct Cli {
    /// Trace-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the per-user one
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Drive a drag session through a gesture script and print the result
    Replay {
        /// Board document (.yaml, .yml or .json)
        #[arg(short, long, value_name = "FILE")]
        board: PathBuf,

        /// Gesture script (.yaml, .yml or .json)
        #[arg(short, long, value_name = "FILE")]
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// How raw ids are mapped to item/container roles
        #[arg(long, value_enum)]
        roles: Option<RoleMode>,

        /// Include the outcome and overlay after every event
        #[arg(long)]
        steps: bool,
    },

    /// Check a board document against the id invariants
    Validate {
        #[arg(short, long, value_name = "FILE")]
        board: PathBuf,

        #[arg(long, value_enum)]
        roles: Option<RoleMode>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the drag overlay for an id
    Overlay {
        #[arg(short, long, value_name = "FILE")]
        board: PathBuf,

        /// Id being dragged; numbers are read as numeric ids
        #[arg(short, long)]
        active: String,

        #[arg(long, value_enum)]
        roles: Option<RoleMode>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
