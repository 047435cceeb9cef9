//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use repro_core::EventType;

/// Reproduction control for the farm.
///
/// Keeps a timeline of heat, mating and birth events and derives
/// management alerts for a selected calendar day.
#[derive(Debug, Parser)]
#[command(name = "repro", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive session, one command per line.
    ///
    /// Commands: `select <date>`, `register <heat|mating|birth>`,
    /// `delete <id>`, `events`, `alerts`, `list`. Lines starting with `#`
    /// are ignored.
    Session {
        /// Read commands from this file instead of stdin.
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Show the timeline and alerts for a date from a JSONL event file.
    Evaluate {
        /// File with one event per line, e.g. {"id":1,"date":"2024-01-01","type":"heat"}.
        #[arg(long)]
        events: PathBuf,

        /// Reference date (YYYY-MM-DD, "today", or e.g. "3 days ago").
        #[arg(long)]
        date: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the key dates that follow from a single event.
    Schedule {
        /// Event type: heat, mating or birth.
        #[arg(long)]
        kind: EventType,

        /// Date of the event (YYYY-MM-DD, "today", or e.g. "3 days ago").
        #[arg(long)]
        date: String,
    },
}
