//! CLI command definitions.

use clap::{Parser, Subcommand};
use gibberlink::{AgentId, Mode};
use std::path::PathBuf;

/// Gibberlink - watch two agents notice each other and switch to a sound protocol
#[derive(Parser, Debug)]
#[command(name = "gibberlink")]
#[command(about = "Play a scripted two-agent conversation that switches to a sound protocol", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a conversation script to completion (Ctrl-C stops early)
    Run {
        /// Script TOML file; the bundled hotel-booking script when omitted
        #[arg(long)]
        script: Option<PathBuf>,

        /// Engine configuration file applied on top of the layered defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final state as JSON instead of panels
        #[arg(long)]
        json: bool,
    },

    /// Check that a script file loads and validates
    Validate {
        /// Script TOML file
        #[arg(long)]
        script: PathBuf,
    },

    /// Render a single message
    Render {
        /// Message text
        #[arg(long)]
        text: String,

        /// Display mode (english or protocol)
        #[arg(long, default_value = "english")]
        mode: Mode,

        /// Speaking agent (A or B)
        #[arg(long, default_value = "A")]
        agent: AgentId,
    },
}
