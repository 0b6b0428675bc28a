//! Gibberlink CLI binary.
//!
//! - Play a conversation script in the terminal
//! - Validate script files
//! - Render a single message in either mode

use clap::Parser;
use gibberlink::telemetry::init_console_telemetry;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, render_text, run_conversation, validate_script};

    let cli = Cli::parse();
    init_console_telemetry(cli.verbose);

    match cli.command {
        Commands::Run {
            script,
            config,
            json,
        } => {
            run_conversation(script.as_deref(), config.as_deref(), json).await?;
        }

        Commands::Validate { script } => {
            validate_script(&script)?;
        }

        Commands::Render { text, mode, agent } => {
            render_text(&text, mode, agent)?;
        }
    }

    Ok(())
}
