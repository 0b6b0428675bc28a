//! Command-line interface module.

mod commands;
mod render;
mod run;
mod validate;

pub use commands::{Cli, Commands};
pub use render::render_text;
pub use run::run_conversation;
pub use validate::validate_script;
