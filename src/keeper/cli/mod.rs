//! # CLI Layer
//!
//! This is **one possible UI client** for keeper. It is the only place that
//! knows about stdin/stdout, colours, signals and exit codes.
//!
//! ## Structure
//!
//! - `setup.rs`: clap arguments and data directory resolution
//! - `commands.rs`: `run()`, logging and context setup, one-shot commands
//! - `repl.rs`: the interactive loop
//! - `prompt.rs`: `TermPrompter`, the terminal side of the API's dialogs
//! - `render.rs`: `CmdResult` and help output
//! - `styles.rs`: shared terminal styles

mod commands;
mod prompt;
mod render;
mod repl;
pub mod setup;
mod styles;

pub use commands::run;
