//! # Keeper CLI
//!
//! The binary only invokes `cli::run()` and handles process termination.
//! Everything else lives in the library; `src/keeper/cli/` turns terminal
//! input into API calls and `CmdResult`s into terminal output.
//!
//! Running `keeper` with no arguments starts the interactive loop. Anything
//! after the options is run as a single command:
//!
//! ```text
//! keeper --data-dir ~/contacts show-contact Jane Doe
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
