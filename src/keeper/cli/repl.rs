use super::commands::{execute_line, AppContext, Flow};
use super::prompt::TermPrompter;
use super::render::print_messages;
use super::styles::PROMPT;
use keeper::commands::CmdMessage;
use keeper::error::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

const WELCOME: &str = "Welcome to the assistant bot!";
const INTERRUPT_REMINDER: &str = "Use 'close' or 'exit' to quit.";

/// Reads and runs commands until `close`/`exit` or end of input.
pub(super) fn run_loop(ctx: &mut AppContext) -> Result<()> {
    let prompt = ctx.config.prompt.clone();
    let mut input = TermPrompter::new();
    install_interrupt_handler(input.current_prompt());

    println!("{}", WELCOME);

    loop {
        let line = match input.read_line(&prompt)? {
            Some(line) => line,
            None => {
                debug!("end of input");
                println!();
                print_messages(&[CmdMessage::info("Good bye!")]);
                break;
            }
        };

        if execute_line(ctx, &line, &mut input)? == Flow::Stop {
            break;
        }
    }
    Ok(())
}

/// Ctrl-C never ends the session; it reminds the user how to leave and
/// repeats the prompt that is waiting for input, nested questions included.
fn install_interrupt_handler(current: Arc<Mutex<String>>) {
    let handler = move || {
        let prompt = current.lock().map(|p| p.clone()).unwrap_or_default();
        let mut stdout = std::io::stdout();
        let _ = write!(
            stdout,
            "\n{}\n{}",
            INTERRUPT_REMINDER,
            PROMPT.apply_to(&prompt)
        );
        let _ = stdout.flush();
    };
    if let Err(e) = ctrlc::set_handler(handler) {
        warn!(error = %e, "could not install the Ctrl-C handler");
    }
}
