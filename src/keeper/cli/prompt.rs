use super::render::render_message;
use super::styles::PROMPT;
use console::Term;
use keeper::commands::CmdMessage;
use keeper::error::{KeeperError, Result};
use keeper::prompt::Prompter;
use std::io::{self, BufRead};
use std::sync::{Arc, Mutex};

/// Terminal side of the API's dialogs. Prompts go to stdout through
/// `console::Term`; answers are read from stdin line by line, so end of
/// input can be told apart from an empty answer.
pub struct TermPrompter {
    term: Term,
    current: Arc<Mutex<String>>,
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self {
            term: Term::stdout(),
            current: Arc::new(Mutex::new(String::new())),
        }
    }
}

impl TermPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The prompt most recently shown, shared with the Ctrl-C handler so it
    /// can repeat whatever question is open.
    pub fn current_prompt(&self) -> Arc<Mutex<String>> {
        Arc::clone(&self.current)
    }

    fn remember(&self, prompt: &str) {
        if let Ok(mut current) = self.current.lock() {
            current.clear();
            current.push_str(prompt);
        }
    }

    /// Shows `prompt` and reads one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.remember(prompt);
        self.term
            .write_str(&PROMPT.apply_to(prompt).to_string())
            .map_err(KeeperError::Io)?;
        self.term.flush().map_err(KeeperError::Io)?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(KeeperError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.read_line(question)?.ok_or_else(|| {
            KeeperError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended in the middle of a command",
            ))
        })
    }

    fn show(&mut self, message: &CmdMessage) {
        // A failed write to stdout will surface on the next prompt.
        let _ = self.term.write_line(&render_message(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_prompt_follows_the_open_question() {
        let prompter = TermPrompter::default();
        let shared = prompter.current_prompt();
        assert_eq!(*shared.lock().unwrap(), "");

        prompter.remember("Enter a command: ");
        prompter.remember("Enter the title of the note to delete: ");
        assert_eq!(
            *shared.lock().unwrap(),
            "Enter the title of the note to delete: "
        );
    }
}
