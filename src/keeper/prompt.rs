//! Interactive questions asked in the middle of a command.
//!
//! Several commands need more input after they start: the add-contact
//! details follow-up, the delete-contact confirmation and every note
//! dialog. The API asks through [`Prompter`] so the dialogs run the same
//! way against a terminal and against a scripted list of answers.

use crate::commands::CmdMessage;
use crate::error::Result;

pub trait Prompter {
    /// Shows `question` and returns the answer line without its newline.
    /// Running out of input is an error.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Shows a message in the middle of a dialog, before the next question.
    fn show(&mut self, message: &CmdMessage);
}

#[cfg(any(test, feature = "test_utils"))]
pub use scripted::ScriptedPrompter;

#[cfg(any(test, feature = "test_utils"))]
mod scripted {
    use super::Prompter;
    use crate::commands::CmdMessage;
    use crate::error::{KeeperError, Result};
    use std::collections::VecDeque;
    use std::io;

    /// Answers questions from a fixed list and records what was asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
        pub shown: Vec<CmdMessage>,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
                shown: Vec::new(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        pub fn shown_texts(&self) -> Vec<&str> {
            self.shown.iter().map(|m| m.content.as_str()).collect()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.asked.push(question.to_string());
            self.answers.pop_front().ok_or_else(|| {
                KeeperError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "no scripted answer left",
                ))
            })
        }

        fn show(&mut self, message: &CmdMessage) {
            self.shown.push(message.clone());
        }
    }
}
