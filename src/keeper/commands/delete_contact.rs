use crate::book::AddressBook;
use crate::commands::{join_name, CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};

/// The user's answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Invalid,
}

impl Confirmation {
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "yes" => Confirmation::Yes,
            "no" => Confirmation::No,
            _ => Confirmation::Invalid,
        }
    }
}

/// Resolves the contact named by `args`, before asking for confirmation.
pub fn target<S: AsRef<str>>(book: &AddressBook, args: &[S]) -> Result<String> {
    if args.is_empty() {
        return Err(KeeperError::InvalidArgument(
            "Please provide the name of the contact to delete.".into(),
        ));
    }
    let name = join_name(args);
    match book.find(&name) {
        Some(_) => Ok(name),
        None => Err(KeeperError::NotFound(format!(
            "Contact '{}' not found.",
            name
        ))),
    }
}

pub fn confirmation_prompt(name: &str) -> String {
    format!("Are you sure you want to delete '{}'? (yes/no): ", name)
}

pub fn run(book: &mut AddressBook, name: &str, confirmation: Confirmation) -> Result<CmdResult> {
    let message = match confirmation {
        Confirmation::Yes => {
            book.delete(name)?;
            CmdMessage::success(format!("Contact '{}' has been deleted.", name))
        }
        Confirmation::No => CmdMessage::info(format!("Contact '{}' was not deleted.", name)),
        Confirmation::Invalid => CmdMessage::warning("Invalid input. Please enter 'yes' or 'no'."),
    };
    Ok(CmdResult::default().with_message(message))
}
