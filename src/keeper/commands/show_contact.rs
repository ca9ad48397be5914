use crate::book::AddressBook;
use crate::commands::{join_name, CmdResult};
use crate::error::{KeeperError, Result};

/// Looks a contact up by exact name, falling back to a case-insensitive
/// email match.
pub fn run<S: AsRef<str>>(book: &AddressBook, args: &[S]) -> Result<CmdResult> {
    let query = join_name(args);
    let record = book
        .find(&query)
        .or_else(|| book.find_by_email(&query))
        .ok_or_else(|| KeeperError::NotFound("Contact not found.".into()))?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}
