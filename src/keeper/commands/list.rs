use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::notebook::NoteBook;

pub fn contacts(book: &AddressBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("The address book is empty."));
    }
    CmdResult::default()
        .with_message(CmdMessage::info("All contacts:"))
        .with_listed_records(book.iter().cloned().collect())
}

pub fn notes(notebook: &NoteBook) -> CmdResult {
    if notebook.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("The notebook is empty."));
    }
    CmdResult::default()
        .with_message(CmdMessage::info("All notes:"))
        .with_listed_notes(notebook.iter().cloned().collect())
}
