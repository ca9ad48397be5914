use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::notebook::NoteBook;

pub fn run(notebook: &mut NoteBook, note: Note) -> Result<CmdResult> {
    let title = note.title().to_string();
    notebook.add_note(note)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note '{}' added successfully!",
        title
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeeperError;

    #[test]
    fn adds_note() {
        let mut notebook = NoteBook::new();
        let note = Note::parse("Groceries", "milk", "home, weekly").unwrap();
        let result = run(&mut notebook, note).unwrap();
        assert_eq!(result.texts(), vec!["Note 'Groceries' added successfully!"]);
        assert_eq!(notebook.get("Groceries").unwrap().tags.len(), 2);
    }

    #[test]
    fn rejects_duplicate_title() {
        let mut notebook = NoteBook::new();
        run(&mut notebook, Note::parse("A", "one", "").unwrap()).unwrap();
        let err = run(&mut notebook, Note::parse("A", "two", "").unwrap()).unwrap_err();
        assert!(matches!(err, KeeperError::DuplicateKey(_)));
        assert_eq!(notebook.get("A").unwrap().text.as_str(), "one");
    }
}
