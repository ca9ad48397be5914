//! The pieces of the `find-notes` dialog that do not need a terminal:
//! searching, listing the hits, reading the follow-up choice, and applying
//! an edit. The dialog itself is driven from the API layer.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};
use crate::model::Note;
use crate::notebook::{NoteBook, SearchField};

/// What to do with one of the search hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteAction {
    Edit,
    Delete,
    Skip,
}

impl NoteAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "edit" => Some(NoteAction::Edit),
            "delete" => Some(NoteAction::Delete),
            "skip" => Some(NoteAction::Skip),
            _ => None,
        }
    }
}

pub fn search(notebook: &NoteBook, term: &str, field: &str) -> Result<Vec<Note>> {
    let term = term.trim();
    if term.is_empty() {
        return Err(KeeperError::EmptyValue("Search term cannot be empty.".into()));
    }
    let field: SearchField = field.parse()?;
    Ok(notebook.find(term, field).into_iter().cloned().collect())
}

/// Numbered listing of the hits, shown before asking for an action.
pub fn listing(results: &[Note]) -> String {
    let plural = if results.len() == 1 { "" } else { "s" };
    let mut out = format!("Found {} matching note{}:\n", results.len(), plural);
    for (i, note) in results.iter().enumerate() {
        out.push_str(&format!("\n{}. {}\n", i + 1, note));
    }
    out
}

/// Turns the user's 1-based choice into a 0-based index, or `None` when it
/// is not a number in range.
pub fn select(count: usize, input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Replaces `old_title` with a note built from the new values. The old note
/// stays untouched when the new values do not validate.
pub fn edit(notebook: &mut NoteBook, old_title: &str, title: &str, text: &str, tags: &str) -> CmdResult {
    let outcome = Note::parse(title, text, tags).and_then(|note| notebook.replace(old_title, note));
    match outcome {
        Ok(_) => CmdResult::default().with_message(CmdMessage::success("Note edited successfully.")),
        Err(e) => CmdResult::default().with_message(CmdMessage::error(format!(
            "Failed to edit note: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> NoteBook {
        let mut nb = NoteBook::new();
        nb.add_note(Note::parse("Taxes", "File before April", "urgent").unwrap())
            .unwrap();
        nb.add_note(Note::parse("Groceries", "milk", "home").unwrap())
            .unwrap();
        nb
    }

    #[test]
    fn search_validates_inputs() {
        let nb = notebook();
        assert!(matches!(
            search(&nb, " ", "all"),
            Err(KeeperError::EmptyValue(_))
        ));
        assert!(matches!(
            search(&nb, "milk", "body"),
            Err(KeeperError::InvalidArgument(_))
        ));
        assert_eq!(search(&nb, "MILK", "text").unwrap().len(), 1);
    }

    #[test]
    fn listing_numbers_results() {
        let nb = notebook();
        let hits = search(&nb, "es", "title").unwrap();
        let text = listing(&hits);
        assert!(text.starts_with("Found 2 matching notes:"));
        assert!(text.contains("1. Title: Taxes"));
        assert!(text.contains("2. Title: Groceries"));

        let single = listing(&hits[..1]);
        assert!(single.starts_with("Found 1 matching note:"));
    }

    #[test]
    fn selection_bounds() {
        assert_eq!(select(2, "1"), Some(0));
        assert_eq!(select(2, " 2 "), Some(1));
        assert_eq!(select(2, "0"), None);
        assert_eq!(select(2, "3"), None);
        assert_eq!(select(2, "two"), None);
    }

    #[test]
    fn action_parsing() {
        assert_eq!(NoteAction::parse("EDIT"), Some(NoteAction::Edit));
        assert_eq!(NoteAction::parse("remove"), None);
    }

    #[test]
    fn edit_renames_note() {
        let mut nb = notebook();
        let result = edit(&mut nb, "Taxes", "Tax return", "Filed", "done");
        assert_eq!(result.texts(), vec!["Note edited successfully."]);
        assert!(nb.get("Taxes").is_none());
        assert_eq!(nb.get("Tax return").unwrap().text.as_str(), "Filed");
    }

    #[test]
    fn failed_edit_keeps_original() {
        let mut nb = notebook();
        let result = edit(&mut nb, "Taxes", "Groceries", "clash", "");
        assert_eq!(
            result.texts(),
            vec!["Failed to edit note: Note with this title already exists."]
        );
        let result = edit(&mut nb, "Taxes", "Taxes", " ", "");
        assert_eq!(result.texts(), vec!["Failed to edit note: Text cannot be empty."]);
        assert_eq!(nb.get("Taxes").unwrap().text.as_str(), "File before April");
    }
}
