use crate::error::{KeeperError, Result};
use crate::model::Note;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notes keyed by title, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Note>", into = "Vec<Note>")]
pub struct NoteBook {
    notes: Vec<Note>,
}

/// Which part of a note a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Text,
    Tags,
    All,
}

impl FromStr for SearchField {
    type Err = KeeperError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "text" => Ok(SearchField::Text),
            "tags" => Ok(SearchField::Tags),
            "all" => Ok(SearchField::All),
            _ => Err(KeeperError::InvalidArgument(
                "Invalid search option. Choose from 'title', 'text', 'tags', or 'all'.".into(),
            )),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchField::Title => "title",
            SearchField::Text => "text",
            SearchField::Tags => "tags",
            SearchField::All => "all",
        };
        f.write_str(name)
    }
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(&mut self, note: Note) -> Result<()> {
        if self.get(note.title().as_str()).is_some() {
            return Err(KeeperError::DuplicateKey(
                "Note with this title already exists.".into(),
            ));
        }
        self.notes.push(note);
        Ok(())
    }

    pub fn get(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.title().as_str() == title)
    }

    pub fn delete_by_title(&mut self, title: &str) -> Result<Note> {
        let pos = self
            .position_of(title)
            .ok_or_else(|| KeeperError::NotFound(format!("Note '{}' not found.", title)))?;
        Ok(self.notes.remove(pos))
    }

    /// Swaps the note stored under `old_title` for `note`, keeping its
    /// position. The new title may differ from the old one but must not
    /// belong to another note.
    pub fn replace(&mut self, old_title: &str, note: Note) -> Result<Note> {
        let pos = self
            .position_of(old_title)
            .ok_or_else(|| KeeperError::NotFound(format!("Note '{}' not found.", old_title)))?;
        if let Some(other) = self.position_of(note.title().as_str()) {
            if other != pos {
                return Err(KeeperError::DuplicateKey(
                    "Note with this title already exists.".into(),
                ));
            }
        }
        Ok(std::mem::replace(&mut self.notes[pos], note))
    }

    /// Case-insensitive substring search over one field, or over title,
    /// text and every tag for [`SearchField::All`].
    pub fn find(&self, term: &str, field: SearchField) -> Vec<&Note> {
        let term = term.to_lowercase();
        let hit = |value: &str| value.to_lowercase().contains(&term);

        self.notes
            .iter()
            .filter(|note| {
                let in_title = || hit(note.title().as_str());
                let in_text = || hit(note.text.as_str());
                let in_tags = || note.tags.iter().any(hit);
                match field {
                    SearchField::Title => in_title(),
                    SearchField::Text => in_text(),
                    SearchField::Tags => in_tags(),
                    SearchField::All => in_title() || in_text() || in_tags(),
                }
            })
            .collect()
    }

    /// [`NoteBook::find`] with the field given as user text.
    pub fn find_notes(&self, term: &str, field: &str) -> Result<Vec<&Note>> {
        Ok(self.find(term, field.parse()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position_of(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.title().as_str() == title)
    }
}

impl TryFrom<Vec<Note>> for NoteBook {
    type Error = KeeperError;

    fn try_from(notes: Vec<Note>) -> Result<Self> {
        let mut notebook = NoteBook::new();
        for note in notes {
            notebook.add_note(note)?;
        }
        Ok(notebook)
    }
}

impl From<NoteBook> for Vec<Note> {
    fn from(notebook: NoteBook) -> Self {
        notebook.notes
    }
}
