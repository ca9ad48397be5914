use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use crate::notebook::NoteBook;

/// Keeps the last saved snapshot of each collection in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: AddressBook,
    notes: NoteBook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds saved collections.
    pub fn with_data(contacts: AddressBook, notes: NoteBook) -> Self {
        Self {
            contacts,
            notes,
            saves: 0,
        }
    }

    /// How many times either collection was saved.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.contacts = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteBook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notebook: &NoteBook) -> Result<()> {
        self.notes = notebook.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Name;
    use crate::model::Record;

    #[test]
    fn returns_last_saved_snapshot() {
        let mut store = InMemoryStore::new();
        assert!(store.load_contacts().unwrap().is_empty());

        let mut book = AddressBook::new();
        book.add_record(Record::new(Name::parse("Jane").unwrap()))
            .unwrap();
        store.save_contacts(&book).unwrap();

        book.delete("Jane").unwrap();
        assert!(store.load_contacts().unwrap().find("Jane").is_some());
        assert_eq!(store.save_count(), 1);
    }
}
