//! # Storage Layer
//!
//! The address book and the notebook are loaded whole when a session starts
//! and written back whole when it ends. [`DataStore`] is the seam between
//! that lifecycle and the actual storage:
//!
//! - [`fs::FileStore`]: JSON files in the data directory
//! - [`memory::InMemoryStore`]: snapshots held in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── addressbook.json   # JSON array of contacts, in insertion order
//! ├── notebook.json      # JSON array of notes, in insertion order
//! └── config.json        # Optional settings (file names, prompt)
//! ```
//!
//! Field values are stored as their display strings and validated again on
//! load, so a hand-edited file with a bad phone number or a repeated name is
//! rejected rather than loaded into a state the API could never produce.
//!
//! A missing file is an empty collection. The only contract stores must
//! honour is that loading what was saved yields an equal collection.

use crate::book::AddressBook;
use crate::error::Result;
use crate::notebook::NoteBook;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the address book, or an empty one if nothing was saved yet
    fn load_contacts(&self) -> Result<AddressBook>;

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the notebook, or an empty one if nothing was saved yet
    fn load_notes(&self) -> Result<NoteBook>;

    fn save_notes(&mut self, notebook: &NoteBook) -> Result<()>;
}
