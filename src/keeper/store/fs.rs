use super::DataStore;
use crate::book::AddressBook;
use crate::config::KeeperConfig;
use crate::error::{KeeperError, Result};
use crate::notebook::NoteBook;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, &KeeperConfig::default())
    }

    pub fn with_config(root: PathBuf, config: &KeeperConfig) -> Self {
        Self {
            root,
            contacts_file: config.contacts_file.clone(),
            notes_file: config.notes_file.clone(),
        }
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KeeperError::Io)?;
        }
        Ok(())
    }

    fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
        if !path.exists() {
            debug!(path = %path.display(), "no saved data, starting empty");
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(KeeperError::Io)?;
        let value = serde_json::from_str(&content).map_err(KeeperError::Serialization)?;
        debug!(path = %path.display(), "loaded");
        Ok(value)
    }

    /// Writes through a temp file and a rename so an interrupted save never
    /// leaves a truncated collection behind.
    fn save_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(KeeperError::Serialization)?;
        let tmp = self.root.join(format!(".keeper-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(KeeperError::Io)?;
        fs::rename(&tmp, path).map_err(KeeperError::Io)?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Self::load_json(&self.contacts_path())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.save_json(&self.contacts_path(), book)
    }

    fn load_notes(&self) -> Result<NoteBook> {
        Self::load_json(&self.notes_path())
    }

    fn save_notes(&mut self, notebook: &NoteBook) -> Result<()> {
        self.save_json(&self.notes_path(), notebook)
    }
}
