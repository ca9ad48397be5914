use crate::error::{KeeperError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "addressbook.json";
const DEFAULT_NOTES_FILE: &str = "notebook.json";
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for keeper, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeeperConfig {
    /// File name of the saved address book, relative to the data dir
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// File name of the saved notebook, relative to the data dir
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Text shown before each command in the interactive loop
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            prompt: default_prompt(),
        }
    }
}

impl KeeperConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KeeperError::Io)?;
        let config: KeeperConfig = serde_json::from_str(&content).map_err(|e| {
            KeeperError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.contacts_file.trim().is_empty() || self.notes_file.trim().is_empty() {
            return Err(KeeperError::Config("data file names cannot be empty".into()));
        }
        if self.contacts_file == self.notes_file {
            return Err(KeeperError::Config(
                "contacts_file and notes_file must differ".into(),
            ));
        }
        Ok(())
    }
}
