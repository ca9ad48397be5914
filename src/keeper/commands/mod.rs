use crate::book::UpcomingBirthday;
use crate::error::{KeeperError, Result};
use crate::model::{Note, Record};
use std::str::FromStr;

pub mod add_contact;
pub mod add_note;
pub mod birthday;
pub mod change_contact;
pub mod delete_contact;
pub mod delete_note;
pub mod find_notes;
pub mod list;
pub mod show_contact;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    AddContact,
    ChangeContact,
    DeleteContact,
    ShowContact,
    AllContacts,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    AddNote,
    AllNotes,
    FindNotes,
    DeleteNote,
    Help,
    Exit,
}

/// A row of the static command table used for lookup and help output.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub command: Command,
    pub names: &'static [&'static str],
    pub params: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        command: Command::Hello,
        names: &["hello"],
        params: "",
        description: "Greet the assistant.",
    },
    CommandInfo {
        command: Command::AddContact,
        names: &["add-contact"],
        params: "<name> <phone> [address <text>] [email <email>] [birthday <DD.MM.YYYY>]",
        description: "Add a contact, or another phone to an existing one.",
    },
    CommandInfo {
        command: Command::ChangeContact,
        names: &["change-contact"],
        params: "<name> <phone|email|address|birthday> <value>",
        description: "Change a field of an existing contact (phone takes <old> <new>).",
    },
    CommandInfo {
        command: Command::DeleteContact,
        names: &["delete-contact"],
        params: "<name>",
        description: "Delete an existing contact after confirmation.",
    },
    CommandInfo {
        command: Command::ShowContact,
        names: &["show-contact"],
        params: "<name|email>",
        description: "Show a contact found by name or email.",
    },
    CommandInfo {
        command: Command::AllContacts,
        names: &["all-contacts"],
        params: "",
        description: "Display all contacts in the address book.",
    },
    CommandInfo {
        command: Command::AddBirthday,
        names: &["add-birthday"],
        params: "<name> <DD.MM.YYYY>",
        description: "Add a birthday for the given contact.",
    },
    CommandInfo {
        command: Command::ShowBirthday,
        names: &["show-birthday"],
        params: "<name>",
        description: "Show the birthday of the given contact.",
    },
    CommandInfo {
        command: Command::Birthdays,
        names: &["birthdays"],
        params: "<days>",
        description: "Show birthdays within the next given number of days.",
    },
    CommandInfo {
        command: Command::AddNote,
        names: &["add-note"],
        params: "",
        description: "Add a note. Prompts for title, text and tags.",
    },
    CommandInfo {
        command: Command::AllNotes,
        names: &["all-notes"],
        params: "",
        description: "Display all notes in the notebook.",
    },
    CommandInfo {
        command: Command::FindNotes,
        names: &["find-notes"],
        params: "",
        description: "Search notes by title, text or tags, then edit or delete one.",
    },
    CommandInfo {
        command: Command::DeleteNote,
        names: &["delete-note", "delete-note-by-title"],
        params: "",
        description: "Delete a note. Prompts for its title.",
    },
    CommandInfo {
        command: Command::Help,
        names: &["help"],
        params: "",
        description: "Show this help message.",
    },
    CommandInfo {
        command: Command::Exit,
        names: &["close", "exit"],
        params: "",
        description: "Save and exit the assistant.",
    },
];

impl Command {
    pub fn info(&self) -> &'static CommandInfo {
        COMMANDS
            .iter()
            .find(|info| info.command == *self)
            .expect("every command has a table entry")
    }
}

impl FromStr for Command {
    type Err = KeeperError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        COMMANDS
            .iter()
            .find(|info| info.names.contains(&name.as_str()))
            .map(|info| info.command)
            .ok_or_else(|| KeeperError::InvalidArgument("Invalid command.".into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI: messages plus any records, notes
/// or birthdays to display. Messages are shown first.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed_records: Vec<Record>,
    pub listed_notes: Vec<Note>,
    pub upcoming_birthdays: Vec<UpcomingBirthday>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_upcoming_birthdays(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming_birthdays = upcoming;
        self
    }

    /// Message texts in order; handy for assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

/// Joins name tokens back into the single-spaced form used as a key.
pub(crate) fn join_name<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
