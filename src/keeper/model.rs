use crate::error::{KeeperError, Result};
use crate::fields::{Address, Birthday, Email, Name, Phone, Tags, Text, Title};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact. The name is the record's identity and never changes; the
/// remaining fields are edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Appends a phone. A number already on the record is rejected.
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        let phone = Phone::parse(phone)?;
        self.push_phone(phone)
    }

    pub fn push_phone(&mut self, phone: Phone) -> Result<()> {
        if self.phones.contains(&phone) {
            return Err(KeeperError::DuplicateKey(format!(
                "Phone {} already exists for {}.",
                phone, self.name
            )));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn delete_phone(&mut self, phone: &str) -> Result<Phone> {
        let pos = self
            .position_of(phone)
            .ok_or_else(|| KeeperError::NotFound("Phone not found.".into()))?;
        Ok(self.phones.remove(pos))
    }

    /// Replaces the first phone equal to `old`. The new number is validated
    /// before anything changes.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position_of(old)
            .ok_or_else(|| KeeperError::NotFound("Phone not found.".into()))?;
        let new = Phone::parse(new)?;
        if self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && *p == new)
        {
            return Err(KeeperError::DuplicateKey(format!(
                "Phone {} already exists for {}.",
                new, self.name
            )));
        }
        self.phones[pos] = new;
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn add_birthday(&mut self, birthday: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    pub fn add_email(&mut self, email: &str) -> Result<()> {
        self.email = Some(Email::parse(email)?);
        Ok(())
    }

    pub fn add_address(&mut self, address: &str) -> Result<()> {
        self.address = Some(Address::parse(address)?);
        Ok(())
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}", self.name.first_name())?;
        let family = self.name.family_name();
        if !family.is_empty() {
            write!(f, " {}", family)?;
        }
        write!(f, ", phones: {}, ", phones.join("; "))?;
        match &self.birthday {
            Some(b) => write!(f, "birthday: {}, ", b)?,
            None => write!(f, "birthday: not set, ")?,
        }
        match &self.email {
            Some(e) => write!(f, "email: {}, ", e)?,
            None => write!(f, "email: not provided, ")?,
        }
        match &self.address {
            Some(a) => write!(f, "address: {}", a),
            None => write!(f, "address: not provided"),
        }
    }
}

/// A titled note with optional tags. The title is the note's identity;
/// renaming goes through `NoteBook::replace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: Title,
    pub text: Text,
    #[serde(default)]
    pub tags: Tags,
}

impl Note {
    pub fn new(title: Title, text: Text, tags: Tags) -> Self {
        Self { title, text, tags }
    }

    /// Validates raw user input into a note.
    pub fn parse(title: &str, text: &str, tags: &str) -> Result<Self> {
        Ok(Self::new(Title::parse(title)?, Text::parse(text)?, Tags::parse(tags)))
    }

    pub fn title(&self) -> &Title {
        &self.title
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Text: {}", self.text)?;
        if self.tags.is_empty() {
            write!(f, "Tags: No tags")
        } else {
            write!(f, "Tags: {}", self.tags)
        }
    }
}
