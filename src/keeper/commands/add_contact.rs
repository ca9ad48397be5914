//! `add-contact <name...> <phone> [address <words...>] [email <value>] [birthday <value>]`
//!
//! Without an explicit `phone` section, the last bare token before the first
//! keyword is the phone and everything before it is the name. All fields are
//! validated before the address book is touched, so a bad phone or email
//! never leaves a half-created contact behind.

use crate::book::AddressBook;
use crate::commands::{join_name, CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};
use crate::fields::{Address, Birthday, Email, Name, Phone};
use crate::model::Record;
use crate::parse::{FieldKey, KeywordArgs};

/// The optional contact fields, already validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub address: Option<Address>,
    pub email: Option<Email>,
    pub birthday: Option<Birthday>,
}

impl ContactDetails {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.email.is_none() && self.birthday.is_none()
    }

    fn from_args(parsed: &KeywordArgs<'_>) -> Result<Self> {
        let value = |key: FieldKey| -> Result<Option<String>> {
            match parsed.value(key) {
                Some(v) if v.trim().is_empty() => Err(KeeperError::InvalidArgument(format!(
                    "New value for {} is required.",
                    key
                ))),
                other => Ok(other),
            }
        };

        Ok(Self {
            address: value(FieldKey::Address)?
                .map(|v| Address::parse(&v))
                .transpose()?,
            email: value(FieldKey::Email)?
                .map(|v| Email::parse(&v))
                .transpose()?,
            birthday: value(FieldKey::Birthday)?
                .map(|v| Birthday::parse(&v))
                .transpose()?,
        })
    }

    fn apply(self, record: &mut Record) {
        if let Some(address) = self.address {
            record.address = Some(address);
        }
        if let Some(email) = self.email {
            record.email = Some(email);
        }
        if let Some(birthday) = self.birthday {
            record.birthday = Some(birthday);
        }
    }
}

/// A fully validated add-contact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Name,
    pub phone: Phone,
    pub details: ContactDetails,
}

impl ContactDraft {
    /// True when the user gave no address, email or birthday, which is when
    /// the UI offers to collect them.
    pub fn wants_details(&self) -> bool {
        self.details.is_empty()
    }
}

fn missing_arguments() -> KeeperError {
    KeeperError::InvalidArgument("Error: Invalid command. Try again with correct data.".into())
}

pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<ContactDraft> {
    let parsed = KeywordArgs::parse(args);

    let (name_tokens, phone) = match parsed.value(FieldKey::Phone) {
        Some(phone) => (parsed.head.as_slice(), phone),
        None => match parsed.head.split_last() {
            Some((phone, name)) => (name, phone.to_string()),
            None => return Err(missing_arguments()),
        },
    };

    let name = join_name(name_tokens);
    if name.is_empty() || phone.is_empty() {
        return Err(missing_arguments());
    }

    Ok(ContactDraft {
        name: Name::parse(&name)?,
        phone: Phone::parse(&phone)?,
        details: ContactDetails::from_args(&parsed)?,
    })
}

pub fn run(book: &mut AddressBook, draft: ContactDraft) -> Result<CmdResult> {
    let ContactDraft {
        name,
        phone,
        details,
    } = draft;

    if let Some(record) = book.find_mut(name.as_str()) {
        record.push_phone(phone)?;
        details.apply(record);
        return Ok(CmdResult::default().with_message(CmdMessage::success("Contact updated.")));
    }

    let mut record = Record::new(name);
    record.push_phone(phone)?;
    details.apply(&mut record);
    book.add_record(record)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Contact added.")))
}

/// Parses the follow-up details line (`email x birthday y address z`).
/// Bare words outside a section are rejected.
pub fn parse_details<S: AsRef<str>>(tokens: &[S]) -> Result<ContactDetails> {
    let parsed = KeywordArgs::parse(tokens);
    if !parsed.head.is_empty() || parsed.has(FieldKey::Phone) {
        return Err(KeeperError::InvalidArgument(
            "Invalid command in the additional details. \
             The contact has been added without additional information."
                .into(),
        ));
    }
    ContactDetails::from_args(&parsed)
}

pub fn add_details(book: &mut AddressBook, name: &str, details: ContactDetails) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| KeeperError::NotFound("Contact not found.".into()))?;
    if details.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No details added.")));
    }
    details.apply(record);
    Ok(CmdResult::default().with_message(CmdMessage::success("Details added.")))
}
