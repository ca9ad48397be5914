//! # Field Validators
//!
//! Every value stored on a contact or a note goes through one of these types.
//! Construction is the only validation point: once a `Phone` exists it holds
//! exactly ten ASCII digits, once a `Birthday` exists it is a real date, and
//! so on. The rest of the crate never re-checks field shapes.
//!
//! All constructors are pure functions of a single `&str`. They fail with:
//! - [`KeeperError::InvalidFormat`] for shape violations (phone, birthday, email, address)
//! - [`KeeperError::EmptyValue`] for blank note titles and texts
//! - [`KeeperError::InvalidArgument`] for a blank contact name
//!
//! On disk each field is stored as its display string and goes back through
//! the same constructor when loaded (`#[serde(try_from = "String")]`).

use crate::error::{KeeperError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_LEN: usize = 10;
pub const ADDRESS_MAX_LEN: usize = 100;
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("valid email pattern")
});

static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday pattern"));

/// Shared plumbing for the string-backed fields: display, borrowing, and the
/// serde conversions that route loads back through `parse`.
macro_rules! string_field {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = KeeperError;

            fn try_from(value: String) -> Result<Self> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.0
            }
        }
    };
}

/// A contact's full name. The first whitespace-separated token is the first
/// name, everything after it the family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(KeeperError::InvalidArgument(
                "Contact name is required.".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn first_name(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or_default()
    }

    pub fn family_name(&self) -> &str {
        match self.0.split_once(char::is_whitespace) {
            Some((_, rest)) => rest.trim_start(),
            None => "",
        }
    }
}

string_field!(Name);

/// Exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != PHONE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeeperError::InvalidFormat(
                "Invalid phone number. It must contain exactly 10 digits.".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }
}

string_field!(Phone);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY`. Both the two-digit day/month shape and the
    /// calendar date are checked, so `30.02.2000` and `1.2.2000` both fail.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || KeeperError::InvalidFormat("Invalid date format. Use DD.MM.YYYY".into());
        if !BIRTHDAY_RE.is_match(value) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = KeeperError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> String {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self> {
        if !EMAIL_RE.is_match(value) {
            return Err(KeeperError::InvalidFormat("Invalid email format.".into()));
        }
        Ok(Self(value.to_string()))
    }
}

string_field!(Email);

/// Free-form postal address, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.chars().count() > ADDRESS_MAX_LEN {
            return Err(KeeperError::InvalidFormat(
                "Invalid address. Must be up to 100 characters.".into(),
            ));
        }
        Ok(Self(value.to_string()))
    }
}

string_field!(Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(KeeperError::EmptyValue("Title cannot be empty.".into()));
        }
        Ok(Self(value.to_string()))
    }
}

string_field!(Title);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Text(String);

impl Text {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(KeeperError::EmptyValue("Text cannot be empty.".into()));
        }
        Ok(Self(value.to_string()))
    }
}

string_field!(Text);

/// Ordered note tags. Parsing never fails: blank pieces are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn parse(value: &str) -> Self {
        Self(
            value
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Self::parse(&tags.join(","))
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::parse("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn phone_rejects_wrong_shapes() {
        for input in ["", "050123456", "05012345678", "050123456a", "050 123 45", "٠٥٠١٢٣٤٥٦٧"] {
            assert!(
                matches!(Phone::parse(input), Err(KeeperError::InvalidFormat(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn birthday_round_trips_display() {
        for input in ["01.01.2000", "29.02.2024", "31.12.1999"] {
            assert_eq!(Birthday::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn birthday_rejects_impossible_and_malformed_dates() {
        for input in ["30.02.2000", "29.02.2023", "1.2.2000", "2000-01-01", "01.13.2000", ""] {
            assert!(
                matches!(Birthday::parse(input), Err(KeeperError::InvalidFormat(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn email_shapes() {
        assert!(Email::parse("jane.doe+work@example.co.uk").is_ok());
        assert!(Email::parse("jane@example").is_err());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("jane doe@example.com").is_err());
    }

    #[test]
    fn address_is_trimmed_and_bounded() {
        let address = Address::parse("  12 Main St  ").unwrap();
        assert_eq!(address.as_str(), "12 Main St");

        let padded = format!("  {}  ", "a".repeat(ADDRESS_MAX_LEN));
        assert!(Address::parse(&padded).is_ok());
        assert!(Address::parse(&"a".repeat(ADDRESS_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn name_splits_first_and_family() {
        let name = Name::parse("Jane  van Doe").unwrap();
        assert_eq!(name.first_name(), "Jane");
        assert_eq!(name.family_name(), "van Doe");

        let single = Name::parse("Cher").unwrap();
        assert_eq!(single.family_name(), "");
        assert!(matches!(
            Name::parse("   "),
            Err(KeeperError::InvalidArgument(_))
        ));
    }

    #[test]
    fn note_text_fields_reject_blank() {
        assert!(matches!(Title::parse(" "), Err(KeeperError::EmptyValue(_))));
        assert!(matches!(Text::parse(""), Err(KeeperError::EmptyValue(_))));
        assert_eq!(Title::parse(" Groceries ").unwrap().as_str(), "Groceries");
    }

    #[test]
    fn tags_drop_blank_pieces() {
        let tags = Tags::parse(" work, ,urgent ,, home");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["work", "urgent", "home"]);
        assert_eq!(tags.to_string(), "work, urgent, home");
        assert!(Tags::parse(" , ").is_empty());
    }

    #[test]
    fn invalid_field_fails_to_deserialize() {
        let result: std::result::Result<Phone, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
        let phone: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }
}
