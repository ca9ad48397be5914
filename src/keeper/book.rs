//! The address book: contacts keyed by their exact name.
//!
//! Records are kept in insertion order, which is the order "all-contacts"
//! and the birthday query report them in. Lookups are exact and
//! case-sensitive; the only case-insensitive path is [`AddressBook::find_by_email`].

use crate::error::{KeeperError, Result};
use crate::model::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A birthday inside the query window, with the date to congratulate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> Result<()> {
        if self.find(record.name().as_str()).is_some() {
            return Err(KeeperError::DuplicateKey(
                "Record with this name already exists.".into(),
            ));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Record> {
        let email = email.to_lowercase();
        self.records.iter().find(|r| {
            r.email
                .as_ref()
                .is_some_and(|e| e.as_str().to_lowercase() == email)
        })
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.name().as_str() == name)
            .ok_or_else(|| KeeperError::NotFound("Record not found.".into()))?;
        Ok(self.records.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays falling in `[today, today + window_days]`.
    ///
    /// Each birthday is moved to its next occurrence (this year, or next year
    /// when this year's has passed). Occurrences on a weekend are
    /// congratulated on the following Monday; the window check itself uses
    /// the real occurrence. Feb 29 birthdays occur on Feb 28 in common years.
    pub fn upcoming_birthdays(&self, window_days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let end = Duration::try_days(window_days)
            .and_then(|window| today.checked_add_signed(window))
            .unwrap_or(if window_days < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday?.date();
                let mut next = occurrence_in(birthday, today.year());
                if next < today {
                    next = occurrence_in(birthday, today.year() + 1);
                }
                if next > end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: congratulation_date(next),
                })
            })
            .collect()
    }
}

fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birthday)
}

fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl TryFrom<Vec<Record>> for AddressBook {
    type Error = KeeperError;

    fn try_from(records: Vec<Record>) -> Result<Self> {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record)?;
        }
        Ok(book)
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}
