//! Birthday commands: `add-birthday`, `show-birthday` and the `birthdays`
//! window query.

use crate::book::AddressBook;
use crate::commands::{join_name, CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};
use chrono::NaiveDate;

/// `add-birthday <name...> <DD.MM.YYYY>`: the last token is the date.
pub fn add<S: AsRef<str>>(book: &mut AddressBook, args: &[S]) -> Result<CmdResult> {
    let (birthday, name) = match args.split_last() {
        Some((birthday, name)) if !name.is_empty() => (birthday.as_ref(), join_name(name)),
        _ => {
            return Err(KeeperError::InvalidArgument(
                "Invalid number of arguments.".into(),
            ))
        }
    };

    let record = book
        .find_mut(&name)
        .ok_or_else(|| KeeperError::NotFound("Contact not found.".into()))?;
    record.add_birthday(birthday)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Birthday added.")))
}

pub fn show<S: AsRef<str>>(book: &AddressBook, args: &[S]) -> Result<CmdResult> {
    let name = join_name(args);
    let record = book
        .find(&name)
        .ok_or_else(|| KeeperError::NotFound("Contact not found.".into()))?;
    let message = match &record.birthday {
        Some(birthday) => CmdMessage::info(birthday.to_string()),
        None => CmdMessage::info("No birthday set"),
    };
    Ok(CmdResult::default().with_message(message))
}

/// `birthdays <days>` relative to `today`.
pub fn upcoming<S: AsRef<str>>(
    book: &AddressBook,
    args: &[S],
    today: NaiveDate,
) -> Result<CmdResult> {
    let days = args.first().map(|s| s.as_ref()).ok_or_else(|| {
        KeeperError::InvalidArgument(
            "Please provide the number of days (e.g., 'birthdays 8').".into(),
        )
    })?;
    let days: i64 = days.parse().map_err(|_| {
        KeeperError::InvalidArgument("Invalid input. Please provide a valid number of days.".into())
    })?;

    let upcoming = book.upcoming_birthdays(days, today);
    if upcoming.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No upcoming birthdays.")));
    }
    Ok(CmdResult::default().with_upcoming_birthdays(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Name;
    use crate::model::Record;

    fn book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(Record::new(Name::parse("Jane Doe").unwrap()))
            .unwrap();
        book
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, day).unwrap()
    }

    #[test]
    fn add_and_show() {
        let mut book = book();
        let shown = show(&book, &["Jane", "Doe"]).unwrap();
        assert_eq!(shown.texts(), vec!["No birthday set"]);

        add(&mut book, &["Jane", "Doe", "10.06.1990"]).unwrap();
        let shown = show(&book, &["Jane", "Doe"]).unwrap();
        assert_eq!(shown.texts(), vec!["10.06.1990"]);
    }

    #[test]
    fn add_errors() {
        let mut book = book();
        assert!(matches!(
            add(&mut book, &["10.06.1990"]),
            Err(KeeperError::InvalidArgument(_))
        ));
        assert!(matches!(
            add(&mut book, &["John", "10.06.1990"]),
            Err(KeeperError::NotFound(_))
        ));
        assert!(matches!(
            add(&mut book, &["Jane", "Doe", "1990-06-10"]),
            Err(KeeperError::InvalidFormat(_))
        ));
    }

    #[test]
    fn show_unknown_contact() {
        assert!(matches!(
            show(&book(), &["Nobody"]),
            Err(KeeperError::NotFound(_))
        ));
    }

    #[test]
    fn upcoming_requires_number() {
        let err = upcoming(&book(), &["abc"], june(8)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input. Please provide a valid number of days."
        );
        let none: [&str; 0] = [];
        assert!(upcoming(&book(), &none, june(8)).is_err());
    }

    #[test]
    fn upcoming_lists_or_reports_none() {
        let mut book = book();
        let result = upcoming(&book, &["7"], june(8)).unwrap();
        assert_eq!(result.texts(), vec!["No upcoming birthdays."]);

        add(&mut book, &["Jane", "Doe", "10.06.1990"]).unwrap();
        let result = upcoming(&book, &["7"], june(8)).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(result.upcoming_birthdays[0].name, "Jane Doe");
        assert_eq!(result.upcoming_birthdays[0].congratulation_date, june(12));
    }
}
