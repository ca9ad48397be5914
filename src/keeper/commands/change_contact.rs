use crate::book::AddressBook;
use crate::commands::{join_name, CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};
use crate::parse::{split_first_keyword, FieldKey};

/// `change-contact <name...> <field> <value...>`
///
/// The first keyword decides the field; everything after it is the value.
/// For `phone` the first value token is the number being replaced and the
/// rest is the new number.
pub fn run<S: AsRef<str>>(book: &mut AddressBook, args: &[S]) -> Result<CmdResult> {
    if args.len() < 3 {
        return Err(KeeperError::InvalidArgument(
            "Please check your request and specify the contact name, \
             field to change (phone/email/address/birthday), and the new value."
                .into(),
        ));
    }

    let (head, field, tail) = split_first_keyword(args).ok_or_else(|| {
        KeeperError::InvalidArgument(
            "Please specify a valid field to change (phone/email/address/birthday).".into(),
        )
    })?;

    let name = join_name(&head);
    if name.is_empty() {
        return Err(KeeperError::InvalidArgument(
            "Contact name is required.".into(),
        ));
    }
    let value = tail.join(" ").trim().to_string();
    if value.is_empty() {
        return Err(KeeperError::InvalidArgument(format!(
            "New value for {} is required.",
            field
        )));
    }

    let record = book
        .find_mut(&name)
        .ok_or_else(|| KeeperError::NotFound("Contact not found.".into()))?;

    let message = match field {
        FieldKey::Phone => {
            if tail.len() < 2 {
                return Err(KeeperError::InvalidArgument(
                    "Please provide both the old phone number and the new phone number.".into(),
                ));
            }
            record.edit_phone(tail[0], &tail[1..].join(" "))?;
            "Phone changed."
        }
        FieldKey::Email => {
            if !value.contains('@') || !value.contains('.') {
                return Err(KeeperError::InvalidFormat("Invalid email format.".into()));
            }
            record.add_email(&value)?;
            "Email changed."
        }
        FieldKey::Address => {
            record.add_address(&value)?;
            "Address changed."
        }
        FieldKey::Birthday => {
            record.add_birthday(&value).map_err(|_| {
                KeeperError::InvalidFormat("Invalid birthday format. Please use 'DD.MM.YYYY'.".into())
            })?;
            "Birthday changed."
        }
    };

    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}
