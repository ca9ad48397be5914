//! # API Facade
//!
//! The API layer is the single entry point for every keeper operation. It
//! owns the two collections for the length of a session and hands them to
//! the command layer one command at a time.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the address book and the notebook when opened
//! - **Dispatches** each [`Command`] to its command function
//! - **Drives dialogs** for commands that need more input, through a [`Prompter`]
//! - **Turns user errors into messages** so a bad command never ends the session
//! - **Saves** both collections on request
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Terminal I/O**: questions go through the prompter, results come back
//!   as [`CmdResult`] values for the UI to print
//!
//! ## Generic Over DataStore
//!
//! `KeeperApi<S: DataStore>` is generic over the storage backend:
//! - Production: `KeeperApi<FileStore>`
//! - Testing: `KeeperApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{
    add_contact, add_note, birthday, change_contact, delete_contact, delete_note,
    find_notes, list, show_contact, CmdMessage, CmdResult, Command,
};
use crate::error::{KeeperError, Result};
use crate::model::Note;
use crate::notebook::NoteBook;
use crate::prompt::Prompter;
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::{debug, info};

const DETAILS_OFFER: &str =
    "Maybe you want to add more details? Such as address, email, and birthday? (yes/no): ";
const DETAILS_REQUEST: &str = "Please enter additional details (e.g., email example@gmail.com \
     birthday DD.MM.YYYY address: text up to 100 symbols): ";

pub struct KeeperApi<S: DataStore> {
    store: S,
    book: AddressBook,
    notebook: NoteBook,
}

impl<S: DataStore> KeeperApi<S> {
    /// Loads both collections from `store`.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load_contacts()?;
        let notebook = store.load_notes()?;
        info!(
            contacts = book.len(),
            notes = notebook.len(),
            "collections loaded"
        );
        Ok(Self {
            store,
            book,
            notebook,
        })
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save_contacts(&self.book)?;
        self.store.save_notes(&self.notebook)?;
        info!("collections saved");
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notebook(&self) -> &NoteBook {
        &self.notebook
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs one command. Errors the user can fix come back as an error
    /// message in the result; anything else is returned as `Err`.
    pub fn execute<A: AsRef<str>>(
        &mut self,
        command: Command,
        args: &[A],
        prompter: &mut dyn Prompter,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        debug!(?command, args = args.len(), "executing");
        match self.dispatch(command, args, prompter, today) {
            Err(e) if e.is_user_facing() => {
                debug!(?command, error = %e, "command rejected");
                Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())))
            }
            other => other,
        }
    }

    fn dispatch<A: AsRef<str>>(
        &mut self,
        command: Command,
        args: &[A],
        prompter: &mut dyn Prompter,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        match command {
            Command::Hello => {
                Ok(CmdResult::default().with_message(CmdMessage::info("How can I help you?")))
            }
            Command::AddContact => self.add_contact(args, prompter),
            Command::ChangeContact => change_contact::run(&mut self.book, args),
            Command::DeleteContact => self.delete_contact(args, prompter),
            Command::ShowContact => show_contact::run(&self.book, args),
            Command::AllContacts => Ok(list::contacts(&self.book)),
            Command::AddBirthday => birthday::add(&mut self.book, args),
            Command::ShowBirthday => birthday::show(&self.book, args),
            Command::Birthdays => birthday::upcoming(&self.book, args, today),
            Command::AddNote => self.add_note(prompter),
            Command::AllNotes => Ok(list::notes(&self.notebook)),
            Command::FindNotes => self.find_notes(prompter),
            Command::DeleteNote => {
                let title = prompter.ask("Enter the title of the note to delete: ")?;
                delete_note::run(&mut self.notebook, &title)
            }
            // Rendering the command table is up to the UI.
            Command::Help => Ok(CmdResult::default()),
            Command::Exit => Ok(CmdResult::default().with_message(CmdMessage::info("Good bye!"))),
        }
    }

    fn add_contact<A: AsRef<str>>(
        &mut self,
        args: &[A],
        prompter: &mut dyn Prompter,
    ) -> Result<CmdResult> {
        let draft = add_contact::parse(args)?;
        let name = draft.name.to_string();
        let offer_details = draft.wants_details();
        let mut result = add_contact::run(&mut self.book, draft)?;

        if !offer_details {
            return Ok(result);
        }
        let answer = prompter.ask(DETAILS_OFFER)?;
        if answer.trim().to_lowercase() != "yes" {
            return Ok(result);
        }

        let line = prompter.ask(DETAILS_REQUEST)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let follow_up = add_contact::parse_details(&tokens)
            .and_then(|details| add_contact::add_details(&mut self.book, &name, details));
        match follow_up {
            Ok(details) => result.messages.extend(details.messages),
            Err(e) if e.is_user_facing() => result.add_message(CmdMessage::warning(e.to_string())),
            Err(e) => return Err(e),
        }
        Ok(result)
    }

    fn delete_contact<A: AsRef<str>>(
        &mut self,
        args: &[A],
        prompter: &mut dyn Prompter,
    ) -> Result<CmdResult> {
        let name = delete_contact::target(&self.book, args)?;
        let answer = prompter.ask(&delete_contact::confirmation_prompt(&name))?;
        delete_contact::run(
            &mut self.book,
            &name,
            delete_contact::Confirmation::parse(&answer),
        )
    }

    fn add_note(&mut self, prompter: &mut dyn Prompter) -> Result<CmdResult> {
        let (title, text, tags) = ask_note_fields(
            prompter,
            "Enter the title of the note: ",
            "Enter the text of the note: ",
            "Would you like to add tags? (Enter tags separated by commas or press Enter to skip): ",
        )?;
        let note = Note::parse(&title, &text, &tags)?;
        add_note::run(&mut self.notebook, note)
    }

    fn find_notes(&mut self, prompter: &mut dyn Prompter) -> Result<CmdResult> {
        let term = prompter.ask("Enter the search term: ")?;
        if term.trim().is_empty() {
            return Err(KeeperError::EmptyValue("Search term cannot be empty.".into()));
        }
        let field = prompter.ask("Where do you want to search? (title, text, tags, all): ")?;
        let results = find_notes::search(&self.notebook, &term, &field)?;

        if results.is_empty() {
            return Ok(CmdResult::default().with_message(CmdMessage::info("No matching notes found.")));
        }
        prompter.show(&CmdMessage::info(find_notes::listing(&results)));

        let action = prompter.ask("Would you like to edit or delete a note? (edit/delete/skip): ")?;
        let action = match find_notes::NoteAction::parse(&action) {
            Some(find_notes::NoteAction::Skip) => {
                return Ok(CmdResult::default().with_message(CmdMessage::info("No action taken.")))
            }
            Some(action) => action,
            None => {
                return Ok(CmdResult::default()
                    .with_message(CmdMessage::warning("Invalid action. Skipping.")))
            }
        };

        let choice = prompter.ask(&format!("Enter the note number (1-{}): ", results.len()))?;
        let selected = match find_notes::select(results.len(), &choice) {
            Some(index) => &results[index],
            None => {
                return Ok(CmdResult::default()
                    .with_message(CmdMessage::warning("Invalid note number. Skipping.")))
            }
        };
        let old_title = selected.title().to_string();

        match action {
            find_notes::NoteAction::Delete => delete_note::run(&mut self.notebook, &old_title),
            _ => {
                let (title, text, tags) = ask_note_fields(
                    prompter,
                    "Enter the new title of the note: ",
                    "Enter the new text of the note: ",
                    "Enter new tags separated by commas (or press Enter to skip): ",
                )?;
                Ok(find_notes::edit(
                    &mut self.notebook,
                    &old_title,
                    &title,
                    &text,
                    &tags,
                ))
            }
        }
    }
}

/// Asks for title, text and tags, rejecting a blank title or text as soon
/// as it is entered.
fn ask_note_fields(
    prompter: &mut dyn Prompter,
    title_question: &str,
    text_question: &str,
    tags_question: &str,
) -> Result<(String, String, String)> {
    let title = prompter.ask(title_question)?;
    if title.trim().is_empty() {
        return Err(KeeperError::EmptyValue("Title cannot be empty.".into()));
    }
    let text = prompter.ask(text_question)?;
    if text.trim().is_empty() {
        return Err(KeeperError::EmptyValue("Text cannot be empty.".into()));
    }
    let tags = prompter.ask(tags_question)?;
    Ok((title, text, tags))
}

/// Splits an input line into the command and its arguments. `None` for a
/// blank line.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.map(String::from).collect()))
}

/// Convenience used by the UI: the command named by `name`, or the
/// "Invalid command." result.
pub fn resolve(name: &str) -> std::result::Result<Command, CmdResult> {
    name.parse::<Command>()
        .map_err(|e| CmdResult::default().with_message(CmdMessage::error(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::fields::Name;
    use crate::model::{Note, Record};
    use crate::prompt::ScriptedPrompter;
    use crate::store::memory::InMemoryStore;

    fn api() -> KeeperApi<InMemoryStore> {
        KeeperApi::open(InMemoryStore::new()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 8).unwrap()
    }

    fn run(
        api: &mut KeeperApi<InMemoryStore>,
        line: &str,
        answers: &[&str],
    ) -> (CmdResult, ScriptedPrompter) {
        let (name, args) = parse_line(line).unwrap();
        let command = name.parse::<Command>().unwrap();
        let mut prompter = ScriptedPrompter::new(answers.iter().copied());
        let result = api.execute(command, &args, &mut prompter, today()).unwrap();
        (result, prompter)
    }

    #[test]
    fn add_show_update_scenario() {
        let mut api = api();

        let (result, prompter) = run(&mut api, "add-contact Jane Doe 0501234567", &["no"]);
        assert_eq!(result.texts(), vec!["Contact added."]);
        assert_eq!(prompter.asked, vec![DETAILS_OFFER]);

        let (result, _) = run(&mut api, "show-contact Jane Doe", &[]);
        let record = &result.listed_records[0];
        assert_eq!(record.phones()[0].as_str(), "0501234567");
        assert!(record.birthday.is_none());
        assert!(record.email.is_none());
        assert!(record.address.is_none());

        let (result, _) = run(&mut api, "add-contact Jane Doe 0509999999", &["no"]);
        assert_eq!(result.texts(), vec!["Contact updated."]);
        assert_eq!(api.book().find("Jane Doe").unwrap().phones().len(), 2);
    }

    #[test]
    fn open_loads_saved_collections() {
        let mut book = AddressBook::new();
        let mut record = Record::new(Name::parse("Jane Doe").unwrap());
        record.add_phone("0501234567").unwrap();
        book.add_record(record).unwrap();
        let mut notebook = NoteBook::new();
        notebook.add_note(Note::parse("Taxes", "File", "").unwrap()).unwrap();

        let mut api = KeeperApi::open(InMemoryStore::with_data(book, notebook)).unwrap();
        let (result, _) = run(&mut api, "show-contact Jane Doe", &[]);
        assert_eq!(result.listed_records[0].phones()[0].as_str(), "0501234567");
        assert!(api.notebook().get("Taxes").is_some());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn add_contact_with_sections_skips_offer() {
        let mut api = api();
        let (result, prompter) = run(
            &mut api,
            "add-contact Jane 0501234567 email jane@example.com",
            &[],
        );
        assert_eq!(result.texts(), vec!["Contact added."]);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn add_contact_follow_up_details() {
        let mut api = api();
        let (result, _) = run(
            &mut api,
            "add-contact Jane 0501234567",
            &["YES", "address 1 Elm St email jane@example.com"],
        );
        assert_eq!(result.texts(), vec!["Contact added.", "Details added."]);
        let record = api.book().find("Jane").unwrap();
        assert_eq!(record.address.as_ref().unwrap().as_str(), "1 Elm St");
    }

    #[test]
    fn add_contact_bad_follow_up_keeps_contact() {
        let mut api = api();
        let (result, _) = run(
            &mut api,
            "add-contact Jane 0501234567",
            &["yes", "nickname JD"],
        );
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert!(api.book().find("Jane").is_some());
    }

    #[test]
    fn invalid_day_count_is_a_message() {
        let mut api = api();
        let (result, _) = run(&mut api, "birthdays abc", &[]);
        assert_eq!(
            result.texts(),
            vec!["Invalid input. Please provide a valid number of days."]
        );
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn upcoming_birthday_moves_off_weekend() {
        let mut api = api();
        run(
            &mut api,
            "add-contact Jane 0501234567 birthday 10.06.1990",
            &[],
        );
        let (result, _) = run(&mut api, "birthdays 7", &[]);
        assert_eq!(result.upcoming_birthdays.len(), 1);
        assert_eq!(
            result.upcoming_birthdays[0].congratulation_date,
            NaiveDate::from_ymd_opt(2023, 6, 12).unwrap()
        );
    }

    #[test]
    fn delete_contact_needs_yes() {
        let mut api = api();
        run(&mut api, "add-contact Jane Doe 0501234567", &["no"]);

        let (result, prompter) = run(&mut api, "delete-contact Jane Doe", &["no"]);
        assert_eq!(result.texts(), vec!["Contact 'Jane Doe' was not deleted."]);
        assert_eq!(
            prompter.asked,
            vec!["Are you sure you want to delete 'Jane Doe'? (yes/no): "]
        );
        assert!(api.book().find("Jane Doe").is_some());

        let (result, _) = run(&mut api, "delete-contact Jane Doe", &["yes"]);
        assert_eq!(result.texts(), vec!["Contact 'Jane Doe' has been deleted."]);
        assert!(api.book().find("Jane Doe").is_none());
    }

    #[test]
    fn delete_unknown_contact_asks_nothing() {
        let mut api = api();
        let (result, prompter) = run(&mut api, "delete-contact Nobody", &[]);
        assert_eq!(result.texts(), vec!["Contact 'Nobody' not found."]);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn add_note_dialog() {
        let mut api = api();
        let (result, _) = run(&mut api, "add-note", &["Taxes", "File before April", "urgent, money"]);
        assert_eq!(result.texts(), vec!["Note 'Taxes' added successfully!"]);
        assert_eq!(api.notebook().get("Taxes").unwrap().tags.len(), 2);
    }

    #[test]
    fn add_note_blank_title_stops_early() {
        let mut api = api();
        let (result, prompter) = run(&mut api, "add-note", &["  ", "unused"]);
        assert_eq!(result.texts(), vec!["Title cannot be empty."]);
        assert_eq!(prompter.remaining(), 1);
        assert!(api.notebook().is_empty());
    }

    #[test]
    fn find_notes_edit_flow() {
        let mut api = api();
        run(&mut api, "add-note", &["Taxes", "File before April", "urgent"]);
        run(&mut api, "add-note", &["Groceries", "milk", ""]);

        let (result, prompter) = run(
            &mut api,
            "find-notes",
            &["URGENT", "tags", "edit", "1", "Tax return", "Filed", "done"],
        );
        assert_eq!(result.texts(), vec!["Note edited successfully."]);
        assert!(prompter.shown_texts()[0].starts_with("Found 1 matching note:"));
        assert!(prompter.asked.contains(&"Enter the note number (1-1): ".to_string()));

        let titles: Vec<&str> = api.notebook().iter().map(|n| n.title().as_str()).collect();
        assert_eq!(titles, vec!["Tax return", "Groceries"]);
    }

    #[test]
    fn find_notes_delete_and_skip() {
        let mut api = api();
        run(&mut api, "add-note", &["Taxes", "File before April", ""]);

        let (result, _) = run(&mut api, "find-notes", &["tax", "all", "skip"]);
        assert_eq!(result.texts(), vec!["No action taken."]);

        let (result, _) = run(&mut api, "find-notes", &["tax", "all", "delete", "9"]);
        assert_eq!(result.texts(), vec!["Invalid note number. Skipping."]);

        let (result, _) = run(&mut api, "find-notes", &["tax", "all", "archive"]);
        assert_eq!(result.texts(), vec!["Invalid action. Skipping."]);

        let (result, _) = run(&mut api, "find-notes", &["tax", "all", "delete", "1"]);
        assert_eq!(result.texts(), vec!["Note 'Taxes' deleted successfully."]);
        assert!(api.notebook().is_empty());
    }

    #[test]
    fn find_notes_rejects_bad_input() {
        let mut api = api();
        let (result, _) = run(&mut api, "find-notes", &["", "all"]);
        assert_eq!(result.texts(), vec!["Search term cannot be empty."]);

        let (result, _) = run(&mut api, "find-notes", &["x", "body"]);
        assert_eq!(
            result.texts(),
            vec!["Invalid search option. Choose from 'title', 'text', 'tags', or 'all'."]
        );

        let (result, _) = run(&mut api, "find-notes", &["x", "all"]);
        assert_eq!(result.texts(), vec!["No matching notes found."]);
    }

    #[test]
    fn delete_note_prompts_for_title() {
        let mut api = api();
        let (result, _) = run(&mut api, "delete-note", &["Nope"]);
        assert_eq!(result.texts(), vec!["Note 'Nope' not found."]);
    }

    #[test]
    fn running_out_of_input_is_not_user_facing() {
        let mut api = api();
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let none: [&str; 0] = [];
        let err = api
            .execute(Command::AddNote, &none, &mut prompter, today())
            .unwrap_err();
        assert!(matches!(err, KeeperError::Io(_)));
    }

    #[test]
    fn save_writes_both_collections() {
        let mut api = api();
        run(&mut api, "add-contact Jane 0501234567", &["no"]);
        api.save().unwrap();
        assert_eq!(api.store().save_count(), 2);
        assert!(api.store().load_contacts().unwrap().find("Jane").is_some());
    }

    #[test]
    fn line_parsing() {
        assert_eq!(parse_line("   "), None);
        let (command, args) = parse_line("ADD-CONTACT Jane  0501234567").unwrap();
        assert_eq!(command, "add-contact");
        assert_eq!(args, vec!["Jane", "0501234567"]);
        assert!(resolve("nope").is_err());
        assert_eq!(resolve("hello").unwrap(), Command::Hello);
    }
}
