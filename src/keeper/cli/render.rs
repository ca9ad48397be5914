//! # Rendering
//!
//! Turns `CmdResult`s into terminal text. Messages come first, then any
//! listed contacts, notes or birthdays. The `render_*` functions return
//! strings so layout can be tested without a terminal; `print_*` writes them.

use super::styles::{COMMAND_NAME, HEADING, PARAMS};
use colored::Colorize;
use keeper::book::UpcomingBirthday;
use keeper::commands::{CmdMessage, CmdResult, MessageLevel, COMMANDS};
use keeper::fields::BIRTHDAY_FORMAT;
use keeper::model::{Note, Record};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 3;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

pub(super) fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    if !result.listed_records.is_empty() {
        println!("{}", render_records(&result.listed_records));
    }
    if !result.listed_notes.is_empty() {
        println!("{}", render_notes(&result.listed_notes));
    }
    if !result.upcoming_birthdays.is_empty() {
        println!("{}", render_birthdays(&result.upcoming_birthdays));
    }
}

pub(super) fn render_records(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(super) fn render_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    upcoming
        .iter()
        .map(|b| format!("{}: {}", b.name, b.congratulation_date.format(BIRTHDAY_FORMAT)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The command table in three aligned columns: names, parameters, description.
pub(super) fn render_help() -> String {
    let rows: Vec<(String, &str, &str)> = COMMANDS
        .iter()
        .map(|info| (info.names.join(" / "), info.params, info.description))
        .collect();

    let name_width = rows.iter().map(|(n, _, _)| n.width()).max().unwrap_or(0);
    let params_width = rows.iter().map(|(_, p, _)| p.width()).max().unwrap_or(0);

    let mut out = format!("{}\n\n", HEADING.apply_to("Available commands:"));
    for (names, params, description) in &rows {
        let name_pad = name_width - names.width() + COLUMN_GAP;
        let params_pad = params_width - params.width() + COLUMN_GAP;
        out.push_str(&format!(
            "  {}{}{}{}{}\n",
            COMMAND_NAME.apply_to(names),
            " ".repeat(name_pad),
            PARAMS.apply_to(params),
            " ".repeat(params_pad),
            description
        ));
    }
    out
}

pub(super) fn print_help() {
    print!("{}", render_help());
}
