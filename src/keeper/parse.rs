//! # Keyword Argument Parsing
//!
//! Contact commands take loose, positional argument lists such as
//!
//! ```text
//! add-contact Jane Doe 0501234567 address 12 Main St email jane@example.com
//! change-contact Jane Doe phone 0501234567 0509999999
//! ```
//!
//! The only structure in these lists is a fixed set of lowercase keywords
//! (`phone`, `email`, `address`, `birthday`). This module splits a token list
//! on those keywords; the commands decide what the pieces mean.
//! `KeywordArgs` matches keywords exactly, so `Birthday Girl` stays a name.
//! `split_first_keyword` also accepts them in any case.
//!
//! ```
//! use keeper::parse::{FieldKey, KeywordArgs};
//!
//! let args: Vec<String> = "Jane Doe 0501234567 email jane@example.com"
//!     .split_whitespace()
//!     .map(String::from)
//!     .collect();
//! let parsed = KeywordArgs::parse(&args);
//! assert_eq!(parsed.head, vec!["Jane", "Doe", "0501234567"]);
//! assert_eq!(parsed.value(FieldKey::Email).as_deref(), Some("jane@example.com"));
//! ```

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Phone,
    Email,
    Address,
    Birthday,
}

impl FieldKey {
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldKey::Phone => "phone",
            FieldKey::Email => "email",
            FieldKey::Address => "address",
            FieldKey::Birthday => "birthday",
        }
    }

    /// Matches a keyword regardless of case.
    pub fn parse_any_case(token: &str) -> Option<Self> {
        token.to_lowercase().parse().ok()
    }
}

impl FromStr for FieldKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "phone" => Ok(FieldKey::Phone),
            "email" => Ok(FieldKey::Email),
            "address" => Ok(FieldKey::Address),
            "birthday" => Ok(FieldKey::Birthday),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A keyword and the tokens that follow it, up to the next keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub key: FieldKey,
    pub tokens: Vec<&'a str>,
}

/// A token list split into the bare tokens before the first keyword and one
/// section per keyword occurrence, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordArgs<'a> {
    pub head: Vec<&'a str>,
    pub sections: Vec<Section<'a>>,
}

impl<'a> KeywordArgs<'a> {
    pub fn parse<S: AsRef<str>>(args: &'a [S]) -> Self {
        let mut head = Vec::new();
        let mut sections: Vec<Section<'a>> = Vec::new();

        for token in args.iter().map(|t| t.as_ref()) {
            match token.parse::<FieldKey>() {
                Ok(key) => sections.push(Section {
                    key,
                    tokens: Vec::new(),
                }),
                Err(()) => match sections.last_mut() {
                    Some(section) => section.tokens.push(token),
                    None => head.push(token),
                },
            }
        }

        Self { head, sections }
    }

    /// The joined value of the last section for `key`. Repeating a keyword
    /// overrides the earlier occurrence.
    pub fn value(&self, key: FieldKey) -> Option<String> {
        self.sections
            .iter()
            .rev()
            .find(|s| s.key == key)
            .map(|s| s.tokens.join(" "))
    }

    pub fn has(&self, key: FieldKey) -> bool {
        self.sections.iter().any(|s| s.key == key)
    }
}

/// Splits at the first keyword only: `(head, keyword, everything after it)`.
/// Later keywords stay in the tail as ordinary tokens.
pub fn split_first_keyword<S: AsRef<str>>(args: &[S]) -> Option<(Vec<&str>, FieldKey, Vec<&str>)> {
    let (pos, key) = args
        .iter()
        .enumerate()
        .find_map(|(i, t)| FieldKey::parse_any_case(t.as_ref()).map(|key| (i, key)))?;
    let head = args[..pos].iter().map(|t| t.as_ref()).collect();
    let tail = args[pos + 1..].iter().map(|t| t.as_ref()).collect();
    Some((head, key, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn sections_in_any_order() {
        let args = tokens("Jane Doe 0501234567 birthday 10.06.1990 address 12 Main St email j@x.io");
        let parsed = KeywordArgs::parse(&args);
        assert_eq!(parsed.head, vec!["Jane", "Doe", "0501234567"]);
        assert_eq!(parsed.value(FieldKey::Address).as_deref(), Some("12 Main St"));
        assert_eq!(parsed.value(FieldKey::Birthday).as_deref(), Some("10.06.1990"));
        assert_eq!(parsed.value(FieldKey::Email).as_deref(), Some("j@x.io"));
        assert!(!parsed.has(FieldKey::Phone));
    }

    #[test]
    fn capitalised_keyword_words_stay_in_the_name() {
        let args = tokens("Birthday Girl 0501234567 Address Book email g@x.io");
        let parsed = KeywordArgs::parse(&args);
        assert_eq!(parsed.head, vec!["Birthday", "Girl", "0501234567", "Address", "Book"]);
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.value(FieldKey::Email).as_deref(), Some("g@x.io"));
    }

    #[test]
    fn repeated_keyword_last_wins() {
        let args = tokens("email a@x.io email b@x.io");
        let parsed = KeywordArgs::parse(&args);
        assert!(parsed.head.is_empty());
        assert_eq!(parsed.value(FieldKey::Email).as_deref(), Some("b@x.io"));
    }

    #[test]
    fn empty_section_yields_empty_value() {
        let args = tokens("Jane 0501234567 email");
        let parsed = KeywordArgs::parse(&args);
        assert_eq!(parsed.value(FieldKey::Email).as_deref(), Some(""));
    }

    #[test]
    fn split_first_keyword_keeps_tail_raw() {
        let args = tokens("Jane Doe address 1 Phone Lane");
        let (head, key, tail) = split_first_keyword(&args).unwrap();
        assert_eq!(head, vec!["Jane", "Doe"]);
        assert_eq!(key, FieldKey::Address);
        assert_eq!(tail, vec!["1", "Phone", "Lane"]);

        assert!(split_first_keyword(&tokens("Jane Doe")).is_none());
    }

    #[test]
    fn split_first_keyword_ignores_case() {
        let args = tokens("Jane EMAIL j@x.io");
        let (head, key, tail) = split_first_keyword(&args).unwrap();
        assert_eq!(head, vec!["Jane"]);
        assert_eq!(key, FieldKey::Email);
        assert_eq!(tail, vec!["j@x.io"]);
        assert_eq!("Email".parse::<FieldKey>(), Err(()));
    }
}
