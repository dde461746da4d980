//! A library for splitting free-form full names into their components.
//!
//! A name like `Dr. John "Jack" Michael Smith Jr., PhD` is broken down into
//! an honorific prefix, given name, middle name(s), family name, combined
//! generational/professional suffix, and nickname.
//!
//! # Use
//!
//! ```
//! use full_name_parser::{ParsedName, ParserConfig, NameOrder};
//!
//! let name = ParsedName::parse("Prof. Elizabeth van der Berg III").unwrap();
//! assert_eq!("Prof.", name.prefix());
//! assert_eq!("Elizabeth", name.first_name());
//! assert_eq!("van der Berg", name.last_name());
//! assert_eq!("III", name.suffix());
//!
//! let config = ParserConfig::default().with_order(NameOrder::LastFirst);
//! let name = full_name_parser::parse("Zhang Wei", &config).unwrap();
//! assert_eq!("Wei", name.first_name());
//! assert_eq!("Zhang", name.last_name());
//! ```
//!
//! Parsing is permissive: anything not recognized as a nickname, suffix or
//! prefix ends up in one of the name slots. Only empty and overlong input
//! is rejected.

mod case;
mod config;
mod error;
mod namecase;
mod nickname;
mod parse;
mod suffix;
mod surname;
mod title;
mod utils;

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

use compact_str::CompactString;
use std::fmt;

pub use config::{NameOrder, ParserConfig, DEFAULT_MAX_LENGTH};
pub use error::{ParseError, Result};

/// The components of a parsed name. Absent components are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParsedName {
    prefix: CompactString,
    first_name: CompactString,
    middle_name: CompactString,
    last_name: CompactString,
    suffix: CompactString,
    nickname: CompactString,
}

/// Parses `name` using `config`.
pub fn parse(name: &str, config: &ParserConfig) -> Result<ParsedName> {
    let op = parse::parse(name, config)?;
    let format = |s: &str| CompactString::from(namecase::namecase(s, config.preserve_case));

    Ok(ParsedName {
        prefix: format(&op.prefix),
        first_name: format(&op.given_name),
        middle_name: format(&op.middle_names),
        last_name: format(&op.surname),
        suffix: CompactString::from(op.combined_suffix()),
        nickname: format(&op.nickname),
    })
}

/// Parses `name` with the default configuration.
pub fn parse_quick(name: &str) -> Result<ParsedName> {
    parse(name, &ParserConfig::default())
}

/// A reusable parser bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct FullNameParser {
    config: ParserConfig,
}

impl FullNameParser {
    pub fn new(config: ParserConfig) -> Self {
        FullNameParser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, name: &str) -> Result<ParsedName> {
        parse(name, &self.config)
    }
}

impl ParsedName {
    /// Parses `name` with the default configuration.
    pub fn parse(name: &str) -> Result<ParsedName> {
        parse_quick(name)
    }

    /// Honorifics such as "Dr." or "Dr. Prof.".
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Every word between the given name and the surname, space-separated.
    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    /// The surname, including any particles ("van der Berg").
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Lineage suffix (if any) followed by professional suffixes, joined
    /// with ", ", e.g. "Jr., PhD".
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Prefix, given, middle, surname and suffix, skipping empty ones.
    ///
    /// ```
    /// use full_name_parser::ParsedName;
    ///
    /// let name = ParsedName::parse("dr.  john   smith").unwrap();
    /// assert_eq!("Dr. John Smith", name.full_name());
    /// ```
    pub fn full_name(&self) -> String {
        [
            self.prefix(),
            self.first_name(),
            self.middle_name(),
            self.last_name(),
            self.suffix(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Given name and surname, with the nickname quoted after them.
    ///
    /// ```
    /// use full_name_parser::ParsedName;
    ///
    /// let name = ParsedName::parse("John \"Johnny\" Doe").unwrap();
    /// assert_eq!("John Doe \"Johnny\"", name.display_name());
    /// ```
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name(), self.last_name());
        let name = name.trim();
        if self.nickname.is_empty() {
            name.to_string()
        } else if name.is_empty() {
            format!("\"{}\"", self.nickname())
        } else {
            format!("{} \"{}\"", name, self.nickname())
        }
    }

    /// Field name/value pairs, in display order.
    pub fn to_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("prefix", self.prefix()),
            ("firstName", self.first_name()),
            ("middleName", self.middle_name()),
            ("lastName", self.last_name()),
            ("suffix", self.suffix()),
            ("nickname", self.nickname()),
        ]
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields() {
        let name = parse_quick("Dr. John Michael Smith Jr., PhD").unwrap();
        assert_eq!("Dr.", name.prefix());
        assert_eq!("John", name.first_name());
        assert_eq!("Michael", name.middle_name());
        assert_eq!("Smith", name.last_name());
        assert_eq!("Jr., PhD", name.suffix());
        assert_eq!("", name.nickname());
    }

    #[test]
    fn formatting_applied() {
        let name = parse_quick("DR. jane VAN DER berg").unwrap();
        assert_eq!("DR.", name.prefix());
        assert_eq!("Jane", name.first_name());
        assert_eq!("van der Berg", name.last_name());
    }

    #[test]
    fn suffix_not_reformatted() {
        let name = parse_quick("jane doe, phd").unwrap();
        assert_eq!("phd", name.suffix());
        assert_eq!("Jane Doe phd", name.full_name());
    }

    #[test]
    fn full_name_skips_nickname() {
        let name = parse_quick("Robert (Bob) Smith").unwrap();
        assert_eq!("Robert Smith", name.full_name());
        assert_eq!("Robert Smith", name.to_string());
    }

    #[test]
    fn display_name_without_first() {
        let name = parse_quick("Cher").unwrap();
        assert_eq!("Cher", name.display_name());

        let name = parse_quick("\"The Rock\"").unwrap();
        assert_eq!("\"The Rock\"", name.display_name());
    }

    #[test]
    fn pairs() {
        let name = parse_quick("Michael \"Mike\" O'Connor").unwrap();
        assert_eq!(
            [
                ("prefix", ""),
                ("firstName", "Michael"),
                ("middleName", ""),
                ("lastName", "O'Connor"),
                ("suffix", ""),
                ("nickname", "Mike"),
            ],
            name.to_pairs()
        );
    }

    #[test]
    fn reusable_parser() {
        let parser = FullNameParser::new(ParserConfig::default().with_preserve_case(true));
        assert!(parser.config().preserve_case);
        let name = parser.parse("mcdonald macElroy").unwrap();
        assert_eq!("mcdonald", name.first_name());
        assert_eq!("macElroy", name.last_name());
    }

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FullNameParser>();
        assert_send_sync::<ParserConfig>();
        assert_send_sync::<ParsedName>();
    }
}
