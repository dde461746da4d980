use super::config::ParserConfig;
use super::error::{ParseError, Result};
use super::nickname;
use super::suffix::{self, Credentials};
use super::surname::{self, NameSplit};
use super::title;
use super::utils::collapse_whitespace;
use tracing::{debug, trace};

/// Scratch state for a single parse. Each pass claims some text from
/// `remaining` and records it in a slot; nothing is ever put back.
#[derive(Debug, Default)]
pub struct ParseOp {
    remaining: String,
    pub prefix: String,
    pub given_name: String,
    pub middle_names: String,
    pub surname: String,
    pub lineage_suffix: String,
    pub credentials: Credentials,
    pub nickname: String,
}

pub fn parse(name: &str, config: &ParserConfig) -> Result<ParseOp> {
    validate(name, config)?;

    trace!(
        order = %config.order,
        strict_mode = config.strict_mode,
        preserve_case = config.preserve_case,
        "parsing name"
    );

    let mut op = ParseOp {
        remaining: collapse_whitespace(name).into_owned(),
        ..ParseOp::default()
    };
    op.run(config);
    Ok(op)
}

fn validate(name: &str, config: &ParserConfig) -> Result<()> {
    if name.trim().is_empty() {
        debug!("rejected empty name");
        return Err(ParseError::EmptyInput);
    }

    // Byte length bounds char count from above, so only count when needed
    if name.len() > config.max_length && name.chars().count() > config.max_length {
        debug!(max_length = config.max_length, "rejected overlong name");
        return Err(ParseError::TooLong {
            max_length: config.max_length,
        });
    }

    Ok(())
}

impl ParseOp {
    fn run(&mut self, config: &ParserConfig) {
        let mut len = self.remaining.len();

        if let Some(nickname) = nickname::strip_nickname(&mut self.remaining) {
            trace!(%nickname, "stripped nickname");
            self.nickname = nickname;
        }
        self.check_shrunk(&mut len);

        self.credentials = suffix::strip_credentials(&mut self.remaining);
        if !self.credentials.is_empty() {
            trace!(credentials = ?self.credentials, "stripped professional suffixes");
        }
        self.check_shrunk(&mut len);

        if let Some(lineage) = suffix::strip_lineage_suffix(&mut self.remaining) {
            trace!(%lineage, "stripped lineage suffix");
            self.lineage_suffix = lineage;
        }
        self.check_shrunk(&mut len);

        if let Some(prefix) = title::strip_prefixes(&mut self.remaining) {
            trace!(%prefix, "stripped prefixes");
            self.prefix = prefix;
        }
        self.check_shrunk(&mut len);

        let NameSplit {
            given_name,
            middle_names,
            surname,
        } = surname::split_name(&self.remaining, config.order);
        trace!(%given_name, %middle_names, %surname, "split remaining words");
        self.given_name = given_name;
        self.middle_names = middle_names;
        self.surname = surname;
        self.remaining.clear();
    }

    #[inline]
    fn check_shrunk(&self, len: &mut usize) {
        debug_assert!(
            self.remaining.len() <= *len,
            "Pass grew remaining text to {:?}",
            self.remaining
        );
        *len = self.remaining.len();
    }

    /// Lineage suffix first, then credentials in table order.
    pub fn combined_suffix(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.credentials.len() + 1);
        if !self.lineage_suffix.is_empty() {
            parts.push(&self.lineage_suffix);
        }
        parts.extend(
            self.credentials
                .iter()
                .map(String::as_str)
                .filter(|c| !c.is_empty()),
        );
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NameOrder;

    fn parse_default(name: &str) -> ParseOp {
        parse(name, &ParserConfig::default()).unwrap()
    }

    #[test]
    fn first_last() {
        let op = parse_default("John Doe");
        assert_eq!("John", op.given_name);
        assert_eq!("", op.middle_names);
        assert_eq!("Doe", op.surname);
        assert_eq!("", op.combined_suffix());
    }

    #[test]
    fn everything() {
        let op = parse_default("Dr. John (Jack) Michael Smith Jr., PhD");
        assert_eq!("Dr.", op.prefix);
        assert_eq!("John", op.given_name);
        assert_eq!("Michael", op.middle_names);
        assert_eq!("Smith", op.surname);
        assert_eq!("Jr.", op.lineage_suffix);
        assert_eq!(&["PhD".to_string()], &op.credentials[..]);
        assert_eq!("Jack", op.nickname);
        assert_eq!("Jr., PhD", op.combined_suffix());
        assert!(op.remaining.is_empty());
    }

    #[test]
    fn slots_keep_input_case() {
        let op = parse_default("dr. jane van der berg");
        assert_eq!("dr.", op.prefix);
        assert_eq!("jane", op.given_name);
        assert_eq!("van der berg", op.surname);
    }

    #[test]
    fn whitespace_collapsed() {
        let op = parse_default("  Mary \t Jane\n  Watson-Parker ");
        assert_eq!("Mary", op.given_name);
        assert_eq!("Jane", op.middle_names);
        assert_eq!("Watson-Parker", op.surname);
    }

    #[test]
    fn nickname_shields_credential() {
        let op = parse_default("John (MD) Smith");
        assert_eq!("MD", op.nickname);
        assert!(op.credentials.is_empty());
        assert_eq!("John", op.given_name);
        assert_eq!("Smith", op.surname);
    }

    #[test]
    fn suffix_then_prefix() {
        // "Sr" is both an honorific and a lineage marker; lineage runs first
        let op = parse_default("Sr. Maria Lopez Sr.");
        assert_eq!("Sr.", op.lineage_suffix);
        assert_eq!("Sr.", op.prefix);
        assert_eq!("Maria", op.given_name);
        assert_eq!("Lopez", op.surname);
    }

    #[test]
    fn lone_lineage_word() {
        let op = parse_default("III");
        assert_eq!("", op.lineage_suffix);
        assert_eq!("III", op.surname);
    }

    #[test]
    fn prefix_only() {
        let op = parse_default("Mr. Jr.");
        assert_eq!("Jr.", op.lineage_suffix);
        assert_eq!("Mr.", op.prefix);
        assert_eq!("", op.surname);
    }

    #[test]
    fn last_first() {
        let config = ParserConfig::default().with_order(NameOrder::LastFirst);
        let op = parse("Dr. Zhang Wei Ming", &config).unwrap();
        assert_eq!("Dr.", op.prefix);
        assert_eq!("Zhang", op.surname);
        assert_eq!("Wei", op.given_name);
        assert_eq!("Ming", op.middle_names);
    }

    #[test]
    fn empty() {
        let config = ParserConfig::default();
        assert_eq!(ParseError::EmptyInput, parse("", &config).unwrap_err());
        assert_eq!(ParseError::EmptyInput, parse(" \t\n ", &config).unwrap_err());
    }

    #[test]
    fn too_long() {
        let config = ParserConfig::default().with_max_length(10);
        assert_eq!(
            ParseError::TooLong { max_length: 10 },
            parse("This name is longer than ten", &config).unwrap_err()
        );
        assert!(parse("Jane Doe", &config).is_ok());
    }

    #[test]
    fn max_length_counts_chars() {
        let config = ParserConfig::default().with_max_length(8);
        assert!(parse("Zoë Núñez", &config).is_err());
        assert!(parse("Zoë Núñ", &config).is_ok());
    }

    #[test]
    fn empty_checked_before_length() {
        let config = ParserConfig::default().with_max_length(2);
        assert_eq!(ParseError::EmptyInput, parse("       ", &config).unwrap_err());
    }
}
