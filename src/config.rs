use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Which end of the name the surname is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum NameOrder {
    /// Western order, e.g. "John Michael Smith"
    #[default]
    #[cfg_attr(feature = "serialization", serde(rename = "first-last"))]
    FirstLast,
    /// Eastern order, e.g. "Zhang Wei"
    #[cfg_attr(feature = "serialization", serde(rename = "last-first"))]
    LastFirst,
}

impl NameOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            NameOrder::FirstLast => "first-last",
            NameOrder::LastFirst => "last-first",
        }
    }
}

impl fmt::Display for NameOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("first-last") {
            Ok(NameOrder::FirstLast)
        } else if s.eq_ignore_ascii_case("last-first") {
            Ok(NameOrder::LastFirst)
        } else {
            Err(ParseError::UnknownOrder(s.to_string()))
        }
    }
}

/// Options controlling a parse.
///
/// A config holds no state beyond these flags, so a single value can be
/// shared between any number of parses (and threads).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase", default))]
pub struct ParserConfig {
    pub strict_mode: bool,
    pub preserve_case: bool,
    pub max_length: usize,
    pub order: NameOrder,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            strict_mode: false,
            preserve_case: false,
            max_length: DEFAULT_MAX_LENGTH,
            order: NameOrder::FirstLast,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently informational only; parsing behaves the same either way.
    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    pub fn with_preserve_case(mut self, preserve_case: bool) -> Self {
        self.preserve_case = preserve_case;
        self
    }

    /// Inputs longer than this many characters are rejected. The limit counts
    /// Unicode scalar values, not bytes, so "Łukasz" is six characters long.
    /// A limit of zero is treated as one.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.max(1);
        self
    }

    pub fn with_order(mut self, order: NameOrder) -> Self {
        self.order = order;
        self
    }
}
