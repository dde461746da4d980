use crate::utils::{is_comma_or_space, is_word_char, normalize_word, split_words};
use smallvec::SmallVec;
use std::ops::Range;

static LINEAGE_SUFFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/lineage_suffixes.rs"));

// Ordered: matches are reported in this order, not input order
static PROFESSIONAL_SUFFIXES: &[&str] =
    include!(concat!(env!("OUT_DIR"), "/professional_suffixes.rs"));

pub type Credentials = SmallVec<[String; 2]>;

pub fn is_lineage_suffix(word: &str) -> bool {
    LINEAGE_SUFFIXES.contains(&*normalize_word(word))
}

/// Removes the last word if it's a generational marker ("Jr.", "III"),
/// unless it's the only word left.
pub fn strip_lineage_suffix(remaining: &mut String) -> Option<String> {
    let words = split_words(remaining);
    let (&last, rest) = words.split_last()?;
    if rest.is_empty() || !is_lineage_suffix(last) {
        return None;
    }

    let suffix = last.to_string();
    let rest = rest.join(" ");
    drop(words);
    *remaining = rest;
    Some(suffix)
}

/// Removes every credential in the table that occurs in `remaining`
/// ("PhD", "M.D.", ...), along with any commas or spaces in front of it.
/// Later copies of the same matched text are dropped too, but each
/// credential is reported once.
pub fn strip_credentials(remaining: &mut String) -> Credentials {
    let mut found = Credentials::new();

    for credential in PROFESSIONAL_SUFFIXES {
        let span = match find_credential(remaining, credential, 0) {
            Some(span) => span,
            None => continue,
        };

        let matched = remaining[span.clone()].to_string();
        found.push(matched.trim_matches(is_comma_or_space).to_string());
        remaining.replace_range(span.clone(), "");

        let mut from = span.start;
        while let Some(span) = find_credential(remaining, credential, from) {
            if remaining[span.clone()] == *matched {
                from = span.start;
                remaining.replace_range(span, "");
            } else {
                from = span.end;
            }
        }
    }

    if !found.is_empty() {
        let trimmed = remaining.trim_matches(is_comma_or_space);
        if trimmed.len() != remaining.len() {
            *remaining = trimmed.to_string();
        }
    }

    found
}

// The span covers a case-insensitive whole-word match of `credential`,
// widened backward over a comma/space run and forward over a single period.
// Only matches starting at or after `from` are considered.
fn find_credential(text: &str, credential: &str, from: usize) -> Option<Range<usize>> {
    let needle = credential.as_bytes();
    debug_assert!(!needle.is_empty() && credential.is_ascii());

    let haystack = text.as_bytes();
    let mut from = from;

    while from + needle.len() <= haystack.len() {
        let start = from
            + haystack[from..]
                .windows(needle.len())
                .position(|w| w.eq_ignore_ascii_case(needle))?;
        let end = start + needle.len();

        // Both ends fall on ASCII bytes, so slicing here is on char boundaries
        let bounded_before = !text[..start].chars().next_back().map_or(false, is_word_char);
        let bounded_after = !text[end..].chars().next().map_or(false, is_word_char);

        if bounded_before && bounded_after {
            let span_start = text[..start].trim_end_matches(is_comma_or_space).len();
            let span_end = if text[end..].starts_with('.') {
                end + 1
            } else {
                end
            };
            return Some(span_start..span_end);
        }

        from = start + 1;
    }

    None
}
