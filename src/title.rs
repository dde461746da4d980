use crate::utils::{normalize_word, split_words};

static HONORIFIC_PREFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/honorific_prefixes.rs"));

pub fn is_prefix(word: &str) -> bool {
    HONORIFIC_PREFIXES.contains(&*normalize_word(word))
}

pub fn find_prefix_len(words: &[&str]) -> usize {
    words.iter().take_while(|w| is_prefix(w)).count()
}

/// Removes every leading honorific ("Dr. Prof. ...") and returns them
/// space-joined, in input order.
pub fn strip_prefixes(remaining: &mut String) -> Option<String> {
    let words = split_words(remaining);
    let prefix_len = find_prefix_len(&words);
    if prefix_len == 0 {
        return None;
    }

    let prefix = words[..prefix_len].join(" ");
    let rest = words[prefix_len..].join(" ");
    drop(words);
    *remaining = rest;
    Some(prefix)
}
