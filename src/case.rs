#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::chars_from_u32(x, y, 0)
    }

    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::chars_from_u32(x, y, z)
    }

    // Zero marks the end of a mapping; a leading zero means the character
    // maps to itself
    #[inline]
    fn chars_from_u32(x: u32, y: u32, z: u32) -> CaseMapping {
        match (char::from_u32(x), char::from_u32(y), char::from_u32(z)) {
            _ if x == 0 => CaseMapping::Empty,
            (Some(x), _, _) if y == 0 => CaseMapping::Single(x),
            (Some(x), Some(y), _) if z == 0 => CaseMapping::Double(x, y),
            (Some(x), Some(y), Some(z)) => CaseMapping::Triple(x, y, z),
            _ => CaseMapping::Empty,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

/// Title-cases each word: the first cased code point of a word goes to
/// titlecase and every later one to lowercase. A word starts after any
/// character that is neither cased nor case-ignorable, so "(jack" becomes
/// "(Jack" while "o'connor" becomes "O'connor".
pub fn capitalize_word(word: &str) -> String {
    if word.is_ascii() {
        let mut capitalize_next = true;
        word.chars()
            .map(|c| {
                let mapped = if capitalize_next {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                };
                if c.is_ascii_alphabetic() {
                    capitalize_next = false;
                } else if !is_case_ignorable(c) {
                    capitalize_next = true;
                }
                mapped
            })
            .collect()
    } else {
        let mut capitalize_next = true;
        let mut result = String::with_capacity(word.len());

        for c in word.chars() {
            let mapped = if capitalize_next {
                CaseMapping::titlecase(c)
            } else {
                CaseMapping::lowercase(c)
            };

            if matches!(mapped, CaseMapping::Empty) {
                result.push(c);
            } else {
                result.extend(mapped);
            }

            if is_cased(c) {
                capitalize_next = false;
            } else if !is_case_ignorable(c) {
                capitalize_next = true;
            }
        }

        result
    }
}

#[inline]
fn is_cased(c: char) -> bool {
    c.is_lowercase()
        || c.is_uppercase()
        || !matches!(CaseMapping::lowercase(c), CaseMapping::Empty)
}

// Apostrophes, periods and other word-internal punctuation, plus combining
// marks and modifier letters, which continue the current word
fn is_case_ignorable(c: char) -> bool {
    matches!(
        c,
        '\'' | '.' | ':' | '^' | '`' | '\u{a8}' | '\u{ad}' | '\u{af}' | '\u{b4}' | '\u{b7}'
            | '\u{b8}' | '\u{2018}' | '\u{2019}' | '\u{2024}' | '\u{2027}'
            | '\u{2b0}'..='\u{36f}'
            | '\u{1ab0}'..='\u{1aff}'
            | '\u{1dc0}'..='\u{1dff}'
            | '\u{200b}'..='\u{200f}'
            | '\u{20d0}'..='\u{20ff}'
            | '\u{fe00}'..='\u{fe0f}'
            | '\u{fe20}'..='\u{fe2f}'
    )
}

/// True for words like "McDonald": capitalized, with another capital later.
pub fn has_internal_caps(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.any(char::is_uppercase),
        _ => false,
    }
}
