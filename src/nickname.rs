use crate::utils::collapse_whitespace;
use std::ops::Range;

#[derive(Debug, PartialEq, Eq)]
struct NickSpan {
    outer: Range<usize>,
    inner: Range<usize>,
}

// Opening and closing delimiters are deliberately interchangeable: `"Bob)`
// and `(Bob"` both delimit a nickname, as does a stray quote followed by a
// later closing paren.
#[inline]
fn opens_nickname(c: char) -> bool {
    c == '(' || c == '"'
}

#[inline]
fn closes_nickname(c: char) -> bool {
    c == ')' || c == '"'
}

// Leftmost opener followed by at least one non-delimiter character and then
// a closer
fn find_nickname(input: &str) -> Option<NickSpan> {
    for (i, c) in input.char_indices() {
        if !opens_nickname(c) {
            continue;
        }

        let search_from = i + c.len_utf8();
        match input[search_from..].find(closes_nickname) {
            Some(0) => continue,
            Some(found_at) => {
                let close = search_from + found_at;
                return Some(NickSpan {
                    outer: i..close + 1,
                    inner: search_from..close,
                });
            }
            // No closer anywhere to the right, so no later opener can match either
            None => return None,
        }
    }

    None
}

/// Removes the first delimited nickname from `remaining`, along with any
/// later copies of the same delimited text, returning its trimmed inner text.
pub fn strip_nickname(remaining: &mut String) -> Option<String> {
    let NickSpan { outer, inner } = find_nickname(remaining)?;
    let nickname = remaining[inner].trim().to_string();

    let stripped = remaining.replace(&remaining[outer], "");
    *remaining = collapse_whitespace(&stripped).into_owned();

    Some(nickname)
}
