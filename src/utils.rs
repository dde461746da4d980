use smallvec::SmallVec;
use std::borrow::Cow;

pub type Words<'a> = SmallVec<[&'a str; 7]>;

// Collapse every run of whitespace to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> Cow<str> {
    let text = text.trim();
    let mut prev_space = false;
    let already_collapsed = text.chars().all(|c| {
        let ok = (c == ' ' && !prev_space) || !c.is_whitespace();
        prev_space = c.is_whitespace();
        ok
    });

    if already_collapsed {
        Cow::Borrowed(text)
    } else {
        let mut result = String::with_capacity(text.len());
        for word in text.split_whitespace() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(word);
        }
        Cow::Owned(result)
    }
}

pub fn split_words(text: &str) -> Words<'_> {
    text.split_whitespace().collect()
}

pub fn lowercase(word: &str) -> Cow<str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

// Lowercase with periods removed, so "Jr." and "JR" both become "jr"
pub fn normalize_word(word: &str) -> Cow<str> {
    if word.contains('.') {
        Cow::Owned(word.replace('.', "").to_lowercase())
    } else {
        lowercase(word)
    }
}

#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
pub fn is_comma_or_space(c: char) -> bool {
    c == ',' || c == ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse() {
        assert_eq!("John Smith", collapse_whitespace("  John \t\n Smith  "));
        assert_eq!("John Smith", collapse_whitespace("John  Smith"));
        assert_eq!("", collapse_whitespace(" \t "));
    }

    #[test]
    fn collapse_borrows_when_clean() {
        assert!(matches!(collapse_whitespace("Jane Doe"), Cow::Borrowed(_)));
        assert!(matches!(collapse_whitespace("Jane\tDoe"), Cow::Owned(_)));
    }

    #[test]
    fn normalize() {
        assert_eq!("jr", normalize_word("Jr."));
        assert_eq!("phd", normalize_word("Ph.D."));
        assert_eq!("iii", normalize_word("III"));
        assert_eq!("van", normalize_word("van"));
    }

    #[test]
    fn words() {
        let words = split_words("Dr.  Jane Doe");
        assert_eq!(&["Dr.", "Jane", "Doe"], &words[..]);
        assert!(split_words("").is_empty());
    }
}
