use super::case::{capitalize_word, has_internal_caps};
use super::surname::is_particle;
use std::borrow::Cow;

/// Normalizes the capitalization of one name field.
///
/// Hyphenated values are title-cased segment by segment. Otherwise particles
/// are lowercased, and words that already carry internal capitals
/// ("McDonald") are left alone.
pub fn namecase(name: &str, preserve_case: bool) -> Cow<str> {
    if preserve_case || name.is_empty() {
        return Cow::Borrowed(name);
    }

    if name.contains('-') {
        Cow::Owned(
            name.split('-')
                .map(namecase_word)
                .collect::<Vec<_>>()
                .join("-"),
        )
    } else {
        Cow::Owned(
            name.split(' ')
                .map(|word| {
                    if is_particle(word) {
                        Cow::Owned(word.to_lowercase())
                    } else {
                        namecase_word(word)
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

fn namecase_word(word: &str) -> Cow<str> {
    if word.is_empty() || has_internal_caps(word) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(capitalize_word(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        assert_eq!("John", namecase("john", false));
        assert_eq!("John", namecase("jOHN", false));
        assert_eq!("Michael Paul", namecase("michael paul", false));
    }

    #[test]
    fn preserve() {
        assert_eq!("mcdonald", namecase("mcdonald", true));
        assert_eq!("jOHN", namecase("jOHN", true));
    }

    #[test]
    fn empty() {
        assert_eq!("", namecase("", false));
    }

    #[test]
    fn internal_caps_kept() {
        assert_eq!("McDonald", namecase("McDonald", false));
        assert_eq!("MacElroy", namecase("MacElroy", false));
        assert_eq!("O'Connor", namecase("O'Connor", false));
        assert_eq!("SMITH", namecase("SMITH", false));
    }

    #[test]
    fn internal_caps_require_leading_capital() {
        assert_eq!("Macelroy", namecase("macElroy", false));
    }

    #[test]
    fn particles() {
        assert_eq!("van der Berg", namecase("Van Der berg", false));
        assert_eq!("de la Cruz", namecase("DE LA cruz", false));
    }

    #[test]
    fn hyphenated() {
        assert_eq!("Watson-Parker", namecase("watson-parker", false));
        assert_eq!("Smith-McDonald", namecase("smith-McDonald", false));
        assert_eq!("Jean-Luc", namecase("jean-luc", false));
        assert_eq!("JEAN-Luc", namecase("JEAN-luc", false));
    }

    #[test]
    fn hyphenated_segments_with_spaces() {
        assert_eq!("Van Der Berg-Smith", namecase("van der berg-smith", false));
    }

    #[test]
    fn unicode() {
        assert_eq!("José García", namecase("josé garcía", false));
        assert_eq!("Ñúñez", namecase("ñÚÑEZ", false));
    }

    #[test]
    fn idempotent() {
        for name in &[
            "john",
            "van der berg",
            "watson-parker",
            "o'connor",
            "McDonald",
            "ñÚÑEZ",
            "Dr. Prof.",
            "J.",
        ] {
            let once = namecase(name, false).into_owned();
            assert_eq!(once, namecase(&once, false), "namecasing {} is not idempotent", name);
        }
    }
}
