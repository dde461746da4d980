use crate::config::NameOrder;
use crate::utils::{lowercase, split_words};
use std::collections::VecDeque;

static SURNAME_PARTICLES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/surname_particles.rs"));

pub fn is_particle(word: &str) -> bool {
    SURNAME_PARTICLES.contains(&*lowercase(word))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct NameSplit {
    pub given_name: String,
    pub middle_names: String,
    pub surname: String,
}

/// Apportions what's left of a name into given, middle and surname.
///
/// Particles ("van", "de", ...) adjacent to the surname anchor are absorbed
/// into it; the anchor itself may be any word.
pub fn split_name(text: &str, order: NameOrder) -> NameSplit {
    let mut words: VecDeque<&str> = split_words(text).into_iter().collect();
    let mut surname: VecDeque<&str> = VecDeque::with_capacity(words.len());

    match order {
        NameOrder::FirstLast => {
            if let Some(anchor) = words.pop_back() {
                surname.push_back(anchor);
            }
            while let Some(word) = words.back().copied().filter(|w| is_particle(w)) {
                words.pop_back();
                surname.push_front(word);
            }
        }
        NameOrder::LastFirst => {
            if let Some(anchor) = words.pop_front() {
                surname.push_back(anchor);
            }
            while let Some(word) = words.front().copied().filter(|w| is_particle(w)) {
                words.pop_front();
                surname.push_back(word);
            }
        }
    }

    let given_name = words.pop_front().unwrap_or_default().to_string();

    NameSplit {
        given_name,
        middle_names: join(words),
        surname: join(surname),
    }
}

fn join(words: VecDeque<&str>) -> String {
    words.into_iter().collect::<Vec<_>>().join(" ")
}
