use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("The provided name cannot be empty.")]
    EmptyInput,

    #[error("Name exceeds maximum length of {max_length} characters")]
    TooLong { max_length: usize },

    #[error("Unknown name order {0:?} (expected \"first-last\" or \"last-first\")")]
    UnknownOrder(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
