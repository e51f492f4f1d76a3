use thiserror::Error;

/// Errors that can occur while building a skill vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("vocabulary requires at least one token")]
    Empty,
    #[error("vocabulary token at position {0} is empty or whitespace-only")]
    BlankToken(usize),
}
