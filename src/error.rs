use crate::model::ListKind;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum NotsError {
    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("{list} index {index} is out of range (length {len})")]
    IndexOutOfRange {
        list: ListKind,
        index: usize,
        len: usize,
    },

    #[error("Empty input: {0} must not be blank")]
    EmptyInput(&'static str),

    #[error("Unsupported media format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, NotsError>;
