use thiserror::Error;

/// Failures the solver can surface to a caller.
///
/// None of these are retried internally; a failed solve is handed back
/// whole for the caller to decide what to do with it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("contradiction at output cell ({x}, {y})")]
    Contradiction { x: usize, y: usize },

    #[error("out of memory")]
    OutOfMemory,
}

pub type Result<T> = std::result::Result<T, Error>;
