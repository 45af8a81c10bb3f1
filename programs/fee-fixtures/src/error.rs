use thiserror::Error;

use crate::request::FeeMode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("{}", .mode.missing_argument_message())]
    MissingArgument { mode: FeeMode },

    #[error("Invalid non-negative integer: {value:?}")]
    InvalidInteger { value: String },

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Arithmetic underflow")]
    Underflow,
}

impl FeeError {
    /// Missing inputs are reported on stdout and do not fail the process.
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, FeeError::MissingArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, FeeError>;
