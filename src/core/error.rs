use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Value cannot be empty")]
    EmptyValue,

    #[error("Value is not a number: '{0}'")]
    NotANumber(String),

    #[error("Negative numbers are not allowed: '{0}'")]
    NegativeNumber(String),

    #[error("Only letters are allowed: '{0}'")]
    NonAlphabetic(String),

    #[error("Symbol must be one or two letters: '{0}'")]
    InvalidSymbolLength(String),

    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("Lock error: {0}")]
    LockError(String),
}

pub type Result<T> = std::result::Result<T, TableError>;

impl TableError {
    /// Message shown next to the input when a proposed edit is rejected.
    ///
    /// The wording is part of the UI contract, so it is fixed here rather
    /// than left to the caller.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyValue => "Value cannot be empty!",
            Self::NonAlphabetic(_) => "Please enter only letters!",
            Self::InvalidSymbolLength(_) => "Please enter only one or two characters!",
            Self::NegativeNumber(_) => "Please enter only positive numbers!",
            Self::NotANumber(_) => "Please enter only numbers!",
            Self::IndexOutOfRange(_) => "The edited row is no longer present!",
            Self::LockError(_) => "Internal error!",
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for TableError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}
