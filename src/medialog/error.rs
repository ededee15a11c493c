use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaLogError {
    /// User-supplied text failed validation. The message is shown verbatim.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Terminal I/O error: {0}")]
    Terminal(std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Entry not found at position {0}")]
    EntryNotFound(usize),
}

impl MediaLogError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, MediaLogError>;
