use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeeperError {
    /// Wrong arity, missing keyword, unparseable number or date.
    #[error("{0}")]
    InvalidArgument(String),

    /// A field failed its validator.
    #[error("{0}")]
    InvalidFormat(String),

    /// A required text field was blank.
    #[error("{0}")]
    EmptyValue(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl KeeperError {
    /// Errors a command reports back to the user as a message. Everything
    /// else ends the session.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            KeeperError::InvalidArgument(_)
                | KeeperError::InvalidFormat(_)
                | KeeperError::EmptyValue(_)
                | KeeperError::NotFound(_)
                | KeeperError::DuplicateKey(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, KeeperError>;
