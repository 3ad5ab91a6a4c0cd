use thiserror::Error;

/// Unified error type for git-autotag operations
#[derive(Error, Debug)]
pub enum AutoTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-autotag
pub type Result<T> = std::result::Result<T, AutoTagError>;

impl AutoTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoTagError::Config(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        AutoTagError::Branch(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        AutoTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        AutoTagError::Remote(msg.into())
    }
}
