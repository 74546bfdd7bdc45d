use thiserror::Error;

/// Unified error type for git-semrel operations
#[derive(Error, Debug)]
pub enum SemrelError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Version parsing error: {0}")]
    Semver(#[from] semver::Error),

    #[error("Unknown commit format '{0}'")]
    UnknownGrammar(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semrel
pub type Result<T> = std::result::Result<T, SemrelError>;

impl SemrelError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemrelError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SemrelError::Version(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        SemrelError::Repository(msg.into())
    }
}
