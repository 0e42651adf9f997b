//! Error type shared by the non-network crates
//!
//! Two failure classes cover everything the core itself can get wrong:
//! bad input and a failed storage access. Network failures live in the
//! request client's own error type, where the rejected envelope body
//! must survive verbatim.

/// Failure raised by core operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum BacklogError {
    /// The caller supplied something the operation cannot work with,
    /// such as a malformed config file or an address missing its
    /// trailing slash
    #[error("Invalid: {message}")]
    Invalid {
        /// What was wrong with the input
        message: String,
    },

    /// Reading persisted state failed
    #[error("Storage error: {message}")]
    Storage {
        /// What the storage layer reported
        message: String,
    },
}

impl BacklogError {
    /// Invalid-input failure
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Result alias over [`BacklogError`]
pub type Result<T> = std::result::Result<T, BacklogError>;
