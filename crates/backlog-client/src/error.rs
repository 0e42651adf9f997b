//! Request client errors
//!
//! Three kinds of failure, matching how the service communicates:
//! transport problems, envelope rejections (the service's own error
//! payload, preserved verbatim), and decode failures on our side.

/// Errors produced by the authenticated request client
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// Network unreachable, connection failure, or a non-JSON body
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the underlying transport failure
        message: String,
    },

    /// Well-formed JSON without a `data` field: the service's rejection
    ///
    /// Carries the parsed body unchanged; this is how the service reports
    /// validation and authentication failures.
    #[error("Rejected by service: {body}")]
    Rejected {
        /// The parsed response body, verbatim
        body: serde_json::Value,
    },

    /// A successful payload that does not match the expected shape
    #[error("Decode error: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },
}

impl ClientError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a rejection carrying the service's body
    pub fn rejected(body: serde_json::Value) -> Self {
        Self::Rejected { body }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The rejection body, if this is an envelope rejection
    pub fn rejection_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Rejected { body } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

/// Standard Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
