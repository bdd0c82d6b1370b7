//! Error types for source parameter encoding

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors raised while encoding or parsing source parameters
///
/// Building parameters never fails. Business-rule failures (bad IBAN,
/// unsupported currency) are reported by the remote service, not here.
#[derive(Error, Debug)]
pub enum SourceError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bracketed form serialization error
    #[error("Form serialization error: {0}")]
    Qs(#[from] serde_qs::Error),

    /// The value could not be turned into a form body
    #[error("Form encoding error: {message}")]
    Encoding { message: String },

    /// A wire string did not name a known value
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },
}

impl SourceError {
    /// Create a form encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SourceError::invalid_value("source flow", "teleport");
        assert_eq!(err.to_string(), "Invalid source flow: teleport");

        let err = SourceError::encoding("top-level value must be an object");
        assert_eq!(
            err.to_string(),
            "Form encoding error: top-level value must be an object"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SourceError = json_err.into();
        assert!(matches!(err, SourceError::Json(_)));
    }
}
