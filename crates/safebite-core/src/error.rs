//! Error types for the `SafeBite` dashboard

use std::{error::Error as StdError, fmt};

/// Main error type for the `SafeBite` dashboard
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Missing or rejected session token
    Authentication(String),

    /// Backend returned a non-success HTTP status
    Http {
        /// HTTP status code
        status: u16,
        /// Status text or body excerpt
        message: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// CSV export error
    Export(String),

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Authentication(msg) => write!(f, "Authentication failed: {msg}"),
            Self::Http { status, message } => {
                write!(f, "Backend returned {status}: {message}")
            }
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Export(msg) => write!(f, "Export error: {msg}"),
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        match app_error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }

        assert!(format!("{app_error}").contains("I/O error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Invalid backend URL".to_string(),
        };

        assert_eq!(
            format!("{error}"),
            "Configuration error: Invalid backend URL"
        );
    }

    #[test]
    fn test_authentication_error() {
        let error = Error::Authentication("no session token in storage".to_string());
        assert_eq!(
            format!("{error}"),
            "Authentication failed: no session token in storage"
        );
    }

    #[test]
    fn test_http_error() {
        let error = Error::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };

        assert_eq!(format!("{error}"), "Backend returned 503: Service Unavailable");
    }

    #[test]
    fn test_not_found_error() {
        let error = Error::NotFound {
            resource: "device 42".to_string(),
        };

        assert_eq!(format!("{error}"), "Resource not found: device 42");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_str = r#"{"invalid": json}"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(format!("{app_error}").contains("Serialization error"));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_other_error() {
        let error = Error::Other("Unexpected error occurred".to_string());
        assert_eq!(format!("{error}"), "Unexpected error occurred");
    }

    #[test]
    fn test_error_source_for_plain_variants() {
        let error = Error::Configuration {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());

        let error = Error::Authentication("test".to_string());
        assert!(error.source().is_none());

        let error = Error::Export("broken writer".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
