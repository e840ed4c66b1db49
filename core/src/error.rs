use std::fmt;

use http::StatusCode;
use thiserror::Error;

/// The error type for idcf-dns operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    server_message: Option<String>,
    reference: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A supplied attribute is not part of the resource schema
    InvalidAttributeName,

    /// A supplied value does not satisfy its type or pattern constraint
    InvalidAttributeType,

    /// An attribute required for the action is absent
    MissingAttribute,

    /// A supplied attribute is not permitted for the action
    UnnecessaryAttribute,

    /// The API answered with an HTTP status of 400 or above
    Api,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Request cannot be built (invalid header, uri or parameters)
    RequestInvalid,

    /// Unexpected errors (network, I/O, serialization, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            server_message: None,
            reference: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status returned by the API, only set for [`ErrorKind::Api`].
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Error message returned by the API, only set for [`ErrorKind::Api`].
    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    /// Error reference returned by the API, only set for [`ErrorKind::Api`].
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Check if this error was raised by attribute validation
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidAttributeName
                | ErrorKind::InvalidAttributeType
                | ErrorKind::MissingAttribute
                | ErrorKind::UnnecessaryAttribute
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an invalid attribute name error
    pub fn invalid_attribute_name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAttributeName, message)
    }

    /// Create an invalid attribute type error
    pub fn invalid_attribute_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAttributeType, message)
    }

    /// Create a missing attribute error
    pub fn missing_attribute(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingAttribute, message)
    }

    /// Create an unnecessary attribute error
    pub fn unnecessary_attribute(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnnecessaryAttribute, message)
    }

    /// Create an api error from a failed response.
    pub fn api(
        status: StatusCode,
        server_message: Option<&str>,
        reference: Option<&str>,
    ) -> Self {
        let message = format!(
            "HTTP status code: {}, Error message: {}, Reference: {}",
            status.as_u16(),
            server_message.unwrap_or_default(),
            reference.unwrap_or_default(),
        );

        Self {
            status: Some(status),
            server_message: server_message.map(str::to_string),
            reference: reference.map(str::to_string),
            ..Self::new(ErrorKind::Api, message)
        }
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidAttributeName => write!(f, "invalid attribute name"),
            ErrorKind::InvalidAttributeType => write!(f, "invalid attribute type"),
            ErrorKind::MissingAttribute => write!(f, "missing attribute"),
            ErrorKind::UnnecessaryAttribute => write!(f, "unnecessary attribute"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
