use std::fmt;

/// Result type for dynform-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Request could not be sent or the response body could not be read
    Http(reqwest::Error),

    /// Server answered with a non-success status
    Status { status: u16, message: String },

    /// Service refused the request (message comes from the server)
    Rejected(String),

    /// Schema document error
    Schema(dynform_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Network error: {}", err),
            Error::Status { message, .. } => write!(f, "{}", message),
            Error::Rejected(message) => write!(f, "{}", message),
            Error::Schema(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Schema(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Status { .. } | Error::Rejected(_) | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<dynform_types::Error> for Error {
    fn from(err: dynform_types::Error) -> Self {
        Error::Schema(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
