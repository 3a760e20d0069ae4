use std::fmt;

/// Result type for tirescan-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Response decoding error
    Types(tirescan_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// HTTP client could not be constructed
    Http(reqwest::Error),

    /// Configuration error (missing API key, malformed config file, ...)
    Config(String),

    /// User-supplied input is unusable (missing or unreadable photo)
    Input(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "Response error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Http(err) => write!(f, "HTTP client error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Input(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Config(_) | Error::Input(_) => None,
        }
    }
}

impl From<tirescan_types::Error> for Error {
    fn from(err: tirescan_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
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
