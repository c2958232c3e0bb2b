use std::fmt;

/// Result type for idlens-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Already-classified upstream failures.
///
/// These bypass the rendering engine entirely; the CLI shows them through
/// its separate error-display path.
#[derive(Debug)]
pub enum Error {
    /// The API rejected the configured key (HTTP 401)
    AuthRejected,

    /// Request quota exhausted (HTTP 429)
    RateLimited,

    /// The record is unavailable for legal reasons (HTTP 451)
    LegallyRestricted { details: String },

    /// Any other non-success answer from the API
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, TLS, timeout)
    Transport(ureq::Error),

    /// The response body was not the JSON we asked for
    Decode(String),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AuthRejected => write!(f, "Authentication rejected"),
            Error::RateLimited => write!(f, "Rate limit exceeded"),
            Error::LegallyRestricted { .. } => write!(f, "Unavailable for Legal Reasons"),
            Error::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Error::Transport(err) => write!(f, "Request failed: {}", err),
            Error::Decode(msg) => write!(f, "Malformed response: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Error::Transport(err)
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
