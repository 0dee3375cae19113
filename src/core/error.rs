use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum BtcError {
    /// The configuration file does not exist where an operation expected it.
    #[error("config not found at {}", path.display())]
    ConfigNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The configuration file exists but could not be parsed.
    #[error("invalid config at {}: {message}", path.display())]
    ConfigFormat {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// The configuration record could not be serialized.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The home directory of the invoking user could not be determined.
    #[error("unable to determine the home directory")]
    HomeDirUnavailable,

    /// The configured backend identifier is not one the factory knows.
    #[error("unsupported API backend: {backend:?}")]
    UnsupportedBackend {
        /// The identifier as it appeared in the config.
        backend: String,
    },

    /// The quote service could not be reached or answered with a failure.
    #[error(transparent)]
    ApiFetch(#[from] ApiFetchError),

    /// The quote service answered, but the price was not where it should be.
    #[error("{backend}: unable to parse price data ({reason})")]
    Parse {
        /// The backend whose response failed to parse.
        backend: &'static str,
        /// What was missing or malformed.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl BtcError {
    /// True when the error means `btcget init` has not been run yet.
    #[must_use]
    pub const fn is_config_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }
}

/// A failed round trip to a quote service.
#[derive(Debug, Error)]
pub enum ApiFetchError {
    /// The request never produced a response (connect failure, timeout, redirect loop).
    #[error("unable to connect to API URL {url}")]
    Unreachable {
        /// The endpoint that was requested.
        url: String,
    },

    /// The request could not be built, so nothing was sent
    /// (e.g. the API key is not a valid header value).
    #[error("invalid request for {url}: check the configured API key")]
    InvalidRequest {
        /// The endpoint that would have been requested.
        url: String,
    },

    /// The server returned a non-success HTTP status code.
    #[error("HTTP response was not 200 OK, got status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },
}

impl ApiFetchError {
    /// The HTTP status, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unreachable { .. } | Self::InvalidRequest { .. } => None,
        }
    }
}
