//! Error types for hotword-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the mining and graph operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MiningError {
    /// The search depth is zero or above [`MAX_SEARCH_DEPTH`](crate::mine::MAX_SEARCH_DEPTH).
    #[error(
        "invalid configuration: search depth must be between 1 and {max} (got {0})",
        max = crate::mine::MAX_SEARCH_DEPTH
    )]
    InvalidDepth(usize),

    /// The graph seed character never occurs in the buffer.
    #[error("seed character '{0}' does not occur in the text")]
    MissingSeed(char),

    /// No seed character was given for graph mode.
    #[error("invalid configuration: a seed character is required")]
    EmptySeed,
}

/// Result type alias using [`MiningError`].
pub type MiningResult<T> = Result<T, MiningError>;

/// Errors raised while producing the text buffer, before any mining runs.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The local file could not be read.
    #[error("source unavailable: failed to read {path}")]
    Read {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file or page exceeds the configured input limit.
    #[error("input too large: {name} is {size} bytes (limit: {max} bytes)")]
    TooLarge {
        /// Path or URL that was requested.
        name: String,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        max: usize,
    },

    /// The HTTP request failed before a response arrived.
    #[error("source unavailable: failed to fetch {url}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("source unavailable: failed to read the body of {url}")]
    Body {
        /// URL that was requested.
        url: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server answered with something other than 200.
    #[error("source unavailable: {url} returned HTTP {status}: {body}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Visible text of the error page.
        body: String,
    },

    /// The directory holding the page cache could not be created.
    #[error("page cache unavailable: failed to create {path}")]
    CacheDir {
        /// Directory that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The page cache could not be opened, read or written.
    #[error("page cache failed at {path}")]
    Cache {
        /// Cache database location.
        path: Utf8PathBuf,
        /// Underlying SQLite error.
        #[source]
        source: rusqlite::Error,
    },
}

/// Result type alias using [`SourceError`].
pub type SourceResult<T> = Result<T, SourceError>;
