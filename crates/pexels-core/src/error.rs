//! Error types for the Pexels asset source.
//!
//! Every operation in the workspace fails with [`Error`]. The variants mirror
//! what the media library shows to an editor: a setup problem, a connection
//! problem, a missing photo, or an unsupported call.

use thiserror::Error;

/// The unified error type for asset source operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The source is not usable with its current settings (no API key,
    /// invalid proxy). Raised before any network attempt.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Fetching a page or opening an import stream failed.
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),

    /// A photo id was never observed in a fetched page.
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// The called operation is not supported by this source.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },

    /// Positional access past the end of a result page.
    #[error("index {index} is out of range for a page of {len} photos")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Returns true if this error points at missing or invalid settings.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Returns true if this error came from the network.
    pub fn is_transfer(&self) -> bool {
        matches!(self, Error::Transfer(_))
    }

    /// Returns true if a lookup did not find a photo.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Setup errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No API key was configured.
    #[error(
        "no API key for Pexels was defined; get one at https://www.pexels.com/api/ and add it to your settings"
    )]
    MissingApiKey,

    /// The API key cannot be sent as a header value.
    #[error("the configured API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    /// The outbound proxy URL could not be used.
    #[error("invalid proxy '{value}': {reason}")]
    InvalidProxy { value: String, reason: String },

    /// The API base URL could not be parsed.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    HttpClient { message: String },
}

/// Network and transport errors.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Connection to the remote host failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The outbound proxy refused or failed the request.
    #[error("proxy error: {message}")]
    Proxy { message: String },

    /// The remote answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

/// Lookup errors.
#[derive(Debug, Error)]
pub enum NotFoundError {
    /// The photo id was not found in the photo cache.
    #[error("photo with id {id} was not found in the cache")]
    Photo { id: String },
}
