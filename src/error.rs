//! Error types for metricmeta.

/// Result type alias for metricmeta operations.
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Errors that can occur when talking to the metadata API.
///
/// The client performs no local recovery: transport and service failures are
/// surfaced as-is for the caller to handle.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Failed to construct the client.
    #[error("Failed to build client: {0}")]
    BuildError(String),

    /// Credential material is missing or malformed.
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// The HTTP request could not be completed.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The service rejected the request with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    ApiError {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    DecodeError(String),
}
