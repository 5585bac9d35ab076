use thiserror::Error;

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Programmer error, raised before any I/O
    #[error("Invalid endpoint: {0:?}")]
    InvalidEndpoint(String),

    /// The server could not be reached at all
    #[error("Cannot connect to server at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx status but the body is not JSON
    #[error("Invalid JSON response: {0}")]
    MalformedResponse(String),

    /// Valid JSON that does not match the expected envelope or entity
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// The request could not be assembled (body serialization, bad mime type)
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    /// HTTP status for server rejections, `None` otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server was reachable but refused or failed the request
    pub fn is_http(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable { .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::UnexpectedShape(err.to_string())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
