use std::fmt;

use thiserror::Error;

/// Crate-level error returned by every public operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be configured (missing token, unreadable rc file).
    #[error("configuration error: {0}")]
    Config(String),

    /// A request was rejected before any network call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request reached the transport and failed there.
    #[error("{endpoint} failed: {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: TransportError,
    },
}

impl Error {
    pub(crate) fn request(endpoint: Endpoint, source: TransportError) -> Self {
        Self::Request { endpoint, source }
    }

    /// The endpoint that failed, for errors raised after validation.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Request { endpoint, .. } => Some(*endpoint),
            _ => None,
        }
    }

    /// The structured API error, if the server answered with a non-2xx status.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Request {
                source: TransportError::Api(e),
                ..
            } => Some(e),
            _ => None,
        }
    }

    /// Shorthand for `api_error().map(|e| e.kind)`.
    pub fn kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(|e| e.kind)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Client-side validation failures. These never reach the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be between {min} and {max}, got {value}")]
    CoordinateOutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("limit must be between {min} and {max}, got {value}")]
    LimitOutOfRange { min: u32, max: u32, value: u32 },

    #[error("at least one address component is required")]
    NoAddressComponent,

    #[error("either proximity, bbox, or a search-along-route route is required")]
    NoSearchArea,

    #[error("batch must contain between 1 and {max} queries, got {count}")]
    BatchSize { count: usize, max: usize },

    #[error(
        "query at index {index}: must specify either 'q' (forward) or 'longitude'+'latitude' (reverse)"
    )]
    BatchQueryEmpty { index: usize },

    #[error("query at index {index}: cannot specify both 'q' and 'longitude'+'latitude'")]
    BatchQueryAmbiguous { index: usize },

    #[error("query at index {index}: {source}")]
    BatchQueryInvalid {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Failures raised by [`Transport`](crate::Transport) once a request is dispatched.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network or protocol failure. The request URL is stripped.
    #[error("failed to execute request: {0}")]
    Http(#[source] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Semantic classes of HTTP failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    InvalidToken,
    NotFound,
    InvalidRequest,
    RateLimited,
    ServerError,
    /// Any other non-2xx status; the code is kept on [`ApiError::status`].
    Other,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::InvalidToken,
            404 => Self::NotFound,
            422 => Self::InvalidRequest,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidToken => "invalid or missing access token",
            Self::NotFound => "resource not found",
            Self::InvalidRequest => "invalid request",
            Self::RateLimited => "rate limit exceeded",
            Self::ServerError => "server error",
            Self::Other => "API error",
        };
        f.write_str(s)
    }
}

/// A non-2xx response, classified by status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>, code: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {}): {}", self.kind, self.status, self.message)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Error body the API sends with non-2xx responses.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) code: Option<String>,
}

/// Builds the [`ApiError`] for a failed response. Falls back to the status line
/// when the body is not a `{message, code}` envelope.
pub(crate) fn api_error_from_body(status: reqwest::StatusCode, body: &[u8]) -> ApiError {
    let envelope = serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| match e.message {
            Some(message) if !message.is_empty() => Some((message, e.code)),
            _ => None,
        });

    match envelope {
        Some((message, code)) => ApiError::new(status.as_u16(), message, code),
        None => ApiError::new(status.as_u16(), status.to_string(), None),
    }
}

/// Identifies which operation produced an [`Error::Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ForwardGeocode,
    StructuredForwardGeocode,
    ReverseGeocode,
    BatchGeocode,
    Suggest,
    Retrieve,
    ForwardSearch,
    CategorySearch,
    ListCategories,
    ReverseSearch,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ForwardGeocode => "forward geocoding",
            Self::StructuredForwardGeocode => "structured forward geocoding",
            Self::ReverseGeocode => "reverse geocoding",
            Self::BatchGeocode => "batch geocoding",
            Self::Suggest => "suggest search",
            Self::Retrieve => "retrieve feature",
            Self::ForwardSearch => "forward search",
            Self::CategorySearch => "category search",
            Self::ListCategories => "list categories",
            Self::ReverseSearch => "reverse search",
        };
        f.write_str(s)
    }
}
