use std::fmt;

/// Everything a client call can fail with. Each API function performs exactly
/// one round trip, so callers see exactly one of these per call.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request was aborted at the configured deadline. No status code.
    Timeout,
    /// The request never produced a response (DNS, refused connection, ...).
    Network(String),
    /// The server answered with a non-2xx status.
    Http { status: u16, message: String },
    /// A 2xx body did not match the expected shape.
    Decode(String),
    /// Rejected client-side before any round trip.
    Validation(String),
}

impl ApiError {
    /// 401/403 responses force a session teardown.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Timeout => {
                write!(f, "Request timed out. The server may be slow to respond - please try again.")
            }
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, message } => write!(f, "{} (status {})", message, status),
            ApiError::Decode(msg) => write!(f, "Unexpected response from server: {}", msg),
            ApiError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Best-effort message out of an error body: a structured `message` or
/// `error` field when the body parses as JSON, the raw text otherwise.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return Some(msg.to_string());
                }
            }
        }
    }
    Some(trimmed.to_string())
}
