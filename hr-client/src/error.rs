//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request itself failed (DNS, connect, timeout)
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    /// A success response carried a body that wasn't valid JSON
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract the server's `error` message from a failed response body,
    /// if the body was JSON and carried one. Malformed bodies yield
    /// `None` rather than a second error.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ClientError::Request { body, .. } => crate::http::safe_decode(body)?
                .get("error")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_reads_error_field() {
        let err = ClientError::Request {
            status: 401,
            body: r#"{"error": "bad credentials"}"#.to_string(),
        };
        assert_eq!(err.server_message().as_deref(), Some("bad credentials"));
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn malformed_body_yields_no_message() {
        let err = ClientError::Request {
            status: 500,
            body: "<html>Internal Server Error</html>".to_string(),
        };
        assert_eq!(err.server_message(), None);
    }
}
