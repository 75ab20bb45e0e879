use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug)]
pub enum AuthApiError {
    /// Server rejected the request (non-2xx). Carries the message from
    /// the `{error}` body, or a generic fallback when the body was not
    /// in that shape.
    Rejected(StatusCode, String),
    /// Transport failure (unreachable server, timeout, malformed body).
    Transport(reqwest::Error),
}

impl AuthApiError {
    pub(crate) fn rejected(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|response| response.error)
            .unwrap_or_else(|_| format!("request failed with status {}", status));
        AuthApiError::Rejected(status, message)
    }

    /// The string to show the user. For server rejections this is the
    /// server's own message, verbatim.
    pub fn display_message(&self) -> String {
        match self {
            AuthApiError::Rejected(_, message) => message.clone(),
            AuthApiError::Transport(_) => "could not reach the server".to_string(),
        }
    }
}

impl std::fmt::Display for AuthApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthApiError::Rejected(status, message) => write!(f, "({}) {}", status, message),
            AuthApiError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for AuthApiError {}

impl From<reqwest::Error> for AuthApiError {
    fn from(value: reqwest::Error) -> Self {
        AuthApiError::Transport(value)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
    error: String,
}
