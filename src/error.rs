/// Client-level errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),

    #[error("Server returned status {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::MalformedResponse(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::MalformedResponse(err.to_string())
    }
}

impl ClientError {
    /// Text shown to the user when this error ends a user-visible operation.
    ///
    /// A server-provided message wins; a bare non-success status falls back
    /// to `default`; transport and parse failures surface their own text.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ClientError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Server { message: None, .. } => default.to_string(),
            other => other.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "Failed to fetch recommendations";

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ClientError::Server {
            status: 400,
            message: Some("bad genre".to_string()),
        };
        assert_eq!(err.user_message(DEFAULT), "bad genre");
    }

    #[test]
    fn test_user_message_defaults_without_server_message() {
        let err = ClientError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(DEFAULT), DEFAULT);
    }

    #[test]
    fn test_user_message_transport_is_verbatim() {
        let err = ClientError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(DEFAULT), "connection refused");
    }

    #[test]
    fn test_server_error_display() {
        let err = ClientError::Server {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "Server returned status 503: no error message");
    }
}
