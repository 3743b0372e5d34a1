use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::Timeout
        } else if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::from_status(status, None)
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}

impl RepositoryError {
    /// Maps a non-success status and the optional `{ message }` body.
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match (status, message) {
            (StatusCode::NOT_FOUND, _) => RepositoryError::NotFound,
            (status, Some(message)) if status.is_client_error() => {
                RepositoryError::Rejected(message)
            }
            (status, message) => RepositoryError::Status {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            RepositoryError::from_status(StatusCode::NOT_FOUND, Some("gone".into())),
            RepositoryError::NotFound
        ));
        assert!(matches!(
            RepositoryError::from_status(StatusCode::CONFLICT, Some("Already subscribed".into())),
            RepositoryError::Rejected(message) if message == "Already subscribed"
        ));
        assert_eq!(
            RepositoryError::from_status(StatusCode::BAD_GATEWAY, None).to_string(),
            "Unexpected status 502: Bad Gateway"
        );
    }
}
