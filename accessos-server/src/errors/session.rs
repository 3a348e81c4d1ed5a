use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Missing session")]
    MissingSession,

    #[error("Invalid controller serial")]
    InvalidDevice,

    #[error("Invalid request body")]
    InvalidBody,
}

impl SessionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::MissingSession => StatusCode::UNAUTHORIZED,
            SessionError::InvalidDevice => StatusCode::BAD_REQUEST,
            SessionError::InvalidBody => StatusCode::BAD_REQUEST,
        }
    }
}
