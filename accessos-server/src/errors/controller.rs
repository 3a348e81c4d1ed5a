use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Controller unreachable: {0}")]
    Unreachable(String),

    #[error("{0}")]
    LoginRejected(String),

    #[error("Controller session expired")]
    SessionExpired,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Controller replied with status {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed controller reply: {0}")]
    MalformedReply(String),
}

impl ControllerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ControllerError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ControllerError::LoginRejected(_) => StatusCode::UNAUTHORIZED,
            ControllerError::SessionExpired => StatusCode::UNAUTHORIZED,
            ControllerError::NotFound(_) => StatusCode::NOT_FOUND,
            ControllerError::UnexpectedStatus(_) => StatusCode::BAD_GATEWAY,
            ControllerError::MalformedReply(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Text returned to callers. Transport details name internal controller
    /// addresses and stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            ControllerError::Unreachable(_) => String::from("Controller unreachable"),
            ControllerError::MalformedReply(_) => String::from("Malformed controller reply"),
            e => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for ControllerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ControllerError::MalformedReply(err.to_string())
        } else {
            ControllerError::Unreachable(err.to_string())
        }
    }
}
