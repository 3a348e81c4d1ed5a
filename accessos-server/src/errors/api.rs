use super::{ControllerError, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("Controller error: {0}")]
    ControllerError(#[from] ControllerError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
