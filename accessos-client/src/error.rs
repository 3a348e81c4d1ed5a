use std::error::Error as StdError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No session identifier in the store
    #[error("No session")]
    NoSession,

    /// The gateway refused the stored session
    #[error("Session expired")]
    SessionExpired,

    /// The controller refused the submitted credentials
    #[error("Login rejected: {0}")]
    LoginRejected(String),

    /// The request never produced a response
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The gateway answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// A body could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Whether retrying the same action later may succeed without logging in again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Network { .. } | ClientError::Serialization { .. } => true,
            ClientError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Text fit for showing to the operator.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::NoSession => "Please log in to continue.".into(),
            ClientError::SessionExpired => "Your session has expired. Please log in again.".into(),
            ClientError::LoginRejected(message) => message.clone(),
            ClientError::Network { .. } => {
                "Unable to reach the server. Check your connection and try again.".into()
            }
            ClientError::Status { message, .. } => message.clone(),
            ClientError::Serialization { .. } => "The server sent an unexpected response.".into(),
            ClientError::NotFound { resource } => format!("{resource} was not found."),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ClientError::serialization(err.to_string());
        }

        let message = if err.is_timeout() {
            "Request timed out"
        } else if err.is_connect() {
            "Unable to connect"
        } else {
            "HTTP request failed"
        };

        ClientError::Network {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}
