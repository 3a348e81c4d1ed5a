use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Controller address or serial
    pub icp_serial: String,
    pub username: String,
    pub password: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the controller accepted the credentials
    pub success: bool,
    /// Opaque controller session, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Echo of the authenticated username, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Reason the login failed, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResponse {
    pub fn accepted(session_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            success: true,
            session_id: Some(session_id.into()),
            username: Some(username.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            session_id: None,
            username: None,
            error: Some(error.into()),
        }
    }
}

/// Credentials every authenticated call carries in its JSON body, next to the
/// call's own fields.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub icp_serial: String,
}
