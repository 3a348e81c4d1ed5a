use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStatus {
    #[default]
    Sealed,
    Unsealed,
    Isolated,
}

impl From<&str> for InputStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "unsealed" => InputStatus::Unsealed,
            "isolated" => InputStatus::Isolated,
            _ => InputStatus::Sealed,
        }
    }
}

impl Display for InputStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InputStatus::Sealed => write!(f, "sealed"),
            InputStatus::Unsealed => write!(f, "unsealed"),
            InputStatus::Isolated => write!(f, "isolated"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// Input identifier
    pub id: Id,
    /// Display name
    pub name: String,
    /// Detector state
    pub status: InputStatus,
    /// Detector kind, e.g. Motion or Contact
    #[serde(rename = "type")]
    pub input_type: String,
    /// Name of the area the input reports into
    pub area: String,
    /// Controller reporting number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_id: Option<u32>,
}
