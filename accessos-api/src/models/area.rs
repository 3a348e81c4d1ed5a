use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    Armed,
    #[default]
    Disarmed,
}

impl From<&str> for AreaStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "armed" => AreaStatus::Armed,
            _ => AreaStatus::Disarmed,
        }
    }
}

impl Display for AreaStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AreaStatus::Armed => write!(f, "armed"),
            AreaStatus::Disarmed => write!(f, "disarmed"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Area identifier
    pub id: Id,
    /// Display name
    pub name: String,
    /// Arming state
    pub status: AreaStatus,
    /// Number of zones in the area
    pub zones: u32,
    /// Alarms currently active in the area
    pub alarms: u32,
    /// Controller reporting number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_id: Option<u32>,
}

impl Area {
    pub fn is_armed(&self) -> bool {
        self.status == AreaStatus::Armed
    }
}
