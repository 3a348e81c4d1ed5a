use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputState {
    On,
    #[default]
    Off,
}

impl OutputState {
    pub fn toggled(self) -> Self {
        match self {
            OutputState::On => OutputState::Off,
            OutputState::Off => OutputState::On,
        }
    }
}

impl From<&str> for OutputState {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "on" => OutputState::On,
            _ => OutputState::Off,
        }
    }
}

impl Display for OutputState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputState::On => write!(f, "on"),
            OutputState::Off => write!(f, "off"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Output identifier
    pub id: Id,
    /// Display name
    pub name: String,
    /// Current state
    pub status: OutputState,
    /// Output kind, e.g. Lighting or Alarm
    #[serde(rename = "type")]
    pub output_type: String,
    /// Controller reporting number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_id: Option<u32>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputControlRequest {
    /// Requested state
    pub state: OutputState,
}
