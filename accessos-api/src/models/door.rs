use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorStatus {
    #[default]
    Locked,
    Unlocked,
}

impl DoorStatus {
    pub fn toggled(self) -> Self {
        match self {
            DoorStatus::Locked => DoorStatus::Unlocked,
            DoorStatus::Unlocked => DoorStatus::Locked,
        }
    }
}

impl From<&str> for DoorStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "unlocked" => DoorStatus::Unlocked,
            _ => DoorStatus::Locked,
        }
    }
}

impl Display for DoorStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DoorStatus::Locked => write!(f, "locked"),
            DoorStatus::Unlocked => write!(f, "unlocked"),
        }
    }
}

/// Command sent to a door. `Open` releases the door momentarily, which leaves
/// it reported as unlocked until the next lock.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorControl {
    Lock,
    Unlock,
    Open,
}

impl DoorControl {
    /// Status a door reports once the control has been applied.
    pub fn resulting_status(self) -> DoorStatus {
        match self {
            DoorControl::Lock => DoorStatus::Locked,
            DoorControl::Unlock | DoorControl::Open => DoorStatus::Unlocked,
        }
    }

    /// Control that flips a door out of its current status.
    pub fn toggle_from(status: DoorStatus) -> Self {
        match status {
            DoorStatus::Locked => DoorControl::Unlock,
            DoorStatus::Unlocked => DoorControl::Lock,
        }
    }
}

impl Display for DoorControl {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DoorControl::Lock => write!(f, "Lock"),
            DoorControl::Unlock => write!(f, "Unlock"),
            DoorControl::Open => write!(f, "Open"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Door identifier
    pub id: Id,
    /// Display name
    pub name: String,
    /// Lock state
    pub status: DoorStatus,
    /// Human readable time of the last access
    pub last_access: String,
    /// Building or zone the door belongs to
    pub location: String,
    /// Controller reporting number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_id: Option<u32>,
}

impl Door {
    pub fn is_locked(&self) -> bool {
        self.status == DoorStatus::Locked
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorControlRequest {
    /// Control to apply
    pub control: DoorControl,
}
