use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Access,
    Alarm,
    System,
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "access" => EventKind::Access,
            "alarm" => EventKind::Alarm,
            _ => EventKind::System,
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            EventKind::Access => write!(f, "access"),
            EventKind::Alarm => write!(f, "alarm"),
            EventKind::System => write!(f, "system"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" => Severity::Danger,
            _ => Severity::Info,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier
    pub id: Id,
    /// When the controller logged the event
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    /// Event category
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Log line
    pub message: String,
    /// Severity used for colouring
    pub severity: Severity,
}
