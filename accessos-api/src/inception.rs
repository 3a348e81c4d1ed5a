//! REST schema spoken by the controller itself under `/api/v1`.
//!
//! Field names are PascalCase on the wire. The gateway is a client of this
//! schema and the simulator serves it, so both convert through the `From`
//! impls below instead of hand-mapping fields.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::*;

/// Cookie the controller expects the session id in.
pub const SESSION_COOKIE: &str = "LoginSessId";

pub const LOGIN_PATH: &str = "authentication/login";
pub const LOGOUT_PATH: &str = "authentication/logout";
pub const AREAS_PATH: &str = "control/area";
pub const DOORS_PATH: &str = "control/door";
pub const INPUTS_PATH: &str = "control/input";
pub const OUTPUTS_PATH: &str = "control/output";
pub const USERS_PATH: &str = "config/user";
pub const EVENTS_PATH: &str = "review/event";

pub fn door_activity_path(door_id: &str) -> String {
    format!("{DOORS_PATH}/{door_id}/activity")
}

pub fn output_activity_path(output_id: &str) -> String {
    format!("{OUTPUTS_PATH}/{output_id}/activity")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplyStatus {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginReply {
    #[serde(rename = "UserID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ReplyStatus>,
}

impl LoginReply {
    pub fn success(session_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(session_id.into()),
            response: Some(ReplyStatus {
                result: "Success".into(),
                message: None,
            }),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            user_id: None,
            response: Some(ReplyStatus {
                result: "Failure".into(),
                message: Some(message.into()),
            }),
        }
    }

    /// Session id, if the controller handed out a usable one.
    pub fn session_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn failure_message(&self) -> String {
        self.response
            .as_ref()
            .and_then(|status| status.message.clone())
            .unwrap_or_else(|| "Controller rejected the login".into())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControllerArea {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(rename = "ReportingID", default)]
    pub reporting_id: Option<u32>,
    pub state: String,
    #[serde(default)]
    pub zones: u32,
    #[serde(default)]
    pub alarms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControllerDoor {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(rename = "ReportingID", default)]
    pub reporting_id: Option<u32>,
    pub state: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub last_access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControllerInput {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(rename = "ReportingID", default)]
    pub reporting_id: Option<u32>,
    pub state: String,
    #[serde(default)]
    pub input_type: String,
    #[serde(default)]
    pub area: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControllerOutput {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(rename = "ReportingID", default)]
    pub reporting_id: Option<u32>,
    pub state: String,
    #[serde(default)]
    pub output_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControllerUser {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub area_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControllerEvent {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub when: OffsetDateTime,
    pub category: String,
    pub description: String,
    pub severity: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputControlType {
    On,
    Off,
}

impl From<OutputState> for OutputControlType {
    fn from(value: OutputState) -> Self {
        match value {
            OutputState::On => OutputControlType::On,
            OutputState::Off => OutputControlType::Off,
        }
    }
}

impl From<OutputControlType> for OutputState {
    fn from(value: OutputControlType) -> Self {
        match value {
            OutputControlType::On => OutputState::On,
            OutputControlType::Off => OutputState::Off,
        }
    }
}

/// Body of `POST control/<kind>/<id>/activity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum Activity {
    ControlDoor {
        #[serde(rename = "DoorControlType")]
        control: DoorControl,
    },
    ControlOutput {
        #[serde(rename = "OutputControlType")]
        control: OutputControlType,
    },
}

fn label(value: impl Display) -> String {
    let text = value.to_string();
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<ControllerArea> for Area {
    fn from(value: ControllerArea) -> Self {
        Self {
            id: value.id,
            name: value.name,
            status: AreaStatus::from(value.state.as_str()),
            zones: value.zones,
            alarms: value.alarms,
            reporting_id: value.reporting_id,
        }
    }
}

impl From<&Area> for ControllerArea {
    fn from(value: &Area) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            reporting_id: value.reporting_id,
            state: label(value.status),
            zones: value.zones,
            alarms: value.alarms,
        }
    }
}

impl From<ControllerDoor> for Door {
    fn from(value: ControllerDoor) -> Self {
        Self {
            id: value.id,
            name: value.name,
            status: DoorStatus::from(value.state.as_str()),
            last_access: value.last_access,
            location: value.location,
            reporting_id: value.reporting_id,
        }
    }
}

impl From<&Door> for ControllerDoor {
    fn from(value: &Door) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            reporting_id: value.reporting_id,
            state: label(value.status),
            location: value.location.clone(),
            last_access: value.last_access.clone(),
        }
    }
}

impl From<ControllerInput> for Input {
    fn from(value: ControllerInput) -> Self {
        Self {
            id: value.id,
            name: value.name,
            status: InputStatus::from(value.state.as_str()),
            input_type: value.input_type,
            area: value.area,
            reporting_id: value.reporting_id,
        }
    }
}

impl From<&Input> for ControllerInput {
    fn from(value: &Input) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            reporting_id: value.reporting_id,
            state: label(value.status),
            input_type: value.input_type.clone(),
            area: value.area.clone(),
        }
    }
}

impl From<ControllerOutput> for Output {
    fn from(value: ControllerOutput) -> Self {
        Self {
            id: value.id,
            name: value.name,
            status: OutputState::from(value.state.as_str()),
            output_type: value.output_type,
            reporting_id: value.reporting_id,
        }
    }
}

impl From<&Output> for ControllerOutput {
    fn from(value: &Output) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            reporting_id: value.reporting_id,
            state: label(value.status),
            output_type: value.output_type.clone(),
        }
    }
}

impl From<ControllerUser> for User {
    fn from(value: ControllerUser) -> Self {
        Self {
            id: value.id,
            name: value.name,
            role: value.role,
            status: if value.online { UserStatus::Online } else { UserStatus::Off },
            areas: value.area_count,
        }
    }
}

impl From<&User> for ControllerUser {
    fn from(value: &User) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            role: value.role.clone(),
            online: value.is_online(),
            area_count: value.areas,
        }
    }
}

impl From<ControllerEvent> for Event {
    fn from(value: ControllerEvent) -> Self {
        Self {
            id: value.id,
            time: value.when,
            kind: EventKind::from(value.category.as_str()),
            message: value.description,
            severity: Severity::from(value.severity.as_str()),
        }
    }
}

impl From<&Event> for ControllerEvent {
    fn from(value: &Event) -> Self {
        Self {
            id: value.id.clone(),
            when: value.time,
            category: label(value.kind),
            description: value.message.clone(),
            severity: label(value.severity),
        }
    }
}
