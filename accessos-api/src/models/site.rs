use serde::{Deserialize, Serialize};
use time::macros::datetime;

use super::*;

/// Everything a controller exposes to the dashboard, in one snapshot.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub areas: Vec<Area>,
    pub doors: Vec<Door>,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub users: Vec<User>,
    pub events: Vec<Event>,
}

impl Site {
    /// Demo installation used by the mock panel and the controller simulator.
    pub fn sample() -> Self {
        Self {
            areas: vec![
                area("area-1", "Main Building", AreaStatus::Armed, 12, 0),
                area("area-2", "Warehouse A", AreaStatus::Disarmed, 8, 0),
                area("area-3", "Office Wing", AreaStatus::Armed, 6, 0),
                area("area-4", "Server Room", AreaStatus::Armed, 4, 1),
            ],
            doors: vec![
                door("door-1", "Main Entrance", DoorStatus::Locked, "2 mins ago", "Building A"),
                door("door-2", "Side Door", DoorStatus::Unlocked, "15 mins ago", "Building A"),
                door("door-3", "Loading Bay", DoorStatus::Locked, "1 hour ago", "Warehouse"),
                door("door-4", "Server Room", DoorStatus::Locked, "3 hours ago", "IT Block"),
                door("door-5", "Emergency Exit", DoorStatus::Locked, "Never", "Building A"),
                door("door-6", "Parking Gate", DoorStatus::Unlocked, "5 mins ago", "External"),
            ],
            inputs: vec![
                input("inp-1", "PIR Sensor - Lobby", InputStatus::Sealed, "Motion", "Main Building"),
                input("inp-2", "Door Contact - Main", InputStatus::Sealed, "Contact", "Main Building"),
                input("inp-3", "Glass Break - Office", InputStatus::Sealed, "Glass Break", "Office Wing"),
                input("inp-4", "PIR Sensor - Warehouse", InputStatus::Unsealed, "Motion", "Warehouse A"),
            ],
            outputs: vec![
                output("out-1", "Lobby Lights", OutputState::On, "Lighting"),
                output("out-2", "Alarm Siren", OutputState::Off, "Alarm"),
                output("out-3", "HVAC System", OutputState::On, "Climate"),
                output("out-4", "Gate Motor", OutputState::Off, "Access"),
            ],
            users: vec![
                user("usr-1", "John Smith", "Administrator", UserStatus::Online, 5),
                user("usr-2", "Sarah Connor", "Supervisor", UserStatus::Online, 3),
                user("usr-3", "Mike Johnson", "Operator", UserStatus::Off, 2),
            ],
            events: vec![
                Event {
                    id: "evt-1".into(),
                    time: datetime!(2025-01-06 09:45:22 UTC),
                    kind: EventKind::Access,
                    message: "John Smith accessed Main Entrance".into(),
                    severity: Severity::Info,
                },
                Event {
                    id: "evt-2".into(),
                    time: datetime!(2025-01-06 09:42:15 UTC),
                    kind: EventKind::Alarm,
                    message: "Motion detected in Server Room".into(),
                    severity: Severity::Warning,
                },
                Event {
                    id: "evt-3".into(),
                    time: datetime!(2025-01-06 09:38:00 UTC),
                    kind: EventKind::System,
                    message: "Area \"Office Wing\" armed by Admin".into(),
                    severity: Severity::Success,
                },
                Event {
                    id: "evt-4".into(),
                    time: datetime!(2025-01-06 09:30:11 UTC),
                    kind: EventKind::Access,
                    message: "Access denied - Invalid card".into(),
                    severity: Severity::Danger,
                },
                Event {
                    id: "evt-5".into(),
                    time: datetime!(2025-01-06 09:25:00 UTC),
                    kind: EventKind::System,
                    message: "System health check completed".into(),
                    severity: Severity::Info,
                },
            ],
        }
    }

    pub fn door_mut(&mut self, id: &str) -> Option<&mut Door> {
        self.doors.iter_mut().find(|door| door.id == id)
    }

    pub fn output_mut(&mut self, id: &str) -> Option<&mut Output> {
        self.outputs.iter_mut().find(|output| output.id == id)
    }
}

fn area(id: &str, name: &str, status: AreaStatus, zones: u32, alarms: u32) -> Area {
    Area {
        id: id.into(),
        name: name.into(),
        status,
        zones,
        alarms,
        reporting_id: None,
    }
}

fn door(id: &str, name: &str, status: DoorStatus, last_access: &str, location: &str) -> Door {
    Door {
        id: id.into(),
        name: name.into(),
        status,
        last_access: last_access.into(),
        location: location.into(),
        reporting_id: None,
    }
}

fn input(id: &str, name: &str, status: InputStatus, input_type: &str, area: &str) -> Input {
    Input {
        id: id.into(),
        name: name.into(),
        status,
        input_type: input_type.into(),
        area: area.into(),
        reporting_id: None,
    }
}

fn output(id: &str, name: &str, status: OutputState, output_type: &str) -> Output {
    Output {
        id: id.into(),
        name: name.into(),
        status,
        output_type: output_type.into(),
        reporting_id: None,
    }
}

fn user(id: &str, name: &str, role: &str, status: UserStatus, areas: u32) -> User {
    User {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        status,
        areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_site_shape() {
        let site = Site::sample();

        assert_eq!(site.areas.len(), 4);
        assert_eq!(site.doors.len(), 6);
        assert_eq!(site.inputs.len(), 4);
        assert_eq!(site.outputs.len(), 4);
        assert_eq!(site.users.len(), 3);
        assert_eq!(site.events.len(), 5);
    }

    #[test]
    fn test_sample_serializes_dashboard_field_names() {
        let site = Site::sample();
        let input = serde_json::to_value(&site.inputs[0]).unwrap();
        let event = serde_json::to_value(&site.events[0]).unwrap();

        assert_eq!(input["type"], "Motion");
        assert_eq!(input["status"], "sealed");
        assert_eq!(event["type"], "access");
        assert_eq!(event["time"], "2025-01-06T09:45:22Z");
    }

    #[test]
    fn test_door_lookup() {
        let mut site = Site::sample();

        site.door_mut("door-2").unwrap().status = DoorStatus::Locked;

        assert!(site.doors[1].is_locked());
        assert!(site.door_mut("door-99").is_none());
    }
}
