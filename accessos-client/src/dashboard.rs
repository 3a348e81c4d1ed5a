use accessos_api::models::*;

use crate::error::Result;
use crate::panel::ControlPanel;

/// Doors offered as quick actions on the dashboard.
pub const QUICK_DOORS: usize = 4;

/// Figures shown in the dashboard's stat cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub areas_armed: usize,
    pub areas_total: usize,
    pub doors_locked: usize,
    pub doors_total: usize,
    pub active_alarms: u32,
    pub users_online: usize,
}

impl Summary {
    pub fn compute(areas: &[Area], doors: &[Door], users: &[User]) -> Self {
        Self {
            areas_armed: areas.iter().filter(|area| area.is_armed()).count(),
            areas_total: areas.len(),
            doors_locked: doors.iter().filter(|door| door.is_locked()).count(),
            doors_total: doors.len(),
            active_alarms: areas.iter().map(|area| area.alarms).sum(),
            users_online: users.iter().filter(|user| user.is_online()).count(),
        }
    }

    pub fn areas_armed_label(&self) -> String {
        format!("{}/{}", self.areas_armed, self.areas_total)
    }

    pub fn doors_locked_label(&self) -> String {
        format!("{}/{}", self.doors_locked, self.doors_total)
    }
}

/// Flips the lock state of the door with `id`, leaving every other record
/// alone. Returns the new status, or `None` when no door matches.
pub fn toggle_door(doors: &mut [Door], id: &str) -> Option<DoorStatus> {
    let door = doors.iter_mut().find(|door| door.id == id)?;
    door.status = door.status.toggled();
    Some(door.status)
}

pub fn toggle_output(outputs: &mut [Output], id: &str) -> Option<OutputState> {
    let output = outputs.iter_mut().find(|output| output.id == id)?;
    output.status = output.status.toggled();
    Some(output.status)
}

/// Badge for an area card: `alarm` while any alarm is active, else its status.
pub fn area_badge(area: &Area) -> String {
    if area.alarms > 0 {
        String::from("alarm")
    } else {
        area.status.to_string()
    }
}

/// Control that toggles the door.
pub fn door_action(door: &Door) -> DoorControl {
    DoorControl::toggle_from(door.status)
}

/// Landing view of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub summary: Summary,
    pub quick_doors: Vec<Door>,
    pub recent_events: Vec<Event>,
}

impl Overview {
    pub async fn load(panel: &dyn ControlPanel) -> Result<Self> {
        let areas = panel.list_areas().await?;
        let doors = panel.list_doors().await?;
        let users = panel.list_users().await?;
        let recent_events = panel.list_events().await?;

        Ok(Self {
            summary: Summary::compute(&areas, &doors, &users),
            quick_doors: doors.into_iter().take(QUICK_DOORS).collect(),
            recent_events,
        })
    }
}
