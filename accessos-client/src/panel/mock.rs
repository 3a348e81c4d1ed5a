use accessos_api::models::*;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ControlPanel;
use crate::error::{ClientError, Result};

/// In-memory site for offline use and tests. Controls mutate the held records.
#[derive(Debug)]
pub struct MockPanel {
    site: RwLock<Site>,
}

impl MockPanel {
    pub fn new(site: Site) -> Self {
        Self {
            site: RwLock::new(site),
        }
    }

    pub async fn site(&self) -> Site {
        self.site.read().await.clone()
    }
}

impl Default for MockPanel {
    fn default() -> Self {
        Self::new(Site::sample())
    }
}

#[async_trait]
impl ControlPanel for MockPanel {
    async fn list_areas(&self) -> Result<Vec<Area>> {
        Ok(self.site.read().await.areas.clone())
    }

    async fn list_doors(&self) -> Result<Vec<Door>> {
        Ok(self.site.read().await.doors.clone())
    }

    async fn list_inputs(&self) -> Result<Vec<Input>> {
        Ok(self.site.read().await.inputs.clone())
    }

    async fn list_outputs(&self) -> Result<Vec<Output>> {
        Ok(self.site.read().await.outputs.clone())
    }

    async fn set_door_lock(&self, id: &str, control: DoorControl) -> Result<Door> {
        let mut site = self.site.write().await;
        let door = site
            .door_mut(id)
            .ok_or_else(|| ClientError::not_found(format!("Door {id}")))?;

        door.status = control.resulting_status();
        door.last_access = String::from("Just now");

        Ok(door.clone())
    }

    async fn set_output_state(&self, id: &str, state: OutputState) -> Result<Output> {
        let mut site = self.site.write().await;
        let output = site
            .output_mut(id)
            .ok_or_else(|| ClientError::not_found(format!("Output {id}")))?;

        output.status = state;

        Ok(output.clone())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.site.read().await.events.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.site.read().await.users.clone())
    }
}
