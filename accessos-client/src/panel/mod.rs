mod gateway;
mod mock;

pub use gateway::GatewayPanel;
pub use mock::MockPanel;

use accessos_api::models::*;
use async_trait::async_trait;

use crate::error::Result;

/// Everything the dashboard reads from or does to a site.
#[async_trait]
pub trait ControlPanel: Send + Sync {
    async fn list_areas(&self) -> Result<Vec<Area>>;

    async fn list_doors(&self) -> Result<Vec<Door>>;

    async fn list_inputs(&self) -> Result<Vec<Input>>;

    async fn list_outputs(&self) -> Result<Vec<Output>>;

    /// Applies `control` to the door and returns its new record.
    async fn set_door_lock(&self, id: &str, control: DoorControl) -> Result<Door>;

    /// Switches the output and returns its new record.
    async fn set_output_state(&self, id: &str, state: OutputState) -> Result<Output>;

    async fn list_events(&self) -> Result<Vec<Event>>;

    async fn list_users(&self) -> Result<Vec<User>>;
}
