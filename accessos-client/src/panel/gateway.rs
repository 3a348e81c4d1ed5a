use std::sync::Arc;

use accessos_api::models::*;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::ControlPanel;
use crate::error::{ClientError, Result};
use crate::requester::AuthenticatedRequester;

pub const AREAS_PATH: &str = "/api/areas";
pub const DOORS_PATH: &str = "/api/doors";
pub const INPUTS_PATH: &str = "/api/inputs";
pub const OUTPUTS_PATH: &str = "/api/outputs";
pub const USERS_PATH: &str = "/api/users";
pub const EVENTS_PATH: &str = "/api/events";

/// Site access through the gateway, one authenticated request per operation.
pub struct GatewayPanel {
    requester: Arc<AuthenticatedRequester>,
}

impl GatewayPanel {
    pub fn new(requester: Arc<AuthenticatedRequester>) -> Self {
        Self { requester }
    }

    /// `<collection>/<id>/control`, with the id encoded as one path segment.
    fn control_path(collection: &str, id: &str) -> String {
        format!("{collection}/{}/control", urlencoding::encode(id))
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.requester.request(path, &json!({})).await
    }
}

fn not_found(resource: String) -> impl FnOnce(ClientError) -> ClientError {
    move |e| match e {
        ClientError::Status { status: 404, .. } => ClientError::not_found(resource),
        e => e,
    }
}

#[async_trait]
impl ControlPanel for GatewayPanel {
    async fn list_areas(&self) -> Result<Vec<Area>> {
        self.list(AREAS_PATH).await
    }

    async fn list_doors(&self) -> Result<Vec<Door>> {
        self.list(DOORS_PATH).await
    }

    async fn list_inputs(&self) -> Result<Vec<Input>> {
        self.list(INPUTS_PATH).await
    }

    async fn list_outputs(&self) -> Result<Vec<Output>> {
        self.list(OUTPUTS_PATH).await
    }

    async fn set_door_lock(&self, id: &str, control: DoorControl) -> Result<Door> {
        tracing::info!(door = %id, %control, "door control");

        self.requester
            .request(
                &Self::control_path(DOORS_PATH, id),
                &DoorControlRequest { control },
            )
            .await
            .map_err(not_found(format!("Door {id}")))
    }

    async fn set_output_state(&self, id: &str, state: OutputState) -> Result<Output> {
        tracing::info!(output = %id, %state, "output control");

        self.requester
            .request(
                &Self::control_path(OUTPUTS_PATH, id),
                &OutputControlRequest { state },
            )
            .await
            .map_err(not_found(format!("Output {id}")))
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.list(EVENTS_PATH).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list(USERS_PATH).await
    }
}
