use accessos_api::inception::*;
use accessos_api::models::*;
use axum::extract::{Path, State};
use axum::{Extension, Json};

use super::ControlState;
use crate::errors::{ApiError, ControllerError};
use crate::services::ControllerSession;

#[utoipa::path(
    post,
    path = "/api/doors",
    tag = "control",
    request_body = SessionCredentials,
    responses(
        (status = 200, description = "Get doors successfully", body = Vec<Door>),
        (status = 401, description = "Missing or expired session"),
        (status = 502, description = "Controller unreachable")
    )
)]
pub async fn list_doors(
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
) -> Result<Json<Vec<Door>>, ApiError> {
    let doors = state
        .inception
        .list::<ControllerDoor>(&session, DOORS_PATH)
        .await?;

    Ok(Json(doors.into_iter().map(Door::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/doors/{door_id}/control",
    tag = "control",
    params(
        ("door_id" = String, Path, description = "Door identifier")
    ),
    request_body = DoorControlRequest,
    responses(
        (status = 200, description = "Control applied, return the refreshed door", body = Door),
        (status = 401, description = "Missing or expired session"),
        (status = 404, description = "Door does not exist")
    )
)]
pub async fn control_door(
    Path(door_id): Path<String>,
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
    Json(body): Json<DoorControlRequest>,
) -> Result<Json<Door>, ApiError> {
    let not_found = || ControllerError::NotFound(format!("Door {door_id}"));

    state
        .inception
        .activity(
            &session,
            &door_activity_path(&urlencoding::encode(&door_id)),
            &Activity::ControlDoor { control: body.control },
        )
        .await
        .map_err(|e| match e {
            ControllerError::NotFound(_) => not_found(),
            e => e,
        })?;

    let door = state
        .inception
        .list::<ControllerDoor>(&session, DOORS_PATH)
        .await?
        .into_iter()
        .find(|door| door.id == door_id)
        .map(Door::from)
        .ok_or_else(not_found)?;

    Ok(Json(door))
}
