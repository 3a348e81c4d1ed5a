use std::sync::Arc;

use accessos_api::inception::*;
use accessos_api::models::*;
use axum::extract::State;
use axum::{Extension, Json};

use crate::errors::ApiError;
use crate::services::{ControllerSession, InceptionService};

#[derive(Clone)]
pub struct ControlState {
    pub inception: Arc<InceptionService>,
}

#[utoipa::path(
    post,
    path = "/api/areas",
    tag = "control",
    request_body = SessionCredentials,
    responses(
        (status = 200, description = "Get areas successfully", body = Vec<Area>),
        (status = 401, description = "Missing or expired session"),
        (status = 502, description = "Controller unreachable")
    )
)]
pub async fn list_areas(
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
) -> Result<Json<Vec<Area>>, ApiError> {
    let areas = state
        .inception
        .list::<ControllerArea>(&session, AREAS_PATH)
        .await?;

    Ok(Json(areas.into_iter().map(Area::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/inputs",
    tag = "control",
    request_body = SessionCredentials,
    responses(
        (status = 200, description = "Get inputs successfully", body = Vec<Input>),
        (status = 401, description = "Missing or expired session"),
        (status = 502, description = "Controller unreachable")
    )
)]
pub async fn list_inputs(
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
) -> Result<Json<Vec<Input>>, ApiError> {
    let inputs = state
        .inception
        .list::<ControllerInput>(&session, INPUTS_PATH)
        .await?;

    Ok(Json(inputs.into_iter().map(Input::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "control",
    request_body = SessionCredentials,
    responses(
        (status = 200, description = "Get users successfully", body = Vec<User>),
        (status = 401, description = "Missing or expired session"),
        (status = 502, description = "Controller unreachable")
    )
)]
pub async fn list_users(
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .inception
        .list::<ControllerUser>(&session, USERS_PATH)
        .await?;

    Ok(Json(users.into_iter().map(User::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/events",
    tag = "control",
    request_body = SessionCredentials,
    responses(
        (status = 200, description = "Get event log, newest first", body = Vec<Event>),
        (status = 401, description = "Missing or expired session"),
        (status = 502, description = "Controller unreachable")
    )
)]
pub async fn list_events(
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state
        .inception
        .list::<ControllerEvent>(&session, EVENTS_PATH)
        .await?;

    let mut events: Vec<Event> = events.into_iter().map(Event::from).collect();
    events.sort_by(|a, b| b.time.cmp(&a.time));

    Ok(Json(events))
}
