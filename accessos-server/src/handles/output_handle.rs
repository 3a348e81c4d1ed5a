use accessos_api::inception::*;
use accessos_api::models::*;
use axum::extract::{Path, State};
use axum::{Extension, Json};

use super::ControlState;
use crate::errors::{ApiError, ControllerError};
use crate::services::ControllerSession;

#[utoipa::path(
    post,
    path = "/api/outputs",
    tag = "control",
    request_body = SessionCredentials,
    responses(
        (status = 200, description = "Get outputs successfully", body = Vec<Output>),
        (status = 401, description = "Missing or expired session"),
        (status = 502, description = "Controller unreachable")
    )
)]
pub async fn list_outputs(
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
) -> Result<Json<Vec<Output>>, ApiError> {
    let outputs = state
        .inception
        .list::<ControllerOutput>(&session, OUTPUTS_PATH)
        .await?;

    Ok(Json(outputs.into_iter().map(Output::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/outputs/{output_id}/control",
    tag = "control",
    params(
        ("output_id" = String, Path, description = "Output identifier")
    ),
    request_body = OutputControlRequest,
    responses(
        (status = 200, description = "State applied, return the refreshed output", body = Output),
        (status = 401, description = "Missing or expired session"),
        (status = 404, description = "Output does not exist")
    )
)]
pub async fn control_output(
    Path(output_id): Path<String>,
    Extension(session): Extension<ControllerSession>,
    State(state): State<ControlState>,
    Json(body): Json<OutputControlRequest>,
) -> Result<Json<Output>, ApiError> {
    let not_found = || ControllerError::NotFound(format!("Output {output_id}"));

    state
        .inception
        .activity(
            &session,
            &output_activity_path(&urlencoding::encode(&output_id)),
            &Activity::ControlOutput { control: body.state.into() },
        )
        .await
        .map_err(|e| match e {
            ControllerError::NotFound(_) => not_found(),
            e => e,
        })?;

    let output = state
        .inception
        .list::<ControllerOutput>(&session, OUTPUTS_PATH)
        .await?
        .into_iter()
        .find(|output| output.id == output_id)
        .map(Output::from)
        .ok_or_else(not_found)?;

    Ok(Json(output))
}
