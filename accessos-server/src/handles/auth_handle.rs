use std::sync::Arc;

use accessos_api::models::{LoginRequest, LoginResponse, SessionCredentials};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{middleware, Extension, Json, Router};

use crate::errors::ApiError;
use crate::middlewares::session;
use crate::services::{is_valid_serial, ControllerSession, InceptionService};

#[derive(Clone)]
pub struct AuthState {
    pub inception: Arc<InceptionService>,
}

pub fn auth_router(auth_state: AuthState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/logout",
            post(logout).route_layer(middleware::from_fn(session)),
        )
        .with_state(auth_state)
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, return controller session", body = LoginResponse),
        (status = 400, description = "Invalid controller serial", body = LoginResponse),
        (status = 401, description = "Controller rejected the credentials", body = LoginResponse),
        (status = 502, description = "Controller unreachable or replied unexpectedly", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<AuthState>,
    Json(body): Json<LoginRequest>,
) -> Response {
    if !is_valid_serial(&body.icp_serial) {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::rejected("Invalid controller serial")),
        )
            .into_response();
    }

    match state
        .inception
        .login(&body.icp_serial, &body.username, &body.password)
        .await
    {
        Ok(session_id) => {
            tracing::info!(serial = %body.icp_serial, username = %body.username, "login accepted");
            Json(LoginResponse::accepted(session_id, body.username)).into_response()
        }
        Err(e) => {
            tracing::info!(serial = %body.icp_serial, username = %body.username, "login failed: {}", e);
            (e.status_code(), Json(LoginResponse::rejected(e.public_message()))).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = SessionCredentials,
    responses(
        (status = 204, description = "Controller session closed"),
        (status = 401, description = "Missing or expired session")
    )
)]
pub async fn logout(
    Extension(session): Extension<ControllerSession>,
    State(state): State<AuthState>,
) -> Result<StatusCode, ApiError> {
    state.inception.logout(&session).await?;

    tracing::info!(serial = %session.icp_serial, "logout");

    Ok(StatusCode::NO_CONTENT)
}
