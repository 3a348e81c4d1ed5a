use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::configs::Settings;
use crate::docs::ApiDoc;
use crate::handles::*;
use crate::middlewares::session;
use crate::services::InceptionService;

pub fn create_app(settings: &Settings) -> anyhow::Result<Router> {
    let inception = Arc::new(InceptionService::new(settings.controller.clone())?);

    let control_state = ControlState {
        inception: inception.clone(),
    };

    let areas = Router::new()
        .route("/", post(list_areas))
        .route_layer(middleware::from_fn(session))
        .with_state(control_state.clone());

    let doors = Router::new()
        .route("/", post(list_doors))
        .route("/:door_id/control", post(control_door))
        .route_layer(middleware::from_fn(session))
        .with_state(control_state.clone());

    let inputs = Router::new()
        .route("/", post(list_inputs))
        .route_layer(middleware::from_fn(session))
        .with_state(control_state.clone());

    let outputs = Router::new()
        .route("/", post(list_outputs))
        .route("/:output_id/control", post(control_output))
        .route_layer(middleware::from_fn(session))
        .with_state(control_state.clone());

    let users = Router::new()
        .route("/", post(list_users))
        .route_layer(middleware::from_fn(session))
        .with_state(control_state.clone());

    let events = Router::new()
        .route("/", post(list_events))
        .route_layer(middleware::from_fn(session))
        .with_state(control_state);

    Ok(Router::new()
        .merge(auth_router(AuthState { inception }))
        .nest("/api/areas", areas)
        .nest("/api/doors", doors)
        .nest("/api/inputs", inputs)
        .nest("/api/outputs", outputs)
        .nest("/api/users", users)
        .nest("/api/events", events)
        .route("/api/docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
