use accessos_api::inception::*;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{async_trait, Json, Router};

use crate::controller::ControllerState;

/// Session id carried by the `LoginSessId` cookie, checked against the open sessions.
pub struct SessionCookie(pub String);

#[async_trait]
impl FromRequestParts<ControllerState> for SessionCookie {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ControllerState,
    ) -> Result<Self, Self::Rejection> {
        let session_id = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, value)| value.to_string())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if !state.is_valid(&session_id).await {
            tracing::debug!("unknown session {}", session_id);
            return Err(StatusCode::UNAUTHORIZED);
        }

        Ok(SessionCookie(session_id))
    }
}

pub fn router(state: ControllerState) -> Router {
    let api = Router::new()
        .route("/authentication/login", post(login))
        .route("/authentication/logout", post(logout))
        .route("/control/area", get(areas))
        .route("/control/door", get(doors))
        .route("/control/door/:door_id/activity", post(door_activity))
        .route("/control/input", get(inputs))
        .route("/control/output", get(outputs))
        .route("/control/output/:output_id/activity", post(output_activity))
        .route("/config/user", get(users))
        .route("/review/event", get(events));

    Router::new().nest("/api/v1", api).with_state(state)
}

async fn login(State(state): State<ControllerState>, Json(body): Json<LoginBody>) -> Json<LoginReply> {
    match state.login(&body.username, &body.password).await {
        Some(session_id) => {
            tracing::info!(username = %body.username, "login accepted");
            Json(LoginReply::success(session_id))
        }
        None => {
            tracing::info!(username = %body.username, "login rejected");
            Json(LoginReply::failure("Invalid username or password"))
        }
    }
}

async fn logout(SessionCookie(session_id): SessionCookie, State(state): State<ControllerState>) -> StatusCode {
    state.logout(&session_id).await;

    StatusCode::OK
}

async fn areas(_: SessionCookie, State(state): State<ControllerState>) -> Json<Vec<ControllerArea>> {
    Json(state.site().await.areas.iter().map(ControllerArea::from).collect())
}

async fn doors(_: SessionCookie, State(state): State<ControllerState>) -> Json<Vec<ControllerDoor>> {
    Json(state.site().await.doors.iter().map(ControllerDoor::from).collect())
}

async fn inputs(_: SessionCookie, State(state): State<ControllerState>) -> Json<Vec<ControllerInput>> {
    Json(state.site().await.inputs.iter().map(ControllerInput::from).collect())
}

async fn outputs(_: SessionCookie, State(state): State<ControllerState>) -> Json<Vec<ControllerOutput>> {
    Json(state.site().await.outputs.iter().map(ControllerOutput::from).collect())
}

async fn users(_: SessionCookie, State(state): State<ControllerState>) -> Json<Vec<ControllerUser>> {
    Json(state.site().await.users.iter().map(ControllerUser::from).collect())
}

async fn events(_: SessionCookie, State(state): State<ControllerState>) -> Json<Vec<ControllerEvent>> {
    Json(state.site().await.events.iter().map(ControllerEvent::from).collect())
}

async fn door_activity(
    Path(door_id): Path<String>,
    _: SessionCookie,
    State(state): State<ControllerState>,
    Json(activity): Json<Activity>,
) -> Result<Json<ReplyStatus>, StatusCode> {
    let Activity::ControlDoor { control } = activity else {
        return Err(StatusCode::BAD_REQUEST);
    };

    state
        .control_door(&door_id, control)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(success()))
}

async fn output_activity(
    Path(output_id): Path<String>,
    _: SessionCookie,
    State(state): State<ControllerState>,
    Json(activity): Json<Activity>,
) -> Result<Json<ReplyStatus>, StatusCode> {
    let Activity::ControlOutput { control } = activity else {
        return Err(StatusCode::BAD_REQUEST);
    };

    state
        .control_output(&output_id, control.into())
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(success()))
}

fn success() -> ReplyStatus {
    ReplyStatus {
        result: String::from("Success"),
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use accessos_api::models::Site;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::settings::Credentials;

    fn app() -> (Router, ControllerState) {
        let state = ControllerState::new(
            Credentials {
                username: String::from("AccessOS"),
                password: String::from("AccessOS"),
            },
            Site::sample(),
        );

        (router(state.clone()), state)
    }

    async fn body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_reply() {
        let (app, _) = app();

        let request = Request::builder()
            .uri("/api/v1/authentication/login")
            .method(Method::POST)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "Username": "AccessOS", "Password": "AccessOS" }).to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body(response).await["UserID"].as_str().is_some());

        let request = Request::builder()
            .uri("/api/v1/authentication/login")
            .method(Method::POST)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "Username": "AccessOS", "Password": "nope" }).to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let reply = body(response).await;
        assert!(reply.get("UserID").is_none());
        assert_eq!(reply["Response"]["Result"], "Failure");
    }

    #[tokio::test]
    async fn test_listing_requires_cookie() {
        let (app, state) = app();

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/v1/control/area").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let session = state.login("AccessOS", "AccessOS").await.unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/control/area")
                    .header("Cookie", format!("theme=dark; LoginSessId={session}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_door_activity() {
        let (app, state) = app();
        let session = state.login("AccessOS", "AccessOS").await.unwrap();

        let request = |door: &str, activity: Value| {
            Request::builder()
                .uri(format!("/api/v1/control/door/{door}/activity"))
                .method(Method::POST)
                .header("Content-Type", "application/json")
                .header("Cookie", format!("LoginSessId={session}"))
                .body(Body::from(activity.to_string()))
                .unwrap()
        };

        let response = app
            .clone()
            .oneshot(request("door-1", json!({ "Type": "ControlDoor", "DoorControlType": "Unlock" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!state.site().await.doors[0].is_locked());

        let response = app
            .clone()
            .oneshot(request("door-99", json!({ "Type": "ControlDoor", "DoorControlType": "Lock" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(request("door-1", json!({ "Type": "ControlOutput", "OutputControlType": "On" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
