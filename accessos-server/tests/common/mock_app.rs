use std::net::SocketAddr;

use accessos_api::models::{LoginResponse, Site};
use accessos_mock::controller::ControllerState;
use accessos_mock::settings::Credentials;
use accessos_server::app::create_app;
use accessos_server::configs::{Controller, Logger, Server, Settings};
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const SERIAL: &str = "in67434072";
pub const USERNAME: &str = "AccessOS";
pub const PASSWORD: &str = "AccessOS";

pub struct MockApp {
    pub router: Router,
    pub controller: ControllerState,
    pub controller_addr: SocketAddr,
}

impl MockApp {
    pub async fn new() -> Self {
        Self::with_site(Site::sample()).await
    }

    pub async fn with_site(site: Site) -> Self {
        let (controller_addr, controller) = accessos_mock::spawn(
            Credentials {
                username: String::from(USERNAME),
                password: String::from(PASSWORD),
            },
            site,
        )
        .await
        .unwrap();

        let router = create_app(&settings(format!(
            "http://{controller_addr}/api/v1"
        )))
        .unwrap();

        Self {
            router,
            controller,
            controller_addr,
        }
    }

    /// Gateway whose controller address refuses connections.
    pub fn unreachable() -> Router {
        create_app(&settings(String::from("http://127.0.0.1:9/api/v1"))).unwrap()
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response {
        post(&self.router, uri, body).await
    }

    pub async fn login(&self) -> String {
        let response = self
            .post(
                "/api/auth/login",
                json!({ "icp_serial": SERIAL, "username": USERNAME, "password": PASSWORD }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: LoginResponse = serde_json::from_value(read_json(response).await).unwrap();
        body.session_id.unwrap()
    }

    /// Posts `body` merged with the session credentials.
    pub async fn post_with_session(&self, uri: &str, session_id: &str, mut body: Value) -> Response {
        body["session_id"] = json!(session_id);
        body["icp_serial"] = json!(SERIAL);
        self.post(uri, body).await
    }
}

pub async fn post(router: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .uri(uri)
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn settings(url_template: String) -> Settings {
    Settings {
        server: Server {
            host: String::from("127.0.0.1"),
            port: 0,
        },
        logger: Logger {
            level: String::from("debug"),
        },
        controller: Controller {
            url_template,
            timeout_secs: 2,
        },
    }
}
