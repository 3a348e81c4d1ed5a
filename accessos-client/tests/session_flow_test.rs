use std::net::SocketAddr;
use std::sync::Arc;

use accessos_api::models::{DoorControl, DoorStatus, LoginRequest, OutputState, Site};
use accessos_client::dashboard::Overview;
use accessos_client::*;
use accessos_mock::controller::ControllerState;
use accessos_mock::settings::Credentials;
use accessos_server::app::create_app;
use accessos_server::configs::{Controller, Logger, Server, Settings};
use tokio::net::TcpListener;

struct Harness {
    store: Arc<MemoryStore>,
    navigator: Arc<HistoryNavigator>,
    submitter: CredentialSubmitter,
    guard: SessionGuard,
    panel: GatewayPanel,
    controller: ControllerState,
}

impl Harness {
    async fn new() -> Self {
        Self::with_controller_url(|addr| format!("http://{addr}/api/v1")).await
    }

    /// Harness whose gateway reaches the controller at `url_template(addr)`,
    /// `addr` being the simulator's address.
    async fn with_controller_url(url_template: impl FnOnce(SocketAddr) -> String) -> Self {
        let (controller_addr, controller) = accessos_mock::spawn(
            Credentials {
                username: String::from("AccessOS"),
                password: String::from("AccessOS"),
            },
            Site::sample(),
        )
        .await
        .unwrap();

        let settings = Settings {
            server: Server {
                host: String::from("127.0.0.1"),
                port: 0,
            },
            logger: Logger {
                level: String::from("debug"),
            },
            controller: Controller {
                url_template: url_template(controller_addr),
                timeout_secs: 2,
            },
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let gateway_addr = listener.local_addr().unwrap();
        let app = create_app(&settings).unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let transport: Arc<dyn Transport> = Arc::new(
            HttpTransport::new(&ClientConfig {
                base_url: format!("http://{gateway_addr}"),
                timeout_secs: 5,
            })
            .unwrap(),
        );
        let store = Arc::new(MemoryStore::new());
        let navigator = Arc::new(HistoryNavigator::new());

        let submitter = CredentialSubmitter::new(transport.clone(), store.clone(), navigator.clone());
        let guard = SessionGuard::new(store.clone(), navigator.clone());
        let requester = AuthenticatedRequester::new(transport, store.clone(), navigator.clone());

        Self {
            store,
            navigator,
            submitter,
            guard,
            panel: GatewayPanel::new(Arc::new(requester)),
            controller,
        }
    }

    fn request(password: &str) -> LoginRequest {
        LoginRequest {
            icp_serial: String::from("in67434072"),
            username: String::from("AccessOS"),
            password: String::from(password),
        }
    }
}

#[tokio::test]
async fn test_login_then_dashboard() {
    let harness = Harness::new().await;

    assert_eq!(harness.guard.enter(Page::Dashboard), Access::Redirected);

    let session = harness.submitter.submit(&Harness::request("AccessOS")).await.unwrap();
    assert_eq!(harness.navigator.current(), Some(Page::Dashboard));
    assert!(harness.controller.is_valid(&session.session_id).await);

    match harness.guard.enter(Page::Dashboard) {
        Access::Granted(granted) => assert_eq!(granted, session),
        access => panic!("unexpected {access:?}"),
    }

    let overview = Overview::load(&harness.panel).await.unwrap();
    assert_eq!(overview.summary.areas_armed_label(), "3/4");
    assert_eq!(overview.quick_doors.len(), 4);
    assert_eq!(overview.recent_events.len(), 5);
}

#[tokio::test]
async fn test_rejected_login() {
    let harness = Harness::new().await;

    let result = harness.submitter.submit(&Harness::request("wrong")).await;

    assert!(matches!(result, Err(ClientError::LoginRejected(_))));
    assert_eq!(
        harness.submitter.last_error().as_deref(),
        Some("Invalid username or password")
    );
    assert_eq!(Session::load(harness.store.as_ref()), None);
    assert_eq!(harness.guard.enter(Page::Doors), Access::Redirected);
}

#[tokio::test]
async fn test_unreachable_controller() {
    let harness = Harness::with_controller_url(|_| String::from("http://127.0.0.1:9/api/v1")).await;

    let error = harness
        .submitter
        .submit(&Harness::request("AccessOS"))
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Status { status: 502, .. }));
    assert!(error.is_recoverable());
    assert_eq!(
        harness.submitter.last_error().as_deref(),
        Some("Controller unreachable")
    );
    assert_eq!(Session::load(harness.store.as_ref()), None);
    assert_eq!(harness.guard.enter(Page::Dashboard), Access::Redirected);
}

#[tokio::test]
async fn test_controls_through_gateway() {
    let harness = Harness::new().await;
    harness.submitter.submit(&Harness::request("AccessOS")).await.unwrap();

    let door = harness.panel.set_door_lock("door-1", DoorControl::Unlock).await.unwrap();
    assert_eq!(door.status, DoorStatus::Unlocked);

    let output = harness.panel.set_output_state("out-2", OutputState::On).await.unwrap();
    assert_eq!(output.status, OutputState::On);

    let events = harness.panel.list_events().await.unwrap();
    assert_eq!(events.len(), 7);

    assert!(matches!(
        harness.panel.set_door_lock("door-99", DoorControl::Lock).await,
        Err(ClientError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_expired_session_returns_to_login() {
    let harness = Harness::new().await;
    harness.submitter.submit(&Harness::request("AccessOS")).await.unwrap();

    harness.controller.expire_sessions().await;

    let result = harness.panel.list_doors().await;

    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert_eq!(harness.navigator.current(), Some(Page::Login));
    assert_eq!(harness.guard.enter(Page::Doors), Access::Redirected);
}

#[tokio::test]
async fn test_logout() {
    let harness = Harness::new().await;
    let session = harness.submitter.submit(&Harness::request("AccessOS")).await.unwrap();

    harness.submitter.logout().await.unwrap();

    assert!(!harness.controller.is_valid(&session.session_id).await);
    assert_eq!(harness.navigator.current(), Some(Page::Login));
    assert!(matches!(harness.panel.list_areas().await, Err(ClientError::NoSession)));
}
