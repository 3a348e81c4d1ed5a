use std::sync::{Arc, RwLock};

use accessos_api::models::{LoginRequest, LoginResponse};
use serde_json::json;

use crate::error::{ClientError, Result};
use crate::navigation::{Navigator, Page};
use crate::store::{Session, SessionStore};
use crate::transport::Transport;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// Drives the login form: one request per submission, and on success the
/// session lands in the store before the dashboard is entered.
pub struct CredentialSubmitter {
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    last_error: RwLock<Option<String>>,
}

impl CredentialSubmitter {
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            store,
            navigator,
            last_error: RwLock::new(None),
        }
    }

    pub async fn submit(&self, request: &LoginRequest) -> Result<Session> {
        match self.login(request).await {
            Ok(session) => {
                session.save(self.store.as_ref());
                self.clear_error();

                tracing::info!(serial = %session.icp_serial, username = %session.username, "logged in");

                self.navigator.navigate(Page::Dashboard);
                Ok(session)
            }
            Err(e) => {
                tracing::info!(serial = %request.icp_serial, username = %request.username, "login failed: {}", e);

                self.set_error(e.user_message());
                Err(e)
            }
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let body = serde_json::to_value(request)?;
        let response = self.transport.post_json(LOGIN_PATH, &body).await?;

        match response.status {
            401 | 403 => {
                return Err(ClientError::LoginRejected(
                    response
                        .error_message()
                        .unwrap_or_else(|| String::from("Login failed")),
                ));
            }
            status if !response.is_success() => {
                return Err(ClientError::Status {
                    status,
                    message: response
                        .error_message()
                        .unwrap_or_else(|| String::from("Login failed")),
                });
            }
            _ => {}
        }

        let reply: LoginResponse = serde_json::from_value(response.body)?;

        let session_id = reply.session_id.filter(|session_id| !session_id.is_empty());

        match session_id {
            Some(session_id) if reply.success => Ok(Session {
                session_id,
                icp_serial: request.icp_serial.clone(),
                username: request.username.clone(),
            }),
            _ => Err(ClientError::LoginRejected(
                reply.error.unwrap_or_else(|| String::from("Login failed")),
            )),
        }
    }

    /// Closes the controller session. Whatever the gateway says, the store is
    /// cleared and the login page entered afterwards.
    pub async fn logout(&self) -> Result<()> {
        let result = match Session::load(self.store.as_ref()) {
            Some(session) => {
                let body = json!({
                    "session_id": session.session_id,
                    "icp_serial": session.icp_serial,
                });

                self.transport.post_json(LOGOUT_PATH, &body).await.map(|_| ())
            }
            None => Ok(()),
        };

        self.store.clear();
        self.navigator.navigate(Page::Login);

        result
    }

    /// Message of the last failed submission, cleared by the next success.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().ok().and_then(|error| error.clone())
    }

    pub fn clear_error(&self) {
        if let Ok(mut error) = self.last_error.write() {
            *error = None;
        }
    }

    fn set_error(&self, message: String) {
        if let Ok(mut error) = self.last_error.write() {
            *error = Some(message);
        }
    }
}
