use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::navigation::{Navigator, Page};
use crate::store::{Session, SessionKey, SessionStore};
use crate::transport::Transport;

/// Sends gateway calls on behalf of the stored session.
pub struct AuthenticatedRequester {
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthenticatedRequester {
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            store,
            navigator,
        }
    }

    /// Posts `payload` with the session credentials merged in and decodes the
    /// reply. Nothing is sent when there is no session, and a 401 reply ends
    /// the session.
    pub async fn request<P, R>(&self, path: &str, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let Some(session) = Session::load(self.store.as_ref()) else {
            tracing::debug!(%path, "no session, redirecting to login");
            self.navigator.navigate(Page::Login);
            return Err(ClientError::NoSession);
        };

        let body = with_credentials(&session, payload)?;
        let response = self.transport.post_json(path, &body).await?;

        if response.status == 401 {
            tracing::info!(%path, "session refused by gateway");
            self.store.clear();
            self.navigator.navigate(Page::Login);
            return Err(ClientError::SessionExpired);
        }

        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                message: response
                    .error_message()
                    .unwrap_or_else(|| format!("Request to {path} failed")),
            });
        }

        Ok(serde_json::from_value(response.body)?)
    }
}

/// Request body for `session`: the payload's fields plus `session_id` and
/// `icp_serial`, the latter two overriding any payload field of the same name.
pub fn with_credentials<P>(session: &Session, payload: &P) -> Result<Value>
where
    P: Serialize + ?Sized,
{
    let mut body = match serde_json::to_value(payload)? {
        Value::Object(fields) => fields,
        Value::Null => Map::new(),
        _ => return Err(ClientError::serialization("request payload must be a JSON object")),
    };

    body.insert(
        SessionKey::SessionId.to_string(),
        Value::String(session.session_id.clone()),
    );
    body.insert(
        SessionKey::IcpSerial.to_string(),
        Value::String(session.icp_serial.clone()),
    );

    Ok(Value::Object(body))
}
