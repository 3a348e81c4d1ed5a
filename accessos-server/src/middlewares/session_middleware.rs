use accessos_api::models::SessionCredentials;
use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::errors::{ApiError, SessionError};
use crate::services::{is_valid_serial, ControllerSession};

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Requires `session_id` and `icp_serial` in the JSON body and exposes them to
/// handlers as a [`ControllerSession`] extension. The body is handed on intact
/// so handlers can still extract their own fields from it.
pub async fn session(req: Request, next: Next) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| SessionError::InvalidBody)?;

    let credentials: SessionCredentials = if bytes.is_empty() {
        SessionCredentials::default()
    } else {
        serde_json::from_slice(&bytes).map_err(|_| SessionError::InvalidBody)?
    };

    if credentials.session_id.is_empty() {
        tracing::debug!(path = %parts.uri.path(), "rejecting request without session");
        return Err(SessionError::MissingSession.into());
    }

    if !is_valid_serial(&credentials.icp_serial) {
        return Err(SessionError::InvalidDevice.into());
    }

    let mut req = Request::from_parts(parts, Body::from(bytes));

    req.extensions_mut().insert(ControllerSession {
        session_id: credentials.session_id,
        icp_serial: credentials.icp_serial,
    });

    Ok(next.run(req).await)
}
