use std::time::Duration;

use accessos_api::inception::*;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::configs::Controller;
use crate::errors::ControllerError;

/// Session a request was authenticated with, as taken from its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSession {
    pub session_id: String,
    pub icp_serial: String,
}

/// Serials end up in the controller host name, so only host name characters pass.
pub fn is_valid_serial(serial: &str) -> bool {
    !serial.is_empty()
        && serial.len() <= 253
        && serial
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

/// REST client for the controller, shared by every gateway request.
#[derive(Clone)]
pub struct InceptionService {
    http: Client,
    controller: Controller,
}

impl InceptionService {
    pub fn new(controller: Controller) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(controller.timeout_secs))
            .build()?;

        Ok(Self { http, controller })
    }

    fn url(&self, serial: &str, path: &str) -> String {
        format!("{}/{}", self.controller.base_url(serial), path)
    }

    fn authenticated(&self, request: RequestBuilder, session: &ControllerSession) -> RequestBuilder {
        request.header(COOKIE, format!("{SESSION_COOKIE}={}", session.session_id))
    }

    /// Logs in and returns the controller session id.
    pub async fn login(
        &self,
        serial: &str,
        username: &str,
        password: &str,
    ) -> Result<String, ControllerError> {
        let url = self.url(serial, LOGIN_PATH);

        tracing::info!(serial, username, "attempting controller login");

        let response = self
            .http
            .post(&url)
            .json(&LoginBody {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(serial, %status, "controller login replied");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let reply = response.json::<LoginReply>().await.unwrap_or_default();
            return Err(ControllerError::LoginRejected(reply.failure_message()));
        }

        if !status.is_success() {
            return Err(ControllerError::UnexpectedStatus(status.as_u16()));
        }

        let reply: LoginReply = response.json().await?;

        reply
            .session_id()
            .map(str::to_owned)
            .ok_or_else(|| ControllerError::LoginRejected(reply.failure_message()))
    }

    pub async fn logout(&self, session: &ControllerSession) -> Result<(), ControllerError> {
        let request = self.http.post(self.url(&session.icp_serial, LOGOUT_PATH));

        let response = self.authenticated(request, session).send().await?;

        Self::check(response, LOGOUT_PATH).map(|_| ())
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        session: &ControllerSession,
        path: &str,
    ) -> Result<Vec<T>, ControllerError> {
        let request = self.http.get(self.url(&session.icp_serial, path));

        let response = self.authenticated(request, session).send().await?;

        let response = Self::check(response, path)?;

        Ok(response.json().await?)
    }

    pub async fn activity(
        &self,
        session: &ControllerSession,
        path: &str,
        activity: &Activity,
    ) -> Result<(), ControllerError> {
        tracing::info!(serial = %session.icp_serial, path, ?activity, "dispatching controller activity");

        let request = self
            .http
            .post(self.url(&session.icp_serial, path))
            .json(activity);

        let response = self.authenticated(request, session).send().await?;

        Self::check(response, path).map(|_| ())
    }

    fn check(response: Response, resource: &str) -> Result<Response, ControllerError> {
        let status = response.status();
        tracing::debug!(resource, %status, "controller replied");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ControllerError::SessionExpired),
            StatusCode::NOT_FOUND => Err(ControllerError::NotFound(resource.to_string())),
            status if status.is_success() => Ok(response),
            status => Err(ControllerError::UnexpectedStatus(status.as_u16())),
        }
    }
}
