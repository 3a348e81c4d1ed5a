use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Gateway root, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    String::from("http://localhost:5000")
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    /// Decoded JSON body, `Null` when the body was empty or not JSON
    pub body: Value,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Message carried by a gateway error body, or by a login rejection.
    pub fn error_message(&self) -> Option<String> {
        self.body["error"]["message"]
            .as_str()
            .or_else(|| self.body["error"].as_str())
            .map(String::from)
    }
}

/// One JSON POST per call. Errors are reserved for requests that produced no
/// response at all; every HTTP status comes back as a [`TransportResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, path: &str, body: &Value) -> Result<TransportResponse>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<TransportResponse> {
        let url = self.url(path);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        tracing::debug!(%url, status, "gateway replied");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: ClientConfig = serde_json::from_value(json!({})).unwrap();

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_config_from_settings_value() {
        let config: ClientConfig =
            serde_json::from_value(json!({ "base_url": "http://10.0.0.2:5000", "timeout_secs": 3 })).unwrap();

        assert_eq!(config.base_url, "http://10.0.0.2:5000");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = HttpTransport::new(&ClientConfig {
            base_url: "http://localhost:5000/".into(),
            ..ClientConfig::default()
        })
        .unwrap();

        assert_eq!(transport.url("/api/areas"), "http://localhost:5000/api/areas");
    }

    #[test]
    fn test_error_message_from_gateway_and_login_bodies() {
        let gateway = TransportResponse {
            status: 404,
            body: json!({ "error": { "code": 404, "message": "Door door-9 not found" } }),
        };
        let login = TransportResponse {
            status: 401,
            body: json!({ "success": false, "error": "Invalid username or password" }),
        };

        assert_eq!(gateway.error_message().as_deref(), Some("Door door-9 not found"));
        assert_eq!(login.error_message().as_deref(), Some("Invalid username or password"));
    }
}
