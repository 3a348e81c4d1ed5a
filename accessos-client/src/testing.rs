use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::{Transport, TransportResponse};

/// Replays canned replies and records every request it was handed.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<VecDeque<Result<TransportResponse>>>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse { status, body }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ClientError::network(message)));
        self
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<TransportResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network("no reply queued")))
    }
}
