use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use accessos_api::models::*;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::settings::Credentials;

/// Open sessions kept at once. A login beyond this ends the oldest session.
pub const MAX_SESSIONS: usize = 64;

#[derive(Clone)]
pub struct ControllerState {
    inner: Arc<Inner>,
}

struct Inner {
    credentials: Credentials,
    sessions: RwLock<VecDeque<String>>,
    site: RwLock<Site>,
    event_seq: AtomicUsize,
}

impl ControllerState {
    pub fn new(credentials: Credentials, site: Site) -> Self {
        let event_seq = AtomicUsize::new(site.events.len());

        Self {
            inner: Arc::new(Inner {
                credentials,
                sessions: RwLock::new(VecDeque::new()),
                site: RwLock::new(site),
                event_seq,
            }),
        }
    }

    /// Opens a session when the credentials match.
    pub async fn login(&self, username: &str, password: &str) -> Option<String> {
        let credentials = &self.inner.credentials;
        if credentials.username != username || credentials.password != password {
            return None;
        }

        let session_id = Uuid::new_v4().to_string();

        let mut sessions = self.inner.sessions.write().await;
        if sessions.len() >= MAX_SESSIONS {
            if let Some(evicted) = sessions.pop_front() {
                tracing::debug!("session limit reached, ending {}", evicted);
            }
        }
        sessions.push_back(session_id.clone());

        Some(session_id)
    }

    pub async fn logout(&self, session_id: &str) -> bool {
        let mut sessions = self.inner.sessions.write().await;

        match sessions.iter().position(|open| open == session_id) {
            Some(index) => sessions.remove(index).is_some(),
            None => false,
        }
    }

    pub async fn is_valid(&self, session_id: &str) -> bool {
        self.inner.sessions.read().await.iter().any(|open| open == session_id)
    }

    /// Drops every open session, the way a controller restart does.
    pub async fn expire_sessions(&self) {
        self.inner.sessions.write().await.clear();
    }

    pub async fn site(&self) -> Site {
        self.inner.site.read().await.clone()
    }

    pub async fn control_door(&self, door_id: &str, control: DoorControl) -> Option<Door> {
        let mut site = self.inner.site.write().await;

        let door = site.door_mut(door_id)?;
        door.status = control.resulting_status();
        door.last_access = String::from("Just now");
        let door = door.clone();

        let verb = match control {
            DoorControl::Lock => "locked",
            DoorControl::Unlock => "unlocked",
            DoorControl::Open => "opened",
        };
        let event = self.event(EventKind::Access, format!("{} {} via API", door.name, verb));
        site.events.push(event);

        Some(door)
    }

    pub async fn control_output(&self, output_id: &str, state: OutputState) -> Option<Output> {
        let mut site = self.inner.site.write().await;

        let output = site.output_mut(output_id)?;
        output.status = state;
        let output = output.clone();

        let event = self.event(EventKind::System, format!("{} turned {} via API", output.name, state));
        site.events.push(event);

        Some(output)
    }

    fn event(&self, kind: EventKind, message: String) -> Event {
        let seq = self.inner.event_seq.fetch_add(1, Ordering::SeqCst) + 1;

        Event {
            id: format!("evt-{seq}"),
            time: OffsetDateTime::now_utc(),
            kind,
            message,
            severity: Severity::Info,
        }
    }
}
