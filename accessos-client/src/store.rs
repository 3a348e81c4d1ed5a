use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Keys the session lives under in a [`SessionStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    SessionId,
    IcpSerial,
    Username,
}

impl SessionKey {
    pub const ALL: [SessionKey; 3] = [SessionKey::SessionId, SessionKey::IcpSerial, SessionKey::Username];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::SessionId => "session_id",
            SessionKey::IcpSerial => "icp_serial",
            SessionKey::Username => "username",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value storage shared by every client component for one browsing
/// session. Implementations must be safe to share between tasks.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Option<String>;

    fn set(&self, key: SessionKey, value: String);

    fn remove(&self, key: SessionKey);

    fn clear(&self) {
        for key in SessionKey::ALL {
            self.remove(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<SessionKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: String) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key, value);
        }
    }

    fn remove(&self, key: SessionKey) {
        if let Ok(mut values) = self.values.write() {
            values.remove(&key);
        }
    }

    fn clear(&self) {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub icp_serial: String,
    pub username: String,
}

impl Session {
    /// Reads the session back from the store. A missing or empty session id
    /// means there is no session, whatever else the store holds.
    pub fn load(store: &dyn SessionStore) -> Option<Self> {
        let session_id = store
            .get(SessionKey::SessionId)
            .filter(|session_id| !session_id.is_empty())?;

        Some(Self {
            session_id,
            icp_serial: store.get(SessionKey::IcpSerial).unwrap_or_default(),
            username: store.get(SessionKey::Username).unwrap_or_default(),
        })
    }

    pub fn save(&self, store: &dyn SessionStore) {
        store.set(SessionKey::SessionId, self.session_id.clone());
        store.set(SessionKey::IcpSerial, self.icp_serial.clone());
        store.set(SessionKey::Username, self.username.clone());
    }

    pub fn welcome_message(&self) -> String {
        format!(
            "Welcome, {}, Device: {}, Session: {}",
            self.username, self.icp_serial, self.session_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trips_through_store() {
        let store = MemoryStore::new();
        let session = Session {
            session_id: "3f2a".into(),
            icp_serial: "in67434072".into(),
            username: "AccessOS".into(),
        };

        session.save(&store);

        assert_eq!(store.get(SessionKey::SessionId).as_deref(), Some("3f2a"));
        assert_eq!(Session::load(&store), Some(session));
    }

    #[test]
    fn test_empty_session_id_is_no_session() {
        let store = MemoryStore::new();
        store.set(SessionKey::SessionId, String::new());
        store.set(SessionKey::IcpSerial, "in67434072".into());

        assert_eq!(Session::load(&store), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemoryStore::new();
        store.set(SessionKey::SessionId, "3f2a".into());
        store.set(SessionKey::Username, "AccessOS".into());

        store.clear();

        assert!(SessionKey::ALL.iter().all(|key| store.get(*key).is_none()));
    }

    #[test]
    fn test_welcome_message() {
        let session = Session {
            session_id: "3f2a".into(),
            icp_serial: "in67434072".into(),
            username: "AccessOS".into(),
        };

        assert_eq!(
            session.welcome_message(),
            "Welcome, AccessOS, Device: in67434072, Session: 3f2a"
        );
    }
}
