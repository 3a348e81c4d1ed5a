//! Client side of the AccessOS dashboard: the session store, the login flow,
//! the guard run on every protected page, the requester that attaches the
//! session to gateway calls, and the data access built on top of them.

pub mod dashboard;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod panel;
pub mod requester;
pub mod store;
pub mod submitter;
pub mod transport;

pub use error::{ClientError, Result};
pub use guard::{Access, SessionGuard};
pub use navigation::{HistoryNavigator, Navigator, Page};
pub use panel::{ControlPanel, GatewayPanel, MockPanel};
pub use requester::AuthenticatedRequester;
pub use store::{MemoryStore, Session, SessionKey, SessionStore};
pub use submitter::CredentialSubmitter;
pub use transport::{ClientConfig, HttpTransport, Transport, TransportResponse};

#[cfg(test)]
mod testing;
