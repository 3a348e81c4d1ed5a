use std::sync::Arc;

use crate::navigation::{Navigator, Page};
use crate::store::{Session, SessionStore};

/// Outcome of entering a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The page needs no session
    Public,
    /// A session is present and the page may render
    Granted(Session),
    /// No session, the login page has been entered instead
    Redirected,
}

impl Access {
    pub fn may_render(&self) -> bool {
        !matches!(self, Access::Redirected)
    }
}

/// Checked once, synchronously, when a protected page is entered. Presence of
/// a session id is the whole check; it is not validated against the gateway.
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    pub fn enter(&self, page: Page) -> Access {
        if !page.is_protected() {
            return Access::Public;
        }

        match Session::load(self.store.as_ref()) {
            Some(session) => Access::Granted(session),
            None => {
                tracing::debug!("no session on {}, redirecting to login", page.path());
                self.navigator.navigate(Page::Login);
                Access::Redirected
            }
        }
    }
}
