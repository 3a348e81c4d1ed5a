use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
    Areas,
    Doors,
    Inputs,
    Outputs,
    Users,
    Events,
    Settings,
}

impl Page {
    pub const ALL: [Page; 9] = [
        Page::Login,
        Page::Dashboard,
        Page::Areas,
        Page::Doors,
        Page::Inputs,
        Page::Outputs,
        Page::Users,
        Page::Events,
        Page::Settings,
    ];

    /// Document the page is served as.
    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "index.html",
            Page::Dashboard => "dashboard.html",
            Page::Areas => "areas.html",
            Page::Doors => "doors.html",
            Page::Inputs => "inputs.html",
            Page::Outputs => "outputs.html",
            Page::Users => "users.html",
            Page::Events => "events.html",
            Page::Settings => "settings.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Dashboard => "Dashboard",
            Page::Areas => "Areas",
            Page::Doors => "Doors",
            Page::Inputs => "Inputs",
            Page::Outputs => "Outputs",
            Page::Users => "Users",
            Page::Events => "Events",
            Page::Settings => "Settings",
        }
    }

    pub fn is_protected(self) -> bool {
        self != Page::Login
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_start_matches('/');
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// Performs full page transitions.
pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}

/// Records transitions instead of performing them.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: RwLock<Vec<Page>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Page> {
        self.history.read().ok().and_then(|history| history.last().copied())
    }

    pub fn history(&self) -> Vec<Page> {
        self.history
            .read()
            .map(|history| history.clone())
            .unwrap_or_default()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, page: Page) {
        tracing::debug!("navigate to {}", page.path());

        if let Ok(mut history) = self.history.write() {
            history.push(page);
        }
    }
}
