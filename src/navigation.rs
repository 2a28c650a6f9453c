//! Page navigation. Controllers never touch a location directly; they hand a
//! [`Page`] to a [`Navigator`], optionally after a delay.

use serde::Serialize;
use std::{
    fmt,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Login,
    Register,
}

impl Page {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "index.html",
            Self::Login => "login.html",
            Self::Register => "register.html",
        }
    }

    /// Resolves the page against the configured base URL.
    #[must_use]
    pub fn url(self, base: &Url) -> Url {
        base.join(self.path()).unwrap_or_else(|_| base.clone())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}

/// Records every navigation; the CLI uses it to report where the flow ended.
#[derive(Debug)]
pub struct HistoryNavigator {
    base_url: Url,
    history: Mutex<Vec<Page>>,
}

impl HistoryNavigator {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            history: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn history(&self) -> Vec<Page> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn current(&self) -> Option<Page> {
        self.history().last().copied()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, page: Page) {
        info!("navigating to {}", page.url(&self.base_url));
        if let Ok(mut history) = self.history.lock() {
            history.push(page);
        }
    }
}

/// Navigates once after `delay`. The returned handle is informational only:
/// a scheduled navigation is not cancelled once issued.
pub fn schedule(navigator: Arc<dyn Navigator>, page: Page, delay: Duration) -> JoinHandle<()> {
    debug!("navigation to {page} scheduled in {delay:?}");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        navigator.navigate(page);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        match Url::parse("https://admin.example.com/painel/") {
            Ok(url) => url,
            Err(err) => panic!("test url must parse: {err}"),
        }
    }

    #[test]
    fn pages_resolve_against_base() {
        let base = base();
        assert_eq!(
            Page::Dashboard.url(&base).as_str(),
            "https://admin.example.com/painel/index.html"
        );
        assert_eq!(
            Page::Login.url(&base).as_str(),
            "https://admin.example.com/painel/login.html"
        );
        assert_eq!(Page::Register.to_string(), "register.html");
    }

    #[test]
    fn history_navigator_records_pages() {
        let navigator = HistoryNavigator::new(base());
        assert_eq!(navigator.current(), None);
        navigator.navigate(Page::Login);
        navigator.navigate(Page::Dashboard);
        assert_eq!(navigator.history(), vec![Page::Login, Page::Dashboard]);
        assert_eq!(navigator.current(), Some(Page::Dashboard));
    }

    #[tokio::test(start_paused = true)]
    async fn schedule_navigates_after_delay() {
        let navigator = Arc::new(HistoryNavigator::new(base()));
        let handle = schedule(navigator.clone(), Page::Dashboard, Duration::from_millis(1500));

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(navigator.history().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(handle.await.is_ok());
        assert_eq!(navigator.history(), vec![Page::Dashboard]);
    }
}
