//! Application context built once at startup and passed to every controller.

use crate::{
    Result,
    config::AppConfig,
    navigation::Navigator,
    notify::NotificationPresenter,
    remote::{HttpRemoteCall, RemoteCall, SimulatedBackend},
    session::SessionStore,
    storage::{FileStore, KeyValueStore, MemoryStore},
};
use std::{fmt, sync::Arc};
use tracing::debug;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub storage: Arc<dyn KeyValueStore>,
    pub remote: Arc<dyn RemoteCall>,
    pub navigator: Arc<dyn Navigator>,
    pub notifications: NotificationPresenter,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    #[must_use]
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn KeyValueStore>,
        remote: Arc<dyn RemoteCall>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let notifications = NotificationPresenter::new(config.notifications);
        Self {
            config,
            storage,
            remote,
            navigator,
            notifications,
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionStore {
        SessionStore::new(self.storage.clone())
    }
}

/// File-backed store when a path is configured, in-memory otherwise.
#[must_use]
pub fn storage_for(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match &config.storage_path {
        Some(path) => {
            debug!("using file storage at {}", path.display());
            Arc::new(FileStore::new(path))
        }
        None => Arc::new(MemoryStore::new()),
    }
}

/// Real HTTP backend when an API URL is configured, simulated otherwise.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub fn remote_for(config: &AppConfig) -> Result<Arc<dyn RemoteCall>> {
    match &config.api_url {
        Some(url) => {
            debug!("using HTTP backend at {url}");
            Ok(Arc::new(HttpRemoteCall::new(url.clone())?))
        }
        None => Ok(Arc::new(SimulatedBackend::new(config.simulation.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::NotificationTimings,
        navigation::HistoryNavigator,
        notify::{NotificationKind, Stage},
    };
    use std::{path::PathBuf, time::Duration};

    #[test]
    fn storage_for_picks_backend() -> Result<()> {
        let memory = storage_for(&AppConfig::default());
        memory.set("userEmail", "a@b.co")?;
        assert_eq!(memory.get("userEmail")?.as_deref(), Some("a@b.co"));

        let dir = tempfile::tempdir().map_err(|e| crate::Error::Storage(e.to_string()))?;
        let path: PathBuf = dir.path().join("store.json");
        let config = AppConfig::default().with_storage_path(Some(path.clone()));
        storage_for(&config).set("userEmail", "a@b.co")?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn context_exposes_session_over_shared_storage() -> Result<()> {
        let config = AppConfig::default();
        let navigator = Arc::new(HistoryNavigator::new(config.base_url.clone()));
        let ctx = AppContext::new(
            config.clone(),
            storage_for(&config),
            remote_for(&config)?,
            navigator,
        );
        ctx.session().record_login("user@example.com", false)?;
        assert_eq!(
            ctx.storage.get("userEmail")?.as_deref(),
            Some("user@example.com")
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn notifications_follow_configured_timings() -> Result<()> {
        let timings = NotificationTimings {
            enter: Duration::from_millis(10),
            display: Duration::from_millis(1000),
            exit: Duration::from_millis(50),
        };
        let config = AppConfig::default().with_notifications(timings);
        let navigator = Arc::new(HistoryNavigator::new(config.base_url.clone()));
        let ctx = AppContext::new(
            config.clone(),
            storage_for(&config),
            remote_for(&config)?,
            navigator,
        );

        ctx.notifications.show("Saved", NotificationKind::Success);
        tokio::time::sleep(Duration::from_millis(1020)).await;
        assert_eq!(
            ctx.notifications.current().map(|n| n.stage),
            Some(Stage::Leaving)
        );
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(ctx.notifications.current(), None);
        Ok(())
    }
}
