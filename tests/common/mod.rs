#![allow(dead_code)]

use async_trait::async_trait;
use painel::{
    config::AppConfig,
    context::AppContext,
    navigation::HistoryNavigator,
    notify::{NotificationId, NotificationPresenter},
    remote::{Endpoint, RemoteCall, RemoteError, RemoteRequest},
    storage::MemoryStore,
};
use serde_json::Value;
use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex},
    time::Duration,
};

/// Deterministic backend: fixed latency, fixed outcome, every call recorded.
pub struct ScriptedRemote {
    latency: Duration,
    fail: bool,
    calls: Mutex<Vec<RemoteRequest>>,
}

impl ScriptedRemote {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self {
            latency,
            fail,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|c| c.endpoint).collect())
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RemoteCall for ScriptedRemote {
    async fn invoke(&self, request: RemoteRequest) -> Result<Value, RemoteError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }
        tokio::time::sleep(self.latency).await;
        if self.fail {
            Err(RemoteError::Rejected("API Error".to_string()))
        } else {
            Ok(Value::Null)
        }
    }
}

pub struct Harness {
    pub ctx: Arc<AppContext>,
    pub remote: Arc<ScriptedRemote>,
    pub navigator: Arc<HistoryNavigator>,
    pub storage: Arc<MemoryStore>,
}

pub fn harness(fail: bool) -> Harness {
    let config = AppConfig::default();
    let remote = Arc::new(ScriptedRemote::new(Duration::from_millis(2000), fail));
    let navigator = Arc::new(HistoryNavigator::new(config.base_url.clone()));
    let storage = Arc::new(MemoryStore::new());
    let ctx = Arc::new(AppContext::new(
        config,
        storage.clone(),
        remote.clone(),
        navigator.clone(),
    ));
    Harness {
        ctx,
        remote,
        navigator,
        storage,
    }
}

/// Records the id of every notification that reaches the slot.
pub fn record_notifications(
    presenter: &NotificationPresenter,
) -> Arc<Mutex<BTreeSet<NotificationId>>> {
    let seen = Arc::new(Mutex::new(BTreeSet::new()));
    let mut updates = presenter.subscribe();
    let sink = seen.clone();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let id = updates.borrow_and_update().as_ref().map(|n| n.id);
            if let (Some(id), Ok(mut ids)) = (id, sink.lock()) {
                ids.insert(id);
            }
        }
    });
    seen
}

pub fn distinct(seen: &Mutex<BTreeSet<NotificationId>>) -> usize {
    seen.lock().map(|ids| ids.len()).unwrap_or_default()
}
