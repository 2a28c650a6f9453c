//! Admin dashboard: sidebar sections, tab groups, marketing modals, the
//! date-range filter and metrics refresh.

pub mod filter;
pub mod marketing;
pub mod metrics;
pub mod sections;
pub mod tabs;

use self::{
    filter::{DateRange, FilterError},
    marketing::Modal,
    metrics::DashboardMetrics,
    sections::SectionState,
    tabs::{Tab, TabState},
};
use crate::{
    Error, Result,
    context::AppContext,
    notify::NotificationKind,
    remote::{Endpoint, RemoteRequest},
};
use serde::Serialize;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub const FILTER_LABEL: &str = "Aplicar Filtro";
pub const FILTER_BUSY_LABEL: &str = "Aplicando...";
pub const LOAD_FAILED_MESSAGE: &str = "Erro ao carregar dados do dashboard";
pub const FILTER_FAILED_MESSAGE: &str = "Erro ao aplicar filtro";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub label: String,
    pub disabled: bool,
    pub busy: bool,
}

impl Default for FilterControl {
    fn default() -> Self {
        Self {
            label: FILTER_LABEL.to_string(),
            disabled: false,
            busy: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub sections: SectionState,
    pub tabs: TabState,
    pub modal: Option<Modal>,
    pub range: DateRange,
    pub filter: FilterControl,
    pub loading: bool,
    pub metrics: Option<DashboardMetrics>,
}

#[derive(Debug)]
pub enum FilterOutcome {
    /// A filter is already being applied.
    Ignored,
    Invalid(FilterError),
    Applied(DateRange),
    Failed(Error),
}

#[derive(Clone, Debug)]
pub struct DashboardController {
    ctx: Arc<AppContext>,
    view: Arc<watch::Sender<DashboardView>>,
}

impl DashboardController {
    #[must_use]
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let (view, _) = watch::channel(DashboardView::default());
        Self {
            ctx,
            view: Arc::new(view),
        }
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    #[must_use]
    pub fn view(&self) -> DashboardView {
        self.view.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.view.subscribe()
    }

    pub fn navigate(&self, item: &str) {
        debug!(item, "sidebar navigation");
        self.view.send_modify(|view| view.sections.navigate(item));
    }

    pub fn select_tab(&self, tab: Tab) {
        self.view.send_if_modified(|view| {
            let before = view.tabs;
            view.tabs.select(tab);
            before != view.tabs
        });
    }

    /// Opens `modal` when its marketing tab is active. Returns whether it
    /// opened.
    pub fn open_modal(&self, modal: Modal) -> bool {
        self.view.send_if_modified(|view| {
            if modal.can_open(&view.tabs) {
                view.modal = Some(modal);
                true
            } else {
                false
            }
        })
    }

    pub fn close_modal(&self) {
        self.view.send_if_modified(|view| view.modal.take().is_some());
    }

    /// Submits the open marketing modal. On success the modal closes.
    ///
    /// # Errors
    /// Returns the remote failure; the modal stays open.
    pub async fn submit_modal(&self, modal: Modal, fields: &BTreeMap<String, String>) -> Result<()> {
        match self.ctx.remote.invoke(marketing::request(modal, fields)).await {
            Ok(_) => {
                self.ctx
                    .notifications
                    .show(modal.success_message(), NotificationKind::Success);
                self.view.send_if_modified(|view| {
                    if view.modal == Some(modal) {
                        view.modal = None;
                        true
                    } else {
                        false
                    }
                });
                info!(?modal, "marketing item created");
                Ok(())
            }
            Err(err) => {
                warn!(?modal, "marketing submit failed: {err}");
                self.ctx
                    .notifications
                    .show(modal.failure_message(), NotificationKind::Error);
                Err(err.into())
            }
        }
    }

    /// Fetches metrics for the current range.
    ///
    /// # Errors
    /// Returns an error when the call fails or the payload does not decode;
    /// an error notification is shown and previous metrics are kept.
    pub async fn load_data(&self) -> Result<DashboardMetrics> {
        self.view.send_modify(|view| view.loading = true);
        let range = self.view.borrow().range;

        let loaded = async {
            let body = serde_json::to_value(range)?;
            let value = self
                .ctx
                .remote
                .invoke(RemoteRequest::new(Endpoint::DashboardData, body))
                .await?;
            Ok::<_, Error>(serde_json::from_value::<DashboardMetrics>(value)?)
        }
        .await;

        match loaded {
            Ok(metrics) => {
                self.view.send_modify(|view| {
                    view.loading = false;
                    view.metrics = Some(metrics.clone());
                });
                debug!(%range, "dashboard metrics loaded");
                Ok(metrics)
            }
            Err(err) => {
                self.view.send_modify(|view| view.loading = false);
                warn!("dashboard load failed: {err}");
                self.ctx
                    .notifications
                    .show(LOAD_FAILED_MESSAGE, NotificationKind::Error);
                Err(err)
            }
        }
    }

    /// Validates and applies a date range, then reloads metrics.
    pub async fn apply_filter(&self, start: &str, end: &str) -> FilterOutcome {
        let range = match DateRange::parse(start, end) {
            Ok(range) => range,
            Err(err) => {
                self.ctx
                    .notifications
                    .show(err.to_string(), NotificationKind::Error);
                return FilterOutcome::Invalid(err);
            }
        };

        let started = self.view.send_if_modified(|view| {
            if view.filter.busy {
                return false;
            }
            view.range = range;
            view.filter = FilterControl {
                label: FILTER_BUSY_LABEL.to_string(),
                disabled: true,
                busy: true,
            };
            true
        });
        if !started {
            debug!("filter ignored, already applying");
            return FilterOutcome::Ignored;
        }

        let applied = {
            let _restore = RestoreFilter { view: &self.view };
            let body = match serde_json::to_value(range) {
                Ok(body) => body,
                Err(err) => return self.filter_failed(err.into()),
            };
            self.ctx
                .remote
                .invoke(RemoteRequest::new(Endpoint::ApplyFilter, body))
                .await
        };

        match applied {
            Ok(_) => {
                info!(%range, "date filter applied");
                self.ctx
                    .notifications
                    .show(range.applied_message(), NotificationKind::Success);
                // A reload failure raises its own notification.
                let _ = self.load_data().await;
                FilterOutcome::Applied(range)
            }
            Err(err) => self.filter_failed(err.into()),
        }
    }

    fn filter_failed(&self, err: Error) -> FilterOutcome {
        warn!("date filter failed: {err}");
        self.ctx
            .notifications
            .show(FILTER_FAILED_MESSAGE, NotificationKind::Error);
        FilterOutcome::Failed(err)
    }
}

struct RestoreFilter<'a> {
    view: &'a watch::Sender<DashboardView>,
}

impl Drop for RestoreFilter<'_> {
    fn drop(&mut self) {
        self.view.send_modify(|view| view.filter = FilterControl::default());
    }
}
