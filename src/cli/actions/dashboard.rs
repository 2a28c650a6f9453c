use crate::{
    cli::commands::dashboard::Options,
    config::AppConfig,
    dashboard::{DashboardController, FilterOutcome},
    view::{Renderer, TextRenderer, ViewState},
};
use anyhow::{Result, anyhow, bail};
use std::io;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub options: Options,
}

/// Loads the dashboard, then applies the requested navigation, filter and
/// marketing steps in order, rendering after each one.
///
/// # Errors
/// Returns an error if a step fails; the failure is also shown as a
/// notification.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = super::boot(args.config)?;
    let dashboard = DashboardController::new(ctx);
    let mut renderer = TextRenderer::new(io::stdout());
    let options = args.options;

    if let Err(err) = dashboard.load_data().await {
        debug!("initial load failed: {err}");
    }
    if let Some(section) = &options.section {
        dashboard.navigate(section);
    }
    for tab in &options.tabs {
        dashboard.select_tab(*tab);
    }
    renderer.render(&ViewState::of_dashboard(&dashboard))?;

    if let Some((start, end)) = &options.filter {
        let outcome = dashboard.apply_filter(start, end).await;
        renderer.render(&ViewState::of_dashboard(&dashboard))?;
        match outcome {
            FilterOutcome::Applied(_) | FilterOutcome::Ignored => {}
            FilterOutcome::Invalid(err) => return Err(anyhow!(err)),
            FilterOutcome::Failed(err) => return Err(err.into()),
        }
    }

    if let Some(modal) = options.modal {
        if !dashboard.open_modal(modal) {
            bail!(
                "{modal:?} opens from the {} tab only",
                modal.required_tab()
            );
        }
        renderer.render(&ViewState::of_dashboard(&dashboard))?;
        let submitted = dashboard.submit_modal(modal, &options.fields).await;
        renderer.render(&ViewState::of_dashboard(&dashboard))?;
        submitted?;
    }

    Ok(())
}
