pub mod dashboard;
pub mod login;
pub mod register;
pub mod social;
pub mod strength;

// Internal "interpreter" for `Action`.
mod run;

use crate::{
    auth::workflow::Submission,
    config::AppConfig,
    context::{self, AppContext},
    navigation::{HistoryNavigator, Navigator},
};
use anyhow::{Result, anyhow};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
    Strength(strength::Args),
    Social(social::Args),
    Dashboard(dashboard::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Builds the context for one page load.
fn boot(config: AppConfig) -> Result<Arc<AppContext>> {
    let navigator: Arc<dyn Navigator> = Arc::new(HistoryNavigator::new(config.base_url.clone()));
    let storage = context::storage_for(&config);
    let remote = context::remote_for(&config)?;
    Ok(Arc::new(AppContext::new(config, storage, remote, navigator)))
}

/// Waits for the scheduled redirect of a successful submission and turns the
/// other outcomes into errors.
async fn settle(submission: Submission, ctx: &AppContext) -> Result<()> {
    match submission {
        Submission::Succeeded {
            redirect,
            navigation,
        } => {
            navigation
                .await
                .map_err(|err| anyhow!("navigation to {redirect} did not happen: {err}"))?;
            debug!("navigated to {redirect}");
            println!("-> {}", redirect.url(&ctx.config.base_url));
            Ok(())
        }
        Submission::Rejected { errors } => {
            let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
            Err(anyhow!("form rejected: {}", reasons.join("; ")))
        }
        Submission::Failed(err) => Err(err.into()),
        Submission::Ignored => Err(anyhow!("a submission is already in flight")),
    }
}
