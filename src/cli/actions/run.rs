use crate::cli::actions::{Action, dashboard, login, register, social, strength};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Register(args) => register::execute(args).await,
        Action::Strength(args) => strength::execute(&args),
        Action::Social(args) => social::execute(args).await,
        Action::Dashboard(args) => dashboard::execute(args).await,
    }
}
