use crate::{
    auth::{AuthController, forms::LoginForm},
    config::AppConfig,
    navigation::Page,
    view::{Renderer, TextRenderer, ViewState},
};
use anyhow::Result;
use secrecy::SecretString;
use std::io;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub email: String,
    pub password: SecretString,
    pub remember: bool,
}

/// Loads the sign-in page and submits the form once.
///
/// # Errors
/// Returns an error if the form is rejected or the sign-in fails.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = super::boot(args.config)?;
    let auth = AuthController::new(ctx.clone());
    let mut renderer = TextRenderer::new(io::stdout());

    if let Some(target) = auth.page_load(Page::Login)? {
        info!("already signed in");
        println!("-> {}", target.url(&ctx.config.base_url));
        return Ok(());
    }
    renderer.render(&ViewState::of_auth(Page::Login, &auth))?;

    let form = LoginForm {
        email: args.email,
        password: args.password,
        remember: args.remember,
    };
    let submission = auth.submit_login(&form).await;
    renderer.render(&ViewState::of_auth(Page::Login, &auth))?;

    super::settle(submission, &ctx).await
}
