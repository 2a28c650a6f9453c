use crate::{
    auth::{AuthController, SocialProvider},
    config::AppConfig,
    navigation::Page,
    view::{Renderer, TextRenderer, ViewState},
};
use anyhow::Result;
use std::io;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub provider: SocialProvider,
}

/// # Errors
/// Returns an error if the page cannot be rendered.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = super::boot(args.config)?;
    let auth = AuthController::new(ctx);
    auth.social_login(args.provider);

    let mut renderer = TextRenderer::new(io::stdout());
    renderer.render(&ViewState::of_auth(Page::Login, &auth))?;
    Ok(())
}
