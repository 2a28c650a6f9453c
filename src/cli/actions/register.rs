use crate::{
    auth::{AuthController, forms::RegisterForm},
    config::AppConfig,
    navigation::Page,
    view::{Renderer, TextRenderer, ViewState},
};
use anyhow::Result;
use secrecy::SecretString;
use std::io;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accept_terms: bool,
}

/// Loads the registration page and submits the form once.
///
/// # Errors
/// Returns an error if the form is rejected or the registration fails.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = super::boot(args.config)?;
    let auth = AuthController::new(ctx.clone());
    let mut renderer = TextRenderer::new(io::stdout());

    if let Some(target) = auth.page_load(Page::Register)? {
        println!("-> {}", target.url(&ctx.config.base_url));
        return Ok(());
    }
    renderer.render(&ViewState::of_auth(Page::Register, &auth))?;

    let form = RegisterForm {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
        terms: args.accept_terms,
    };
    let submission = auth.submit_register(&form).await;
    renderer.render(&ViewState::of_auth(Page::Register, &auth))?;

    super::settle(submission, &ctx).await
}
