//! Sign-in and registration pages.

pub mod forms;
pub mod strength;
pub mod validator;
pub mod workflow;

use self::{
    forms::{FIELD_CONFIRM_PASSWORD, LoginForm, RegisterForm},
    strength::PasswordStrength,
    validator::{Field, FieldKind, PasswordChecks, ValidationResult},
    workflow::{FormView, Submission, SubmissionWorkflow},
};
use crate::{
    Result,
    context::AppContext,
    navigation::Page,
    notify::NotificationKind,
};
use serde::Serialize;
use std::{fmt, sync::Arc};
use tracing::{debug, info};

/// Live feedback under a password input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordFeedback {
    pub checks: PasswordChecks,
    pub strength: PasswordStrength,
}

#[must_use]
pub fn password_feedback(password: &str) -> PasswordFeedback {
    PasswordFeedback {
        checks: PasswordChecks::of(password),
        strength: strength::score(password),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Github,
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Google => "Google",
            Self::Github => "GitHub",
        })
    }
}

impl std::str::FromStr for SocialProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "github" => Ok(Self::Github),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Drives the login and registration forms of one page load.
#[derive(Clone, Debug)]
pub struct AuthController {
    ctx: Arc<AppContext>,
    login: SubmissionWorkflow,
    register: SubmissionWorkflow,
}

impl AuthController {
    #[must_use]
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            login: SubmissionWorkflow::for_form(&LoginForm::new("", "", false)),
            register: SubmissionWorkflow::for_form(&RegisterForm::new("", "", "", "", false)),
        }
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    #[must_use]
    pub const fn login(&self) -> &SubmissionWorkflow {
        &self.login
    }

    #[must_use]
    pub const fn register(&self) -> &SubmissionWorkflow {
        &self.register
    }

    /// Sends a returning user straight to the dashboard when a session flag
    /// is stored and `page` is one of the auth pages.
    ///
    /// # Errors
    /// Returns an error if the session cannot be read.
    pub fn page_load(&self, page: Page) -> Result<Option<Page>> {
        let target = self.ctx.session().redirect_for(page)?;
        if let Some(target) = target {
            info!(from = %page, to = %target, "stored session, redirecting");
            self.ctx.navigator.navigate(target);
        }
        Ok(target)
    }

    pub async fn submit_login(&self, form: &LoginForm) -> Submission {
        self.login.submit(form, &self.ctx).await
    }

    pub async fn submit_register(&self, form: &RegisterForm) -> Submission {
        self.register.submit(form, &self.ctx).await
    }

    /// Validates a single field on blur and annotates the owning form.
    pub fn validate_field(
        &self,
        workflow: &SubmissionWorkflow,
        name: &'static str,
        kind: FieldKind<'_>,
        value: &str,
    ) -> ValidationResult {
        let result = validator::validate(&Field::new(name, kind, value));
        debug!(field = name, valid = result.valid, "field validated");
        workflow.annotate(name, &result);
        result
    }

    /// Live confirmation feedback on the registration form.
    pub fn confirm_feedback(&self, password: &str, confirmation: &str) -> ValidationResult {
        let result = validator::password_match(password, confirmation);
        if !confirmation.is_empty() {
            self.register.annotate(FIELD_CONFIRM_PASSWORD, &result);
        }
        result
    }

    pub fn social_login(&self, provider: SocialProvider) {
        debug!(%provider, "social login requested");
        self.ctx.notifications.show(
            format!("{provider} login is not implemented yet"),
            NotificationKind::Info,
        );
    }

    #[must_use]
    pub fn views(&self) -> (FormView, FormView) {
        (self.login.view(), self.register.view())
    }
}
