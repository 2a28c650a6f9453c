//! Login and registration forms. Field names match the element identifiers
//! the pages expose. Passwords are held as secrets and only exposed to the
//! validator and the outgoing request body.

use super::{
    validator::{self, Field, FieldKind, ValidationResult},
    workflow::{Completion, FormSpec},
};
use crate::{
    Result,
    context::AppContext,
    navigation::Page,
    remote::{Endpoint, RemoteRequest},
};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";

pub const TERMS_MESSAGE: &str = "Please accept the terms and conditions";

#[derive(Clone, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
    pub remember: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember: bool) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            remember,
        }
    }
}

impl FormSpec for LoginForm {
    fn name(&self) -> &'static str {
        "login"
    }

    fn submit_label(&self) -> &'static str {
        "Sign In"
    }

    fn field_results(&self) -> Vec<(&'static str, ValidationResult)> {
        vec![
            (
                FIELD_EMAIL,
                validator::validate(&Field::new(FIELD_EMAIL, FieldKind::Email, &self.email)),
            ),
            (
                FIELD_PASSWORD,
                validator::validate(&Field::new(
                    FIELD_PASSWORD,
                    FieldKind::Password,
                    self.password.expose_secret(),
                )),
            ),
        ]
    }

    fn request(&self) -> RemoteRequest {
        RemoteRequest::new(
            Endpoint::Login,
            json!({
                "email": self.email.trim(),
                "password": self.password.expose_secret(),
                "remember": self.remember,
            }),
        )
    }

    fn complete(&self, ctx: &AppContext) -> Result<Completion> {
        ctx.session().record_login(&self.email, self.remember)?;
        Ok(Completion {
            message: "Login successful! Redirecting...",
            redirect: Page::Dashboard,
        })
    }

    fn failure_message(&self) -> &'static str {
        "Login failed. Please check your credentials."
    }
}

#[derive(Clone, Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub terms: bool,
}

impl RegisterForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
        terms: bool,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
            terms,
        }
    }
}

impl FormSpec for RegisterForm {
    fn name(&self) -> &'static str {
        "register"
    }

    fn submit_label(&self) -> &'static str {
        "Create Account"
    }

    fn field_results(&self) -> Vec<(&'static str, ValidationResult)> {
        let password = self.password.expose_secret();
        vec![
            (
                FIELD_NAME,
                validator::validate(&Field::new(FIELD_NAME, FieldKind::Text, &self.name)),
            ),
            (
                FIELD_EMAIL,
                validator::validate(&Field::new(FIELD_EMAIL, FieldKind::Email, &self.email)),
            ),
            (
                FIELD_PASSWORD,
                validator::validate(&Field::new(FIELD_PASSWORD, FieldKind::Password, password)),
            ),
            (
                FIELD_CONFIRM_PASSWORD,
                validator::validate(&Field::new(
                    FIELD_CONFIRM_PASSWORD,
                    FieldKind::Confirmation { password },
                    self.confirm_password.expose_secret(),
                )),
            ),
        ]
    }

    fn form_check(&self) -> Result<(), &'static str> {
        if self.terms { Ok(()) } else { Err(TERMS_MESSAGE) }
    }

    fn request(&self) -> RemoteRequest {
        RemoteRequest::new(
            Endpoint::Register,
            json!({
                "name": self.name.trim(),
                "email": self.email.trim(),
                "password": self.password.expose_secret(),
            }),
        )
    }

    fn complete(&self, _ctx: &AppContext) -> Result<Completion> {
        Ok(Completion {
            message: "Account created successfully! Please sign in.",
            redirect: Page::Login,
        })
    }

    fn failure_message(&self) -> &'static str {
        "Registration failed. Please try again."
    }
}
