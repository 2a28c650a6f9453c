//! Session flag persisted in client-local storage. Written on a successful
//! login and read when the login or registration page loads; there is no
//! logout path, so nothing clears it.

use crate::{Result, navigation::Page, storage::KeyValueStore};
use std::sync::Arc;

pub const REMEMBER_LOGIN_KEY: &str = "rememberLogin";
pub const USER_EMAIL_KEY: &str = "userEmail";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionFlag {
    pub remember: bool,
    pub user_email: String,
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Records a successful login. `rememberLogin` is only written when the
    /// user asked to be remembered; an older value is left untouched.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn record_login(&self, email: &str, remember: bool) -> Result<()> {
        if remember {
            self.storage.set(REMEMBER_LOGIN_KEY, "true")?;
        }
        self.storage.set(USER_EMAIL_KEY, email)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn load(&self) -> Result<Option<SessionFlag>> {
        let Some(user_email) = self.storage.get(USER_EMAIL_KEY)? else {
            return Ok(None);
        };
        let remember = self
            .storage
            .get(REMEMBER_LOGIN_KEY)?
            .is_some_and(|value| value == "true");
        Ok(Some(SessionFlag {
            remember,
            user_email,
        }))
    }

    /// Page-load check: a stored email on the login or registration page
    /// sends the user straight to the dashboard.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn redirect_for(&self, page: Page) -> Result<Option<Page>> {
        if !matches!(page, Page::Login | Page::Register) {
            return Ok(None);
        }
        let stored = self
            .storage
            .get(USER_EMAIL_KEY)?
            .filter(|email| !email.is_empty());
        Ok(stored.map(|_| Page::Dashboard))
    }
}
