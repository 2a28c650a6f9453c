//! Declarative view state and rendering.
//!
//! Controllers never touch a presentation tree. A [`ViewState`] snapshot is
//! assembled from their watch channels and handed to a [`Renderer`], which
//! reconciles it against whatever it drew last.

use crate::{
    Result,
    auth::{AuthController, workflow::FormView},
    dashboard::{DashboardController, DashboardView},
    navigation::Page,
    notify::Notification,
};
use serde::Serialize;
use serde_json::Value;
use std::{collections::BTreeMap, io::Write};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<FormView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<FormView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardView>,
    pub notification: Option<Notification>,
}

impl ViewState {
    #[must_use]
    pub fn of_auth(page: Page, auth: &AuthController) -> Self {
        let (login, register) = auth.views();
        let (login, register) = match page {
            Page::Register => (None, Some(register)),
            _ => (Some(login), None),
        };
        Self {
            page,
            login,
            register,
            dashboard: None,
            notification: auth.context().notifications.current(),
        }
    }

    #[must_use]
    pub fn of_dashboard(dashboard: &DashboardController) -> Self {
        Self {
            page: Page::Dashboard,
            login: None,
            register: None,
            dashboard: Some(dashboard.view()),
            notification: dashboard.context().notifications.current(),
        }
    }
}

pub trait Renderer {
    /// Brings the presentation in line with `state`.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn render(&mut self, state: &ViewState) -> Result<()>;
}

/// Writes one `component = json` line per component that changed since the
/// previous render; removed components are written as `component = null`.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    drawn: BTreeMap<String, Value>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            drawn: BTreeMap::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &ViewState) -> Result<()> {
        let Value::Object(next) = serde_json::to_value(state)? else {
            return Ok(());
        };

        let removed: Vec<String> = self
            .drawn
            .keys()
            .filter(|key| !next.contains_key(*key))
            .cloned()
            .collect();
        for key in removed {
            self.drawn.remove(&key);
            writeln!(self.out, "{key} = null")?;
        }

        for (key, value) in next {
            if self.drawn.get(&key) == Some(&value) {
                continue;
            }
            writeln!(self.out, "{key} = {value}")?;
            self.drawn.insert(key, value);
        }
        self.out.flush()?;
        Ok(())
    }
}
