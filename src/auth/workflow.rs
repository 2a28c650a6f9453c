//! Form submission state machine:
//! `Idle → Validating → Submitting → {Succeeded, Failed} → Idle`.
//!
//! The workflow owns the form's view state and is the only place that moves
//! between phases. A submit is accepted only from `Idle` (atomic
//! check-and-set on the view channel), so at most one remote call per form is
//! ever in flight regardless of what the presentation layer does with the
//! submit control. Leaving `Submitting` always restores the submit control,
//! including when the submitting future is dropped or panics.

use crate::{
    Error, Result,
    auth::validator::ValidationResult,
    context::AppContext,
    navigation::{self, Page},
    notify::NotificationKind,
    remote::RemoteRequest,
};
use serde::Serialize;
use std::{collections::BTreeMap, sync::Arc};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

pub const BUSY_LABEL: &str = "Processing...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl From<&ValidationResult> for FieldStatus {
    fn from(result: &ValidationResult) -> Self {
        if result.valid {
            Self::Valid
        } else {
            Self::Invalid(result.message.clone())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
    pub busy: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Rejected,
    Succeeded,
    Failed,
}

/// Declarative state of one form; renderers draw it, nothing else mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub form: &'static str,
    pub phase: Phase,
    pub fields: BTreeMap<&'static str, FieldStatus>,
    pub submit: SubmitControl,
    pub last_outcome: Option<Outcome>,
}

/// Result of a completed success path: what to announce and where to go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub message: &'static str,
    pub redirect: Page,
}

/// A form that can run through the workflow.
pub trait FormSpec: Send + Sync {
    fn name(&self) -> &'static str;

    /// Submit label restored after every attempt.
    fn submit_label(&self) -> &'static str;

    /// Validates every field. All fields are checked so each one is annotated.
    fn field_results(&self) -> Vec<(&'static str, ValidationResult)>;

    /// Checks that are not tied to a single field. The message is shown as a
    /// blocking notification.
    fn form_check(&self) -> Result<(), &'static str> {
        Ok(())
    }

    fn request(&self) -> RemoteRequest;

    /// Side effects once the remote call resolved.
    ///
    /// # Errors
    /// Any error is treated as unexpected and reported as a generic failure.
    fn complete(&self, ctx: &AppContext) -> Result<Completion>;

    fn failure_message(&self) -> &'static str;
}

#[derive(Debug)]
pub enum Submission {
    /// Another submission is in flight.
    Ignored,
    /// Validation failed before any remote call. Every entry is an
    /// [`Error::Validation`]; a form-level check is reported under the form name.
    Rejected { errors: Vec<Error> },
    /// `navigation` resolves once the scheduled redirect has happened.
    Succeeded {
        redirect: Page,
        navigation: JoinHandle<()>,
    },
    /// Either [`Error::Remote`] or [`Error::Unexpected`].
    Failed(Error),
}

impl Submission {
    /// Fields named by the validation errors, in form order.
    #[must_use]
    pub fn rejected_fields(&self) -> Vec<&str> {
        match self {
            Self::Rejected { errors } => errors.iter().filter_map(Error::field).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubmissionWorkflow {
    view: Arc<watch::Sender<FormView>>,
}

impl SubmissionWorkflow {
    #[must_use]
    pub fn new(form: &'static str, submit_label: &'static str, fields: &[&'static str]) -> Self {
        let view = FormView {
            form,
            phase: Phase::Idle,
            fields: fields
                .iter()
                .map(|name| (*name, FieldStatus::Untouched))
                .collect(),
            submit: SubmitControl {
                label: submit_label.to_string(),
                disabled: false,
                busy: false,
            },
            last_outcome: None,
        };
        let (view, _) = watch::channel(view);
        Self {
            view: Arc::new(view),
        }
    }

    /// Builds a workflow whose initial view matches `form`.
    #[must_use]
    pub fn for_form(form: &dyn FormSpec) -> Self {
        let fields: Vec<&'static str> = form.field_results().into_iter().map(|(n, _)| n).collect();
        Self::new(form.name(), form.submit_label(), &fields)
    }

    #[must_use]
    pub fn view(&self) -> FormView {
        self.view.borrow().clone()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.view.borrow().phase
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.view.subscribe()
    }

    /// Records a single field result, e.g. on blur.
    pub fn annotate(&self, field: &'static str, result: &ValidationResult) {
        let status = FieldStatus::from(result);
        self.view.send_if_modified(|view| match view.fields.get(field) {
            Some(current) if *current == status => false,
            _ => {
                view.fields.insert(field, status);
                true
            }
        });
    }

    pub async fn submit(&self, form: &dyn FormSpec, ctx: &AppContext) -> Submission {
        let name = form.name();
        let started = self.view.send_if_modified(|view| {
            if view.phase == Phase::Idle {
                view.phase = Phase::Validating;
                true
            } else {
                false
            }
        });
        if !started {
            debug!(form = name, "submit ignored, submission in flight");
            return Submission::Ignored;
        }

        let results = form.field_results();
        let mut invalid: Vec<Error> = results
            .iter()
            .filter(|(_, result)| !result.valid)
            .map(|(field, result)| Error::validation(field, &result.message))
            .collect();
        let form_check = form.form_check();
        if let Err(message) = form_check {
            invalid.push(Error::validation(name, message));
        }

        if !invalid.is_empty() {
            self.view.send_modify(|view| {
                for (field, result) in &results {
                    view.fields.insert(*field, FieldStatus::from(result));
                }
                view.phase = Phase::Idle;
                view.last_outcome = Some(Outcome::Rejected);
            });
            if let Err(message) = form_check {
                ctx.notifications.show(message, NotificationKind::Error);
            }
            debug!(form = name, invalid = invalid.len(), "submission rejected");
            return Submission::Rejected { errors: invalid };
        }

        self.view.send_modify(|view| {
            for (field, result) in &results {
                view.fields.insert(*field, FieldStatus::from(result));
            }
            view.phase = Phase::Submitting;
            view.submit.disabled = true;
            view.submit.busy = true;
            view.submit.label = BUSY_LABEL.to_string();
        });
        let _restore = RestoreSubmit {
            view: &self.view,
            label: form.submit_label(),
        };

        let result = match ctx.remote.invoke(form.request()).await {
            Ok(_) => form.complete(ctx).map_err(|err| {
                warn!(form = name, "submission failed unexpectedly: {err}");
                Error::Unexpected(err.to_string())
            }),
            Err(remote) => {
                warn!(form = name, "submission failed: {remote}");
                Err(Error::Remote(remote))
            }
        };

        match result {
            Ok(completion) => {
                self.finish(Phase::Succeeded, Outcome::Succeeded);
                ctx.notifications
                    .show(completion.message, NotificationKind::Success);
                let navigation = navigation::schedule(
                    ctx.navigator.clone(),
                    completion.redirect,
                    ctx.config.redirect_delay,
                );
                info!(form = name, redirect = %completion.redirect, "submission succeeded");
                Submission::Succeeded {
                    redirect: completion.redirect,
                    navigation,
                }
            }
            Err(err) => {
                self.finish(Phase::Failed, Outcome::Failed);
                ctx.notifications
                    .show(form.failure_message(), NotificationKind::Error);
                Submission::Failed(err)
            }
        }
    }

    fn finish(&self, phase: Phase, outcome: Outcome) {
        self.view.send_modify(|view| {
            view.phase = phase;
            view.last_outcome = Some(outcome);
        });
    }
}

/// Re-enables the submit control and returns to `Idle` when dropped.
struct RestoreSubmit<'a> {
    view: &'a watch::Sender<FormView>,
    label: &'static str,
}

impl Drop for RestoreSubmit<'_> {
    fn drop(&mut self) {
        let label = self.label;
        self.view.send_modify(|view| {
            view.submit.disabled = false;
            view.submit.busy = false;
            view.submit.label = label.to_string();
            view.phase = Phase::Idle;
        });
    }
}
