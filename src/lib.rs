//! # Painel (admin dashboard and sign-in controllers)
//!
//! `painel` holds the behavior behind an admin dashboard and its
//! login/registration pages, kept apart from any presentation tree.
//! Controllers publish declarative view state; a renderer decides how to
//! draw it.
//!
//! ## Auth
//!
//! Login and registration forms run through a single submission workflow:
//! every field is validated, one remote call is issued, the outcome is
//! announced through a notification and, on success, navigation is scheduled
//! after a fixed delay. The submit control is restored on every path.
//!
//! ## Dashboard
//!
//! The dashboard controller switches sidebar sections and tab groups, applies
//! date-range filters and refreshes metrics through the same remote call
//! abstraction.
//!
//! ## Context
//!
//! There are no page-level singletons. [`context::AppContext`] is built once
//! at startup and handed to each controller; remote calls, storage and
//! navigation are all injected through it so tests can substitute fakes.

pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod navigation;
pub mod notify;
pub mod remote;
pub mod session;
pub mod storage;
pub mod view;

pub use self::error::{Error, Result};

pub const GIT_COMMIT_HASH: &str = env!("PAINEL_GIT_SHA");

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
