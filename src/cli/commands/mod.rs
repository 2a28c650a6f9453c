pub mod auth;
pub mod dashboard;
pub mod logging;
pub mod remote;
pub mod storage;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("painel")
        .about("Admin dashboard and sign-in controllers")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(auth::login())
        .subcommand(auth::register())
        .subcommand(auth::strength())
        .subcommand(auth::social())
        .subcommand(dashboard::dashboard());

    let command = remote::with_args(command);
    let command = storage::with_args(command);
    logging::with_args(command)
}
