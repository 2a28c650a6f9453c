use crate::auth::{
    self,
    validator::{self, Field, FieldKind},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

#[derive(Debug)]
pub struct Args {
    pub password: SecretString,
}

/// Prints the checklist, the meter and the submission verdict as JSON.
///
/// # Errors
/// Returns an error if the report cannot be serialized.
pub fn execute(args: &Args) -> Result<()> {
    let password = args.password.expose_secret();
    let feedback = auth::password_feedback(password);
    let verdict = validator::validate(&Field::new("password", FieldKind::Password, password));

    let report = json!({
        "checks": feedback.checks,
        "strength": feedback.strength,
        "accepted": verdict.valid,
        "message": verdict.message,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
