mod common;

use painel::{
    auth::{
        AuthController,
        forms::{FIELD_CONFIRM_PASSWORD, RegisterForm, TERMS_MESSAGE},
        validator::MISMATCH_MESSAGE,
        workflow::{FieldStatus, Submission},
    },
    navigation::Page,
    notify::NotificationKind,
    remote::Endpoint,
    storage::KeyValueStore,
};
use secrecy::ExposeSecret;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn mismatched_confirmation_makes_no_call() {
    let h = common::harness(false);
    let auth = AuthController::new(h.ctx.clone());
    let form = RegisterForm::new("Ana", "ana@example.com", "Passw0rd", "Passw0rd1", true);

    let submission = auth.submit_register(&form).await;
    assert_eq!(submission.rejected_fields(), vec![FIELD_CONFIRM_PASSWORD]);
    assert!(h.remote.endpoints().is_empty());
    assert_eq!(
        auth.register().view().fields.get(FIELD_CONFIRM_PASSWORD),
        Some(&FieldStatus::Invalid(MISMATCH_MESSAGE.to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn unchecked_terms_blocks_with_notification() {
    let h = common::harness(false);
    let auth = AuthController::new(h.ctx.clone());
    let form = RegisterForm::new("Ana", "ana@example.com", "Passw0rd", "Passw0rd", false);

    auth.submit_register(&form).await;
    assert!(h.remote.endpoints().is_empty());
    assert_eq!(
        h.ctx.notifications.current().map(|n| (n.message, n.kind)),
        Some((TERMS_MESSAGE.to_string(), NotificationKind::Error))
    );
}

#[tokio::test(start_paused = true)]
async fn registration_sends_trimmed_fields_and_goes_to_login() -> painel::Result<()> {
    let h = common::harness(false);
    let auth = AuthController::new(h.ctx.clone());
    let form = RegisterForm::new(" Ana ", "ana@example.com ", "Passw0rd", "Passw0rd", true);
    assert_eq!(form.password.expose_secret(), "Passw0rd");

    let submission = auth.submit_register(&form).await;
    assert!(matches!(
        submission,
        Submission::Succeeded {
            redirect: Page::Login,
            ..
        }
    ));

    let requests = h.remote.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, Endpoint::Register);
    assert_eq!(requests[0].body["name"], "Ana");
    assert_eq!(requests[0].body["email"], "ana@example.com");

    // Registration does not sign the user in.
    assert_eq!(h.storage.get("userEmail")?, None);
    assert_eq!(
        h.ctx.notifications.current().map(|n| n.message),
        Some("Account created successfully! Please sign in.".to_string())
    );

    tokio::time::sleep(Duration::from_millis(1501)).await;
    assert_eq!(h.navigator.history(), vec![Page::Login]);
    Ok(())
}
