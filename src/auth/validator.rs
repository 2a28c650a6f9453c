//! Single-field validation. Rules are checked in a fixed order and the first
//! failure wins: required, email format, password requirements, password
//! confirmation.

use regex::Regex;
use serde::Serialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must meet all requirements";
pub const MISMATCH_MESSAGE: &str = "Passwords do not match";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind<'a> {
    Text,
    Email,
    Password,
    /// Confirmation of the primary password, carrying its current value.
    Confirmation { password: &'a str },
}

#[derive(Clone, Copy, Debug)]
pub struct Field<'a> {
    pub name: &'a str,
    pub kind: FieldKind<'a>,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    #[must_use]
    pub const fn new(name: &'a str, kind: FieldKind<'a>, value: &'a str) -> Self {
        Self { name, kind, value }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when valid.
    pub message: String,
}

impl ValidationResult {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    #[must_use]
    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Live checklist shown under the password input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub number: bool,
}

impl PasswordChecks {
    #[must_use]
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    #[must_use]
    pub const fn all(self) -> bool {
        self.length && self.uppercase && self.number
    }
}

/// Basic email format check on trimmed input.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[must_use]
pub fn validate(field: &Field<'_>) -> ValidationResult {
    let trimmed = field.value.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(REQUIRED_MESSAGE);
    }

    match field.kind {
        FieldKind::Text => ValidationResult::ok(),
        FieldKind::Email if !valid_email(trimmed) => ValidationResult::invalid(EMAIL_MESSAGE),
        FieldKind::Email => ValidationResult::ok(),
        FieldKind::Password if !PasswordChecks::of(trimmed).all() => {
            ValidationResult::invalid(PASSWORD_MESSAGE)
        }
        FieldKind::Password => ValidationResult::ok(),
        FieldKind::Confirmation { password } if field.value != password => {
            ValidationResult::invalid(MISMATCH_MESSAGE)
        }
        FieldKind::Confirmation { .. } => ValidationResult::ok(),
    }
}

/// Live confirmation feedback while typing: an empty confirmation is not yet
/// a mismatch.
#[must_use]
pub fn password_match(password: &str, confirmation: &str) -> ValidationResult {
    if !confirmation.is_empty() && password != confirmation {
        ValidationResult::invalid(MISMATCH_MESSAGE)
    } else {
        ValidationResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: FieldKind<'_>, value: &str) -> ValidationResult {
        validate(&Field::new("field", kind, value))
    }

    #[test]
    fn required_wins_over_everything() {
        for kind in [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Password,
            FieldKind::Confirmation { password: "" },
        ] {
            assert_eq!(check(kind, ""), ValidationResult::invalid(REQUIRED_MESSAGE));
            assert_eq!(
                check(kind, " \t\n"),
                ValidationResult::invalid(REQUIRED_MESSAGE)
            );
        }
    }

    #[test]
    fn email_format() {
        assert!(check(FieldKind::Email, "user@example.com").valid);
        assert!(check(FieldKind::Email, "  user@example.com ").valid);
        assert!(check(FieldKind::Email, "name.surname@mail.example.co").valid);
        for bad in ["user", "user@", "user@example", "us er@example.com", "@example.com"] {
            assert_eq!(
                check(FieldKind::Email, bad),
                ValidationResult::invalid(EMAIL_MESSAGE),
                "{bad}"
            );
        }
    }

    #[test]
    fn password_gate_accepts_when_all_three_rules_hold() {
        for good in ["Passw0rd", "ABCDEFG1", "aaaaaaA1", "Longer Pass 123", "Ünïcode9A"] {
            assert!(check(FieldKind::Password, good).valid, "{good}");
        }
    }

    #[test]
    fn password_gate_rejects_any_single_missing_rule() {
        // too short, no uppercase, no digit
        for bad in ["Pass0rd", "passw0rd", "Password"] {
            let result = check(FieldKind::Password, bad);
            assert!(!result.valid, "{bad}");
            assert_eq!(result.message, PASSWORD_MESSAGE);
        }
    }

    #[test]
    fn password_gate_scores_the_trimmed_value() {
        for padded in ["  Pass0 ", "Passw0r ", "\tPassw0r"] {
            let result = check(FieldKind::Password, padded);
            assert_eq!(result, ValidationResult::invalid(PASSWORD_MESSAGE), "{padded:?}");
        }
        assert!(check(FieldKind::Password, " Passw0rd ").valid);
    }

    #[test]
    fn password_gate_ignores_symbols_and_lowercase() {
        assert!(check(FieldKind::Password, "ABCDEFG1").valid);
        assert!(!check(FieldKind::Password, "!!!!!!!!").valid);
    }

    #[test]
    fn confirmation_is_exact_and_case_sensitive() {
        let kind = FieldKind::Confirmation {
            password: "Passw0rd",
        };
        assert!(check(kind, "Passw0rd").valid);
        assert_eq!(check(kind, "passw0rd"), ValidationResult::invalid(MISMATCH_MESSAGE));
        assert_eq!(check(kind, "Passw0rd "), ValidationResult::invalid(MISMATCH_MESSAGE));
    }

    #[test]
    fn text_only_requires_a_value() {
        assert!(check(FieldKind::Text, "Ana").valid);
    }

    #[test]
    fn password_checks_report_each_rule() {
        assert_eq!(
            PasswordChecks::of("abc"),
            PasswordChecks {
                length: false,
                uppercase: false,
                number: false,
            }
        );
        assert_eq!(
            PasswordChecks::of("abcdefgH"),
            PasswordChecks {
                length: true,
                uppercase: true,
                number: false,
            }
        );
    }

    #[test]
    fn password_match_ignores_empty_confirmation() {
        assert!(password_match("Passw0rd", "").valid);
        assert!(password_match("Passw0rd", "Passw0rd").valid);
        assert!(!password_match("Passw0rd", "Passw0r").valid);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn gate_accepts_iff_length_uppercase_and_digit(password in "\\PC{0,16}") {
                prop_assume!(!password.trim().is_empty());
                let trimmed = password.trim();
                let expected = trimmed.chars().count() >= MIN_PASSWORD_LENGTH
                    && trimmed.chars().any(|c| c.is_ascii_uppercase())
                    && trimmed.chars().any(|c| c.is_ascii_digit());
                prop_assert_eq!(check(FieldKind::Password, &password).valid, expected);
            }

            #[test]
            fn gate_accepts_generated_compliant_passwords(
                body in "[a-z!@#]{6,12}",
                upper in "[A-Z]",
                digit in "[0-9]",
            ) {
                let password = format!("{body}{upper}{digit}");
                prop_assert!(check(FieldKind::Password, &password).valid);
            }

            #[test]
            fn confirmation_valid_iff_equal(password in "\\PC{1,12}", confirmation in "\\PC{1,12}") {
                prop_assume!(!confirmation.trim().is_empty());
                let result = check(FieldKind::Confirmation { password: &password }, &confirmation);
                prop_assert_eq!(result.valid, password == confirmation);
            }

            #[test]
            fn confirmation_of_itself_is_valid(password in "[A-Za-z0-9 ]{0,4}[A-Za-z0-9]{1,12}") {
                let result = check(FieldKind::Confirmation { password: &password }, &password);
                prop_assert!(result.valid);
            }
        }
    }
}
