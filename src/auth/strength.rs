//! Password strength meter for live feedback. It scores five traits, which is
//! looser than the submission gate in `validator` (no symbol or lowercase
//! requirement there); the two are deliberately kept separate.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
}

#[must_use]
pub fn score(password: &str) -> PasswordStrength {
    let traits = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = traits.into_iter().map(u8::from).sum();

    let level = match score {
        0 | 1 => StrengthLevel::Weak,
        2 | 3 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    };

    PasswordStrength { score, level }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(score: u8, level: StrengthLevel) -> PasswordStrength {
        PasswordStrength { score, level }
    }

    #[test]
    fn known_scores() {
        assert_eq!(score(""), strength(0, StrengthLevel::Weak));
        assert_eq!(score("pass"), strength(1, StrengthLevel::Weak));
        assert_eq!(score("Password1"), strength(4, StrengthLevel::Strong));
        assert_eq!(score("P@ssw0rd!"), strength(5, StrengthLevel::Strong));
    }

    #[test]
    fn level_boundaries() {
        // lower + upper
        assert_eq!(score("aB"), strength(2, StrengthLevel::Medium));
        // lower + upper + digit
        assert_eq!(score("aB1"), strength(3, StrengthLevel::Medium));
        // symbol only
        assert_eq!(score("!"), strength(1, StrengthLevel::Weak));
    }

    #[test]
    fn non_ascii_letters_count_as_symbols() {
        assert_eq!(score("é"), strength(1, StrengthLevel::Weak));
    }

    #[test]
    fn strong_score_does_not_imply_submission_gate() {
        // Symbols and lowercase lift the meter without an uppercase letter.
        let meter = score("passw0rd!");
        assert_eq!(meter.level, StrengthLevel::Strong);
        assert!(!crate::auth::validator::PasswordChecks::of("passw0rd!").all());
    }
}
