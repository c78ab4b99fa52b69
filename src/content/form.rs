use std::sync::OnceLock;

use regex::Regex;

/// Matches the inline email check on the join form: something before the
/// `@`, a domain, a dot, a suffix, no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// A join-form field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
}

impl FieldError {
    /// The inline message shown next to the field.
    pub fn message(self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required.",
            Self::EmailRequired => "Email is required.",
            Self::EmailInvalid => "Please enter a valid email address.",
        }
    }
}

/// A join submission that passed both field checks, trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinSubmission {
    pub name: String,
    pub email: String,
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !email_regex().is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Check both fields, collecting every error the way the form reports them
/// all at once on submit.
pub fn validate_submission(name: &str, email: &str) -> Result<JoinSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_name(name) {
        errors.push(e);
    }
    if let Err(e) = validate_email(email) {
        errors.push(e);
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(JoinSubmission {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/content/form.rs"]
mod tests;
