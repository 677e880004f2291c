//! Boundary validation shared by the gateway and the backend workflows.

/// A request field failed its format constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {problem}")]
pub struct ValidationError {
    pub field: &'static str,
    pub problem: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, problem: &'static str) -> Self {
        Self { field, problem }
    }
}

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose email shape check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.starts_with('.'),
        None => false,
    }
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_email(value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be an email"))
    }
}

pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, "should not be empty"))
    } else {
        Ok(())
    }
}

pub fn require_password(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        Err(ValidationError::new(
            field,
            "must be longer than or equal to 6 characters",
        ))
    } else {
        Ok(())
    }
}
