use std::sync::OnceLock;

use regex::Regex;

use crate::core::errors::ApiError;

/// Pre-flight checks: shape only, never content. The backend stays
/// authoritative for anything beyond "this field is obviously unusable".

pub fn require_non_empty(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

pub fn require_email(value: &str) -> Result<(), ApiError> {
    require_non_empty(value, "Email")?;
    if !email_regex().is_match(value.trim()) {
        return Err(ApiError::Validation("Email address is not valid".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected_before_any_request() {
        assert!(require_non_empty("", "Image URL").is_err());
        assert!(require_non_empty("   ", "Caption").is_err());
        assert!(require_non_empty("ok", "Caption").is_ok());
    }

    #[test]
    fn email_shape_check() {
        assert!(require_email("ana@example.com").is_ok());
        assert!(require_email("not-an-email").is_err());
        assert!(require_email("a b@example.com").is_err());
        assert!(require_email("").is_err());
    }
}
