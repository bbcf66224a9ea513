use crate::error::ApiError;

/// Collects per-field validation messages; empty means the request passes.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn require(&mut self, ok: bool, message: &str) {
        if !ok {
            self.errors.push(message.to_owned());
        }
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

/// Loose email shape check: `local@domain.tld`, no whitespace.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

pub fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_plain_addresses() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last@sub.domain.org"));
    }

    #[test]
    fn should_reject_malformed_addresses() {
        assert!(!is_email(""));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("@domain.com"));
        assert!(!is_email("user@nodot"));
        assert!(!is_email("user@.com"));
        assert!(!is_email("user@domain.com "));
    }

    #[test]
    fn should_collect_field_errors() {
        let mut errors = FieldErrors::new();
        errors.require(is_email("bogus"), "email must be a valid email address");
        errors.require(non_empty(""), "name must not be empty");
        let err = errors.finish().unwrap_err();
        match err {
            ApiError::Validation(fields) => assert_eq!(fields.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn should_pass_when_no_errors() {
        let mut errors = FieldErrors::new();
        errors.require(true, "unused");
        assert!(errors.finish().is_ok());
    }
}
