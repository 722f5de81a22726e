use std::collections::HashMap;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";

pub const DUPLICATE_EMAIL: &str = "Email already exists";

/// Submitted field values and per-field error messages for one render of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
}

impl FormState {
    pub fn from_submission(name: &str, email: &str) -> Self {
        let mut form = FormState::default();
        form.values.insert(NAME_FIELD.to_string(), name.to_string());
        form.values.insert(EMAIL_FIELD.to_string(), email.to_string());
        form
    }

    /// Form for a rejected duplicate, keeping what the user typed.
    pub fn duplicate_email(name: &str, email: &str) -> Self {
        let mut form = FormState::from_submission(name, email);
        form.insert_error(EMAIL_FIELD, DUPLICATE_EMAIL.to_string());
        form
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn insert_error(&mut self, key: &str, message: String) {
        self.errors.insert(key.to_string(), message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_blank_values() {
        let form = FormState::default();

        assert_eq!(form.value(NAME_FIELD), "");
        assert_eq!(form.error(EMAIL_FIELD), None);
        assert!(!form.has_errors());
    }

    #[test]
    fn submission_keeps_values_without_errors() {
        let form = FormState::from_submission("", "d@d");

        assert_eq!(form.value(NAME_FIELD), "");
        assert_eq!(form.value(EMAIL_FIELD), "d@d");
        assert!(!form.has_errors());
    }

    #[test]
    fn duplicate_keeps_submitted_values() {
        let form = FormState::duplicate_email("E", "a@a.com");

        assert_eq!(form.value(NAME_FIELD), "E");
        assert_eq!(form.value(EMAIL_FIELD), "a@a.com");
        assert_eq!(form.error(EMAIL_FIELD), Some(DUPLICATE_EMAIL));
        assert_eq!(form.error(NAME_FIELD), None);
        assert!(form.has_errors());
    }
}
