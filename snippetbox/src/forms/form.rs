use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::errors::FormErrors;

static EMAIL_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid regex")
});

/// Submitted form values together with the errors found while validating them.
///
/// Validators only record problems; call [`Form::valid`] once they have run.
/// Length checks count characters, not bytes, and skip empty values so a
/// blank field reports only the `required` message.
#[derive(Debug, Clone, Default)]
pub struct Form {
    values: HashMap<String, String>,
    pub errors: FormErrors,
}

impl Form {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
        }
    }

    /// Submitted value of `field`, or `""`.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn required(&mut self, fields: &[&str]) {
        for field in fields {
            if self.get(field).trim().is_empty() {
                self.errors.add(field, "This field cannot be blank");
            }
        }
    }

    pub fn max_length(&mut self, field: &str, max: usize) {
        let value = self.get(field);
        if !value.is_empty() && value.chars().count() > max {
            self.errors.add(
                field,
                &format!("This field is too long (maximum is {max} characters)"),
            );
        }
    }

    pub fn min_length(&mut self, field: &str, min: usize) {
        let value = self.get(field);
        if !value.is_empty() && value.chars().count() < min {
            self.errors.add(
                field,
                &format!("This field is too short (minimum is {min} characters)"),
            );
        }
    }

    pub fn matches_email(&mut self, field: &str) {
        let value = self.get(field);
        if !value.is_empty() && !EMAIL_RX.is_match(value) {
            self.errors.add(field, "This field is invalid");
        }
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }
}
