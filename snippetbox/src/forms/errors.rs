use std::collections::HashMap;

/// Validation messages keyed by field name, in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(HashMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// First message recorded for `field`, or `""`.
    pub fn get(&self, field: &str) -> &str {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_message() {
        let mut errors = FormErrors::default();
        errors.add("title", "This field cannot be blank");
        errors.add("title", "This field is too long (maximum is 100 characters)");

        assert_eq!(errors.get("title"), "This field cannot be blank");
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_get_unknown_field_is_empty() {
        let errors = FormErrors::default();
        assert_eq!(errors.get("content"), "");
        assert!(errors.is_empty());
    }
}
