use super::{identity_localizer, selectors, Localizer, Validator};
use regex::Regex;

/// Character set permitted in form field names.
pub const FORM_NAME_CHARSET: &str = r"^[a-zA-Z0-9_./:-]+$";

/// Rejects empty form names and names with characters outside
/// [FORM_NAME_CHARSET].
pub struct FormNameValidator {
    pattern: Regex,
    localize: Localizer,
}

impl FormNameValidator {
    pub fn new() -> Self {
        Self::with_localizer(identity_localizer())
    }

    pub fn with_localizer(localize: Localizer) -> Self {
        Self {
            pattern: Regex::new(FORM_NAME_CHARSET).unwrap(),
            localize,
        }
    }
}

impl Default for FormNameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for FormNameValidator {
    fn selector(&self) -> &str {
        selectors::FORM_FIELD_NAME
    }

    fn validate(&mut self, value: &str) -> Option<String> {
        if !value.is_empty() && self.pattern.is_match(value) {
            return None;
        }
        Some((self.localize)(
            "This field should only contain numbers, letters, dashes and underscores.",
        ))
    }
}
