use super::{identity_localizer, selectors, Localizer, Validator};
use crate::sanitize::{is_valid_full_page_path, is_valid_name, sanitize_name};

/// Checks page names for canonical sanitized form and enforces the EDS
/// path-length limit beneath the configured parent path.
pub struct PageNameValidator {
    parent_path: String,
    localize: Localizer,
}

impl PageNameValidator {
    pub fn new(parent_path: impl Into<String>) -> Self {
        Self::with_localizer(parent_path, identity_localizer())
    }

    pub fn with_localizer(parent_path: impl Into<String>, localize: Localizer) -> Self {
        Self {
            parent_path: parent_path.into(),
            localize,
        }
    }
}

impl Validator for PageNameValidator {
    fn selector(&self) -> &str {
        selectors::PAGE_NAME
    }

    fn validate(&mut self, value: &str) -> Option<String> {
        if !is_valid_name(value) {
            let message = format!(
                "This field must only contain lowercase letters, numbers, and simple dash. e.g. \"{}\"",
                sanitize_name(value),
            );
            return Some((self.localize)(&message));
        }
        if !is_valid_full_page_path(value, &self.parent_path) {
            return Some((self.localize)(
                "Error: The full page path of an EDS page should not exceed 900 characters.",
            ));
        }
        None
    }
}
