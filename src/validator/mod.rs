/// Validator for form field names.
mod form;
pub use form::FormNameValidator;

/// Validator for page names.
mod page;
pub use page::PageNameValidator;

/// Validator for page titles.
mod title;
pub use title::PageTitleValidator;


/// Field hooks the admin UI registers validators under.
pub mod selectors {
    pub const FORM_FIELD_NAME: &str = "admin.formfieldname";
    pub const PAGE_NAME: &str = "admin.pagename";
    pub const PAGE_TITLE: &str = "admin.pagetitle";
}

/// Translates a finished message into the user's language. Stands in for the
/// host's message-lookup service; the default performs no translation.
pub type Localizer = Box<dyn Fn(&str) -> String>;

pub fn identity_localizer() -> Localizer {
    Box::new(str::to_string)
}

/// A single field check. `validate` returns `None` when the value is
/// acceptable and a user-facing message when it is not.
pub trait Validator {
    /// Identifies which field this validator applies to.
    fn selector(&self) -> &str;

    fn validate(&mut self, value: &str) -> Option<String>;
}

/// Caller-owned collection of validators keyed by selector.
#[derive(Default)]
pub struct Registry {
    validators: Vec<Box<dyn Validator>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Runs every validator registered for `selector` against `value`,
    /// returning the first message produced.
    pub fn run(&mut self, selector: &str, value: &str) -> Option<String> {
        self.validators
            .iter_mut()
            .filter(|validator| validator.selector() == selector)
            .find_map(|validator| validator.validate(value))
    }
}
