use crate::{
    cli::{Cli, Field},
    console::Console,
    input::name_stream,
    sanitize::sanitize_name,
    validator::{selectors, FormNameValidator, PageNameValidator, PageTitleValidator, Registry},
};
use anyhow::Result;
use std::{cell::RefCell, rc::Rc};

/// Totals for a single run, used to decide the process exit status.
#[derive(Debug, Default)]
pub struct Summary {
    pub checked: usize,
    pub violations: usize,
}

/// Streams names from the configured sources and applies the selected
/// field's validators, or rewrites each name when sanitize mode is on.
pub fn run_checks(console: &mut Console, args: &Cli) -> Result<Summary> {
    let Cli {
        field,
        sanitize,
        parent_path,
        files,
        ..
    } = args;

    let names = name_stream(files)?;
    let mut summary = Summary::default();

    if *sanitize {
        for name in names {
            summary.checked += 1;
            console.write_line(&sanitize_name(&name))?;
        }
        return Ok(summary);
    }

    let selector = match field {
        Field::Pagename => selectors::PAGE_NAME,
        Field::Formname => selectors::FORM_FIELD_NAME,
        Field::Pagetitle => selectors::PAGE_TITLE,
    };

    // The title validator reports through its callback instead of returning
    // a message; collect what it derives so it can be printed per line.
    let derived_name = Rc::new(RefCell::new(None::<String>));
    let sink = Rc::clone(&derived_name);

    let mut registry = Registry::new();
    registry.register(Box::new(FormNameValidator::new()));
    registry.register(Box::new(PageNameValidator::new(parent_path.clone())));
    registry.register(Box::new(PageTitleValidator::new(Box::new(move |name| {
        *sink.borrow_mut() = Some(name);
    }))));

    for name in names {
        summary.checked += 1;

        if let Some(message) = registry.run(selector, &name) {
            summary.violations += 1;
            console.write_violation(&name, &message)?;
        } else if let Some(page_name) = derived_name.borrow_mut().take() {
            console.write_line(&page_name)?;
        }
    }
    log::debug!(
        "checked {} name(s), found {} violation(s)",
        summary.checked,
        summary.violations
    );
    Ok(summary)
}
