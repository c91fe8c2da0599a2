use fluent::{FluentBundle, FluentResource};
use gloo::utils::document;
use once_cell::sync::Lazy;
use regex::Regex;
use unic_langid::langid;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9_\-\.]+)@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,})$")
        .expect("email pattern is valid")
});

/// build a fluent bundle from one of the static resources in the i18n crate
pub fn create_bundle(res: &str) -> FluentBundle<FluentResource> {
    let res = FluentResource::try_new(res.to_string()).expect("i18n resource parses");
    let mut bundle = FluentBundle::new(vec![langid!("en-US")]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(res)
        .expect("i18n resource has no duplicated ids");
    bundle
}

/// look a message up in the bundle, falling back to the id itself
pub fn format_message(bundle: &FluentBundle<FluentResource>, id: &str) -> String {
    let mut errors = vec![];
    match bundle.get_message(id).and_then(|msg| msg.value()) {
        Some(pattern) => bundle.format_pattern(pattern, None, &mut errors).to_string(),
        None => {
            log::warn!("missing i18n message: {}", id);
            id.to_string()
        }
    }
}

#[macro_export]
macro_rules! tr {
    ($bundle:expr, $key:expr) => {
        $crate::format_message(&$bundle, $key)
    };
}

/// apply the theme through an attribute on the document element so css
/// variables can switch on [data-theme]
pub fn set_theme(theme: &str) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute("data-theme", theme) {
            log::error!("failed to set theme attribute: {:?}", err);
        }
    }
}

/// syntax-only email check used by the add/edit user forms
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe-1@sub.example.co"));
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane doe@example.com"));
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn formats_known_and_unknown_messages() {
        let bundle = create_bundle("hello = Hello");
        assert_eq!(format_message(&bundle, "hello"), "Hello");
        assert_eq!(format_message(&bundle, "nope"), "nope");
    }
}
