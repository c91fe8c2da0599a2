use yew::AttrValue;
use yewdux::Store;

/// transient toast, broadcast through the global store and rendered by the
/// notification host component
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct Notification {
    pub id: i64,
    pub content: AttrValue,
    pub delay: u32,
    pub type_: NotificationType,
}

#[derive(Default, Clone, Debug, PartialEq)]
pub enum NotificationType {
    #[default]
    Info,
    Success,
    Error,
}

impl Notification {
    pub fn success(content: impl ToString) -> Self {
        Self::build(content, NotificationType::Success, 3000)
    }

    pub fn error(content: impl ToString) -> Self {
        Self::build(content, NotificationType::Error, 5000)
    }

    fn build(content: impl ToString, type_: NotificationType, delay: u32) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            content: content.to_string().into(),
            delay,
            type_,
        }
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn error_toasts_linger_longer_than_success() {
        let success = Notification::success("saved");
        let error = Notification::error("load failed");
        assert_eq!(success.type_, NotificationType::Success);
        assert_eq!(error.type_, NotificationType::Error);
        assert_eq!(error.content.as_str(), "load failed");
        assert!(error.delay > success.delay);
    }
}
