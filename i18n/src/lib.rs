use serde::{Deserialize, Serialize};

pub mod en_us;
pub mod zh_cn;

/// language type, persisted in local storage through `I18nState`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    #[default]
    EnUS,
    ZhCN,
}

impl LanguageType {
    pub fn toggled(&self) -> Self {
        match self {
            LanguageType::EnUS => LanguageType::ZhCN,
            LanguageType::ZhCN => LanguageType::EnUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn toggling_alternates_between_languages() {
        assert_eq!(LanguageType::EnUS.toggled(), LanguageType::ZhCN);
        assert_eq!(LanguageType::ZhCN.toggled(), LanguageType::EnUS);
    }
}
