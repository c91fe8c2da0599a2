use serde::{Deserialize, Serialize};
use yew::AttrValue;

use crate::state::SortKey;

/// a directory entry, either fetched from the remote source or created
/// locally through the add form
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Clone)]
pub struct User {
    pub id: i64,
    pub name: AttrValue,
    pub email: AttrValue,
    #[serde(default)]
    pub phone: Option<AttrValue>,
    #[serde(default)]
    pub website: Option<AttrValue>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

/// display-only, never edited locally
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Clone)]
pub struct Address {
    pub street: AttrValue,
    pub suite: AttrValue,
    pub city: AttrValue,
    pub zipcode: AttrValue,
}

/// the remote source sends more company fields; local add/edit only
/// round-trips the name, the rest is dropped on deserialization
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Clone)]
pub struct Company {
    pub name: AttrValue,
}

impl User {
    /// case-insensitive substring match on name or email; `pattern` must
    /// already be lowercased
    pub fn matches(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(pattern) || self.email.to_lowercase().contains(pattern)
    }

    /// the field the list view sorts on; missing company sorts as empty
    pub fn sort_field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => self.name.as_str(),
            SortKey::Email => self.email.as_str(),
            SortKey::Company => self.company.as_ref().map(|c| c.name.as_str()).unwrap_or(""),
        }
    }
}

/// value object produced by the add/edit forms after validation
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

/// field-scoped validation outcome, rendered inline by the forms
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DraftErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
}

impl DraftErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl UserDraft {
    pub fn validate(&self) -> DraftErrors {
        let mut errors = DraftErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some(FieldError::Required);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some(FieldError::Required);
        } else if !utils::is_valid_email(email) {
            errors.email = Some(FieldError::InvalidEmail);
        }
        errors
    }

    /// build a full user for a local add; the id comes from the store
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name.trim().to_string().into(),
            email: self.email.trim().to_string().into(),
            company: self.company_name().map(|name| Company { name: name.into() }),
            ..Default::default()
        }
    }

    /// merge the draft over an existing user for a local edit, keeping the
    /// fields the form does not expose
    pub fn apply_to(&self, user: &User) -> User {
        User {
            id: user.id,
            name: self.name.trim().to_string().into(),
            email: self.email.trim().to_string().into(),
            company: self.company_name().map(|name| Company { name: name.into() }),
            phone: user.phone.clone(),
            website: user.website.clone(),
            address: user.address.clone(),
        }
    }

    fn company_name(&self) -> Option<String> {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.to_string(),
            email: user.email.to_string(),
            company: user.company.as_ref().map(|c| c.name.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn empty_name_is_rejected() {
        let draft = UserDraft {
            name: "  ".to_string(),
            email: "jane@x.com".to_string(),
            company: None,
        };
        let errors = draft.validate();
        assert_eq!(errors.name, Some(FieldError::Required));
        assert!(errors.email.is_none());
        assert!(!errors.is_clear());
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn email_must_be_present_and_well_formed() {
        let mut draft = UserDraft {
            name: "Jane".to_string(),
            email: String::new(),
            company: None,
        };
        assert_eq!(draft.validate().email, Some(FieldError::Required));

        draft.email = "not-an-email".to_string();
        assert_eq!(draft.validate().email, Some(FieldError::InvalidEmail));

        draft.email = "jane@x.com".to_string();
        assert!(draft.validate().is_clear());
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn into_user_trims_and_drops_blank_company() {
        let draft = UserDraft {
            name: " Jane ".to_string(),
            email: " jane@x.com ".to_string(),
            company: Some("   ".to_string()),
        };
        let user = draft.into_user(7);
        assert_eq!(user.id, 7);
        assert_eq!(user.name.as_str(), "Jane");
        assert_eq!(user.email.as_str(), "jane@x.com");
        assert!(user.company.is_none());
        assert!(user.address.is_none());
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn apply_to_keeps_display_only_fields() {
        let existing = User {
            id: 3,
            name: "Old".to_string().into(),
            email: "old@x.com".to_string().into(),
            phone: Some("123".to_string().into()),
            website: Some("old.org".to_string().into()),
            address: Some(Address {
                street: "Main St".to_string().into(),
                ..Default::default()
            }),
            company: None,
        };
        let draft = UserDraft {
            name: "New".to_string(),
            email: "new@x.com".to_string(),
            company: Some("Acme".to_string()),
        };
        let updated = draft.apply_to(&existing);
        assert_eq!(updated.id, 3);
        assert_eq!(updated.name.as_str(), "New");
        assert_eq!(updated.company.as_ref().unwrap().name.as_str(), "Acme");
        assert_eq!(updated.phone, existing.phone);
        assert_eq!(updated.website, existing.website);
        assert_eq!(updated.address, existing.address);
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn deserializes_remote_records_and_ignores_extra_fields() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name.as_str(), "Leanne Graham");
        assert_eq!(user.address.as_ref().unwrap().city.as_str(), "Gwenborough");
        assert_eq!(user.company.as_ref().unwrap().name.as_str(), "Romaguera-Crona");
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn minimal_record_fills_defaults() {
        let user: User =
            serde_json::from_str(r#"{"id": 2, "name": "Jane", "email": "jane@x.com"}"#).unwrap();
        assert!(user.phone.is_none());
        assert!(user.address.is_none());
        assert!(user.company.is_none());
    }
}
