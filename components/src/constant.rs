//! i18n message ids shared by the components

pub const ACTIONS: &str = "actions";
pub const ADD: &str = "add";
pub const ADD_TITLE: &str = "add_title";
pub const ASC: &str = "asc";
pub const CANCEL: &str = "cancel";
pub const COMPANY: &str = "company";
pub const COMPANY_PLACEHOLDER: &str = "company_placeholder";
pub const DESC: &str = "desc";
pub const EDIT_TITLE: &str = "edit_title";
pub const EMAIL: &str = "email";
pub const EMAIL_INVALID: &str = "email_invalid";
pub const EMAIL_PLACEHOLDER: &str = "email_placeholder";
pub const EMAIL_REQUIRED: &str = "email_required";
pub const NAME: &str = "name";
pub const NAME_PLACEHOLDER: &str = "name_placeholder";
pub const NAME_REQUIRED: &str = "name_required";
pub const NO_RESULT: &str = "no_result";
pub const SEARCH: &str = "search";
pub const SORT_BY: &str = "sort_by";
pub const SUBMIT: &str = "submit";
pub const UPDATE: &str = "update";
