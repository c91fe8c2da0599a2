// user list page
pub const USERS: &str = r#"
title = Users
search = Search by name or email
sort_by = Sort by
name = Name
email = Email
company = Company
asc = Asc
desc = Desc
add = Add User
actions = Actions
loading = Loading...
no_result = No Result
added = User added locally
updated = User updated locally
"#;

// user detail page
pub const USER_DETAIL: &str = r#"
email = Email
phone = Phone
website = Website
address = Address
company = Company
back = Back to list
not_found = User not found. It might be loading or deleted.
"#;

// add/edit user modal
pub const USER_FORM: &str = r#"
add_title = Add New User
edit_title = Edit User
name = Name
email = Email
company = Company
name_placeholder = Jane Doe
email_placeholder = jane@example.com
company_placeholder = Acme Inc
name_required = Name is required
email_required = Email is required
email_invalid = Invalid email
submit = Add
update = Update
cancel = Cancel
"#;
