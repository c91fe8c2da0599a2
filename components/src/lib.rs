pub mod add_user;
pub mod constant;
pub mod edit_user;
pub mod lang_switch;
pub mod notification;
pub mod theme_switch;
pub mod top_bar;
pub mod user_table;
