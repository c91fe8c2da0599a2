pub mod notification;
pub mod page;
pub mod user;
