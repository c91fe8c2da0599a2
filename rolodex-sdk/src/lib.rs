use crate::error::Error;

pub mod api;
pub mod error;
pub mod model;
pub mod state;

pub type Result<T> = std::result::Result<T, Error>;
