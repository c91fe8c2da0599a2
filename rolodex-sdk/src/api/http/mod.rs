use async_trait::async_trait;
use gloo_net::http::Response;

pub use user::UserHttp;

use crate::error::Error;
use crate::Result;

mod user;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if (200..=299).contains(&self.status()) {
            Ok(self)
        } else {
            let status = self.status();
            let message = self.text().await.unwrap_or_default();
            Err(Error::Server { status, message })
        }
    }
}
