use async_trait::async_trait;
use gloo_net::http::Request;

use crate::api::user::UserApi;
use crate::error::Error;
use crate::model::user::User;
use crate::Result;

use super::RespStatus;

pub struct UserHttp {
    endpoint: &'static str,
}

impl UserHttp {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl UserApi for UserHttp {
    async fn fetch_all(&self) -> Result<Vec<User>> {
        log::debug!("fetching users from {}", self.endpoint);
        let users = Request::get(self.endpoint)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await
            .map_err(|err| Error::Decode(err.to_string()))?;
        Ok(users)
    }
}
