use async_trait::async_trait;

use crate::model::user::User;
use crate::Result;

/// read-only remote user source. add/update/delete never touch the network.
#[async_trait(?Send)]
pub trait UserApi {
    async fn fetch_all(&self) -> Result<Vec<User>>;
}
