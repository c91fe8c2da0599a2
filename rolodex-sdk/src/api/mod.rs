use std::cell::Cell;
use std::rc::Rc;

use self::http::UserHttp;
pub use self::user::UserApi;

pub mod http;
pub mod user;

/// the remote user source, consumed once per session
pub const USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

pub fn users() -> Box<dyn UserApi> {
    Box::new(UserHttp::new(USERS_URL))
}

/// cooperative cancellation flag tied to a view's lifetime; a fetch that
/// outlives its view checks the flag and drops its result instead of
/// applying it to the store
#[derive(Debug, Default, Clone)]
pub struct AbortHandle(Rc<Cell<bool>>);

impl AbortHandle {
    pub fn abort(&self) {
        self.0.set(true);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::error::Error;
    use crate::model::user::User;
    use crate::state::{LoadStatus, UsersState};
    use crate::Result;

    struct FixedSource(Result<Vec<User>>);

    #[async_trait(?Send)]
    impl UserApi for FixedSource {
        async fn fetch_all(&self) -> Result<Vec<User>> {
            self.0.clone()
        }
    }

    // the same load sequence the list page runs against the global store
    async fn drive(state: &mut UsersState, source: &dyn UserApi) {
        if state.status != LoadStatus::Idle {
            return;
        }
        state.begin_load();
        match source.fetch_all().await {
            Ok(users) => state.complete_load(users),
            Err(err) => state.fail_load(err),
        }
    }

    fn leanne() -> User {
        User {
            id: 1,
            name: "Leanne".to_string().into(),
            email: "leanne@x.com".to_string().into(),
            ..Default::default()
        }
    }

    #[wasm_bindgen_test(unsupported = tokio::test)]
    async fn successful_load_populates_the_store() {
        let mut state = UsersState::default();
        let source = FixedSource(Ok(vec![leanne()]));
        drive(&mut state, &source).await;
        assert_eq!(state.status, LoadStatus::Succeeded);
        assert_eq!(state.items, vec![leanne()]);
    }

    #[wasm_bindgen_test(unsupported = tokio::test)]
    async fn failed_load_is_terminal() {
        let mut state = UsersState::default();
        let source = FixedSource(Err(Error::Network("connection refused".to_string())));
        drive(&mut state, &source).await;
        assert_eq!(state.status, LoadStatus::Failed);
        assert!(state.items.is_empty());
        assert!(state.error.as_deref().unwrap().contains("connection refused"));

        // a second trigger must not restart the fetch
        let recovered = FixedSource(Ok(vec![leanne()]));
        drive(&mut state, &recovered).await;
        assert_eq!(state.status, LoadStatus::Failed);
        assert!(state.items.is_empty());
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn abort_handle_flags_cancellation_for_every_clone() {
        let handle = AbortHandle::default();
        let seen_by_task = handle.clone();
        assert!(!seen_by_task.is_aborted());
        handle.abort();
        assert!(seen_by_task.is_aborted());
    }
}
