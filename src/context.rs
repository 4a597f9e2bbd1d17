//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::ApiMessage;
use crate::route::{self, Page};
use crate::session::{self, LocalStorageStore};
use crate::store::{store_clear_task_lists, AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub page: ReadSignal<Page>,
    /// Page currently shown - write
    set_page: WriteSignal<Page>,
    api: StoredValue<ApiClient, LocalStorage>,
    credentials: LocalStorageStore,
    store: AppStore,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        api: ApiClient,
        credentials: LocalStorageStore,
        store: AppStore,
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            api: StoredValue::new_local(api),
            credentials,
            store,
        }
    }

    /// Show `page` and push it onto the browser history
    pub fn navigate(&self, page: Page) {
        log::debug!("[NAV] -> {}", page.to_path());
        route::push_history(&page);
        self.set_page.set(page);
    }

    /// Re-sync after the back/forward buttons
    pub fn sync_from_location(&self) {
        self.set_page.set(route::current_page());
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Header value replaying the stored token
    pub fn authorization(&self) -> String {
        session::authorization(&self.credentials)
    }

    /// Store the token from a login reply and open the task lists
    pub fn finish_login(&self, reply: ApiResult<String>) -> ApiResult<()> {
        let next = session::complete_login(&self.credentials, reply)?;
        self.store.signed_in().set(true);
        self.navigate(next);
        Ok(())
    }

    /// Forget the token once the server confirmed logout, then go home
    pub fn finish_logout(&self, reply: ApiResult<ApiMessage>) -> ApiResult<()> {
        let next = session::complete_logout(&self.credentials, reply)?;
        self.store.signed_in().set(false);
        store_clear_task_lists(&self.store);
        self.navigate(next);
        Ok(())
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
