//! Session Credential
//!
//! Stores the login token in browser local storage and encodes the
//! `Authorization` header values sent with every request.

#[cfg(test)]
use std::cell::RefCell;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ApiError, ApiResult};
use crate::models::ApiMessage;
use crate::route::Page;

/// Persistence seam for the credential token
pub trait CredentialStore {
    fn load(&self) -> ApiResult<Option<String>>;
    fn save(&self, token: &str) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// `window.localStorage` under a single key
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> ApiResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| ApiError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ApiError::Storage("localStorage disabled".into()))
    }
}

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> ApiResult<Option<String>> {
        let value = self
            .storage()?
            .get_item(self.key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?;
        Ok(value.filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        self.storage()?
            .set_item(self.key, token)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> ApiResult<()> {
        self.storage()?
            .remove_item(self.key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store for unit tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

#[cfg(test)]
impl CredentialStore for MemoryStore {
    fn load(&self) -> ApiResult<Option<String>> {
        Ok(self.token.borrow().clone().filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// `Basic base64(username:password)` for login and register
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

/// Header value for an authenticated call. The stored token is replayed
/// base64-encoded; an absent token is sent as an empty value.
pub fn token_auth(token: Option<&str>) -> String {
    match token {
        Some(t) => format!("Basic {}", STANDARD.encode(t)),
        None => String::new(),
    }
}

/// Header value for the token currently held by `store`
pub fn authorization(store: &dyn CredentialStore) -> String {
    match store.load() {
        Ok(token) => token_auth(token.as_deref()),
        Err(e) => {
            log::warn!("[SESSION] Could not read credential: {}", e);
            token_auth(None)
        }
    }
}

/// True when a credential is stored
pub fn is_signed_in(store: &dyn CredentialStore) -> bool {
    matches!(store.load(), Ok(Some(_)))
}

/// Store the token from a login reply; the next page is Main.
/// A failed login leaves the store untouched.
pub fn complete_login(store: &dyn CredentialStore, reply: ApiResult<String>) -> ApiResult<Page> {
    let token = reply?;
    store.save(&token)?;
    Ok(Page::Main)
}

/// Forget the token once the server confirmed logout; the next page is Home.
/// A refused logout keeps the token.
pub fn complete_logout(store: &dyn CredentialStore, reply: ApiResult<ApiMessage>) -> ApiResult<Page> {
    reply?;
    store.clear()?;
    Ok(Page::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_encodes_pair() {
        // "alice:secret"
        assert_eq!(basic_auth("alice", "secret"), "Basic YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn test_absent_token_is_empty_header() {
        assert_eq!(token_auth(None), "");
        let store = MemoryStore::default();
        assert_eq!(authorization(&store), "");
        assert!(!is_signed_in(&store));
    }

    #[test]
    fn test_stored_token_is_replayed() {
        let store = MemoryStore::default();
        store.save("abc.def.ghi").unwrap();
        assert!(is_signed_in(&store));
        assert_eq!(authorization(&store), format!("Basic {}", STANDARD.encode("abc.def.ghi")));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(authorization(&store), "");
    }

    #[test]
    fn test_login_stores_token_and_opens_main() {
        let store = MemoryStore::default();
        let next = complete_login(&store, Ok("jwt-token".into()));
        assert_eq!(next, Ok(Page::Main));
        assert_eq!(store.load().unwrap(), Some("jwt-token".to_string()));
    }

    #[test]
    fn test_failed_login_stores_nothing() {
        let store = MemoryStore::default();
        let reply = Err(ApiError::from_status(500, r#"{"msg":"failed user login"}"#.into()));
        assert!(complete_login(&store, reply).is_err());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_logout_clears_only_on_success() {
        let store = MemoryStore::default();
        store.save("jwt-token").unwrap();

        let refused = Err(ApiError::from_status(500, r#"{"msg":"failed basic auth"}"#.into()));
        assert!(complete_logout(&store, refused).is_err());
        assert!(is_signed_in(&store));

        assert_eq!(complete_logout(&store, Ok(ApiMessage::default())), Ok(Page::Home));
        assert!(!is_signed_in(&store));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryStore::default();
        store.save("").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
