//! Browser-backed implementations of the core key-value capability.
//!
//! The persisted trip/booking cache lives in `LocalStorage`; the signed
//! user-session record lives in `SessionStorage`. Both scopes are reached
//! through [`triplink_core::store::KvStore`], so pages and the core logic
//! never touch `web_sys` storage directly.

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use triplink_core::store::KvStore;

/// Session-local persisted scope (trip distance, rate tables, booking blob).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KvStore for LocalStore {
    type Error = StorageError;

    fn get_raw(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match LocalStorage::get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        LocalStorage::set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// Scope for the signed client-state record (user session fields).
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl KvStore for SessionStore {
    type Error = StorageError;

    fn get_raw(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match SessionStorage::get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        SessionStorage::set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        SessionStorage::delete(key);
        Ok(())
    }
}
