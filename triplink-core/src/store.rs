//! Key-value capability for persisted client state.
//!
//! The pages share a string-keyed store (browser local storage in the web
//! crate) plus a session scope for the signed user record. Both are reached
//! through [`KvStore`] so the business logic never touches a platform API.
//! Reads validate independently per key and degrade to `None`; writes are
//! idempotent last-write-wins overwrites.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;

/// Persisted key names shared across pages.
pub mod keys {
    /// Resolved trip distance in kilometers.
    pub const DISTANCE: &str = "cabDistance";
    /// Most recently fetched per-category rate table.
    pub const TRIP_INFO: &str = "currentTripInfo";
    /// Day count for the current trip.
    pub const TRIP_DAYS: &str = "tripDays";
    /// Cab list returned by the trip-info endpoint.
    pub const AVAILABLE_CABS: &str = "availableCabs";
    /// Booking blob handed from the search page to the invoice page.
    pub const BOOKING_DATA: &str = "bookingData";
    /// Combined signed user-session record.
    pub const USER: &str = "user";
    /// Individual user fields kept for components that only need one value.
    pub const USER_ID: &str = "userId";
    pub const MOBILE_NO: &str = "mobileNo";
    pub const USER_ROLE: &str = "userRole";
    /// One-shot banner hand-off from the registration page.
    pub const REGISTRATION_SUCCESS: &str = "registrationSuccess";
    pub const REGISTRATION_MESSAGE: &str = "registrationMessage";
    /// Contact details left behind by registration for the first login.
    pub const REG_USERNAME: &str = "reg_username";
    pub const REG_EMAIL: &str = "reg_email";
}

/// Trait for abstracting persisted client state.
/// Platform-specific implementations should provide this.
pub trait KvStore {
    type Error: std::error::Error;

    /// Read the raw string stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key` and its value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;

    /// Read and decode a JSON value. Missing keys, read failures and stale
    /// or malformed blobs all degrade to `None`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.get_raw(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
            Ok(None) => None,
            Err(_) => None,
        }
    }

    /// Encode and write a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written. A value that
    /// fails to serialize is skipped and logged rather than propagated.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), Self::Error> {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_raw(key, &raw),
            Err(err) => {
                log::warn!("skipping unserializable value for key {key}: {err}");
                Ok(())
            }
        }
    }
}

/// In-memory store used by tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, for test setup.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl KvStore for MemoryStore {
    type Error = Infallible;

    fn get_raw(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip_and_degradation() {
        let store = MemoryStore::new();
        store.set_json(keys::TRIP_DAYS, &3_u32).unwrap();
        assert_eq!(store.get_json::<u32>(keys::TRIP_DAYS), Some(3));

        store.set_raw(keys::TRIP_INFO, "not json").unwrap();
        assert_eq!(store.get_json::<u32>(keys::TRIP_INFO), None);
        assert_eq!(store.get_json::<u32>("absent"), None);
    }

    #[test]
    fn remove_clears_entry() {
        let store = MemoryStore::new().with(keys::USER_ID, "709");
        assert_eq!(store.get_raw(keys::USER_ID).unwrap().as_deref(), Some("709"));
        store.remove(keys::USER_ID).unwrap();
        assert_eq!(store.get_raw(keys::USER_ID).unwrap(), None);
    }
}
