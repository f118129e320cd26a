//! The injected key-value store interface.
//!
//! The session and cart modules never touch a concrete storage mechanism
//! directly. They go through [`KeyValueStore`], a string-keyed, string-valued
//! store with the same shape as browser-local storage, so the logic can be
//! tested without a real browser backend.
//!
//! Malformed stored JSON is treated as absent data (logged at warn), never
//! as a crash: a corrupt entry from an earlier build must not take the
//! storefront down.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors that can occur while accessing the backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying medium failed (file store only; the memory store
    /// never produces this).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string-keyed, string-valued persistent store.
///
/// Mirrors the contract of browser-local storage: `get` returns `None` for
/// absent keys, `set` unconditionally overwrites, `remove` is a no-op for
/// absent keys.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Storage keys used by the widget.
///
/// These literals are an external contract: the checkout page reads `cart`
/// and `cartTotal` back out of the same store.
pub mod keys {
    /// Key for the login flag (stored as the literal string "true").
    pub const IS_LOGGED_IN: &str = "isLoggedIn";

    /// Key for the JSON-serialized user profile record.
    pub const CURRENT_USER: &str = "currentUser";

    /// Key for the JSON-serialized array of cart line items.
    pub const CART: &str = "cart";

    /// Key for the display-formatted cart total written at checkout handoff.
    pub const CART_TOTAL: &str = "cartTotal";
}

/// Read and decode a JSON value stored under `key`.
///
/// Returns `Ok(None)` both for an absent key and for a present-but-malformed
/// value; the latter is logged at warn and treated as absent.
///
/// # Errors
///
/// Returns `StorageError` only if the store itself fails to read.
pub fn get_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "malformed stored value, treating as absent");
            Ok(None)
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns `StorageError` if encoding fails or the store fails to write.
pub fn set_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
