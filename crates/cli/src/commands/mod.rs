//! CLI command implementations.

pub mod cart;
pub mod session;

use localcart_widget::storage::{JsonFileStore, StorageError};

const DEFAULT_DATA_FILE: &str = "localcart.json";

/// Open the file-backed store named by `LOCALCART_DATA_FILE`.
pub fn open_store() -> Result<JsonFileStore, StorageError> {
    let path =
        std::env::var("LOCALCART_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    JsonFileStore::open(path)
}
