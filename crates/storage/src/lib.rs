#![forbid(unsafe_code)]

pub mod progress;
pub mod repository;
pub mod sqlite;

pub use progress::{PROGRESS_KEY, ProgressStore};
pub use repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};
