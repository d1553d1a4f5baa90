//! JSON persistence
//!
//! `capability` holds the serialization and file primitives; `JsonStore`
//! composes them into save/load/copy/clear/delete over one directory.

pub mod capability;
pub mod json_store;

pub use capability::{deserialize, file_exists, read_file, serialize, write_file};
pub use json_store::{JsonStore, StoreConfig, JSON_EXTENSION};
