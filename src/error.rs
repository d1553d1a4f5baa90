//! Error types for Coffer

use std::path::PathBuf;

use thiserror::Error;

use crate::container::ContainerKind;

#[derive(Error, Debug)]
pub enum CofferError {
    #[error("Null value detected")]
    NullInput,

    #[error("{operation} is not supported for {kind} containers")]
    UnsupportedVariant {
        operation: &'static str,
        kind: ContainerKind,
    },

    #[error("Key not found")]
    KeyNotFound,

    #[error("Malformed fragment #{index}: {reason}")]
    MalformedFragment { index: usize, reason: String },

    #[error("Failed to serialize data to JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Failed to load data from JSON: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CofferError>;
