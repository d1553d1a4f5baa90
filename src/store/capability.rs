//! Serialization and filesystem primitives

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CofferError, Result};

/// Serialize a value to JSON text, indented when `pretty` is set.
pub fn serialize<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(CofferError::Serialization)
}

pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(CofferError::Deserialization)
}

/// Read a whole file as UTF-8 text
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CofferError::FileNotFound(path.to_path_buf()),
        _ => CofferError::Io(e),
    })
}

/// Write text to a file, replacing any previous content
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn test_serialize_pretty_and_compact() {
        let value = json!({ "a": 1 });
        assert_eq!(serialize(&value, false).unwrap(), "{\"a\":1}");
        assert_eq!(serialize(&value, true).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_deserialize_error() {
        let err = deserialize::<Value>("{not json").unwrap_err();
        assert!(matches!(err, CofferError::Deserialization(_)));
    }

    #[test]
    fn test_read_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        assert!(!file_exists(&path));

        write_file(&path, "[1,2]").unwrap();
        assert!(file_exists(&path));
        assert_eq!(read_file(&path).unwrap(), "[1,2]");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(matches!(read_file(&path), Err(CofferError::FileNotFound(p)) if p == path));
    }
}
