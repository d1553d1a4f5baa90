//! Directory-rooted JSON persistence
//!
//! Every value lives in `<dir>/<name>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::capability::{deserialize, file_exists, read_file, serialize, write_file};
use crate::error::{CofferError, Result};
use crate::merge::merge_documents;

/// File extension used for every stored document
pub const JSON_EXTENSION: &str = "json";

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the documents
    pub dir: PathBuf,
    /// Write indented JSON
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            pretty: true,
        }
    }
}

impl StoreConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

/// Saves, loads, copies and removes JSON documents in one directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    config: StoreConfig,
}

impl JsonStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path of the document called `name`
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if self.config.dir.as_os_str().is_empty() {
            warn!("file path is null or empty");
            return Err(CofferError::InvalidPath("directory is empty".to_string()));
        }
        if name.is_empty() {
            warn!("file name is null or empty");
            return Err(CofferError::InvalidPath("file name is empty".to_string()));
        }

        Ok(self
            .config
            .dir
            .join(format!("{}.{}", name, JSON_EXTENSION)))
    }

    /// Serialize `value` and write it under `name`
    pub fn save<T: Serialize + ?Sized>(&self, value: &T, name: &str) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        let json = serialize(value, self.config.pretty)?;
        write_file(&path, &json)?;
        info!(path = %path.display(), bytes = json.len(), "saved document");
        Ok(path)
    }

    /// Load and deserialize the document called `name`
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let json = self.read_raw(name)?;
        deserialize(&json)
    }

    /// Raw text of the document called `name`
    pub fn read_raw(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        if !file_exists(&path) {
            warn!(path = %path.display(), "file does not exist");
            return Err(CofferError::FileNotFound(path));
        }
        read_file(&path)
    }

    /// Copy any JSON file into the store under `name`.
    ///
    /// The source is parsed and re-serialized with the store's formatting,
    /// so invalid JSON is rejected rather than copied.
    pub fn copy(&self, source: &Path, name: &str) -> Result<PathBuf> {
        if !file_exists(source) {
            warn!(path = %source.display(), "file does not exist");
            return Err(CofferError::FileNotFound(source.to_path_buf()));
        }
        if !self.config.dir.is_dir() {
            warn!(path = %self.config.dir.display(), "copy directory does not exist");
            return Err(CofferError::FileNotFound(self.config.dir.clone()));
        }

        let json = read_file(source)?;
        let value: Value = deserialize(&json)?;
        debug!(source = %source.display(), name, "copying document");
        self.save(&value, name)
    }

    /// Replace the content of `name` with an empty JSON string (`""`)
    pub fn clear(&self, name: &str) -> Result<PathBuf> {
        self.save("", name)
    }

    /// Remove the document called `name`
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        if !file_exists(&path) {
            warn!(path = %path.display(), "file does not exist");
            return Err(CofferError::FileNotFound(path));
        }
        fs::remove_file(&path)?;
        info!(path = %path.display(), "deleted document");
        Ok(())
    }

    /// Text-merge the named documents and write the result under `output`.
    ///
    /// The merged text is written as-is, without re-serialization.
    pub fn merge_into<S: AsRef<str>>(&self, names: &[S], output: &str) -> Result<PathBuf> {
        let fragments = names
            .iter()
            .map(|name| self.read_raw(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let merged = merge_documents(&fragments);

        let path = self.path_for(output)?;
        write_file(&path, &merged)?;
        info!(path = %path.display(), documents = fragments.len(), "saved merged document");
        Ok(path)
    }
}
