//! Coffer - JSON persistence, uniform container search/removal and
//! JSON document merging
//!
//! # Example
//!
//! ```
//! use std::collections::VecDeque;
//! use coffer::{merge_documents, Container};
//!
//! let queue: Container<String, i32> = Container::Queue(VecDeque::from(vec![1, 2, 3, 2]));
//! let rebuilt = queue.remove_value(&2).unwrap();
//! assert_eq!(rebuilt, Container::Queue(VecDeque::from(vec![1, 3])));
//!
//! let merged = merge_documents(&["{\"a\":1,}", "{\"b\":2}"]);
//! assert_eq!(merged, "{\"a\":1,\"b\":2}");
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod merge;
pub mod output;
pub mod store;
pub mod text;

pub use container::{
    contains, remove_array_value, remove_key_pair, remove_value, Container, ContainerKind, Stack,
};
pub use error::{CofferError, Result};
pub use merge::{merge_documents, merge_serialized, merge_structural};
pub use output::{format_output, Outcome, OutputFormat};
pub use store::{JsonStore, StoreConfig};
pub use text::{parse_index, to_ascii};
