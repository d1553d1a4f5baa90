//! Output formatting

use std::path::PathBuf;

use serde_json::Value;

use crate::container::{Container, ContainerKind};
use crate::output::human::format_human;
use crate::output::json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Result of one CLI command, ready for rendering
#[derive(Debug)]
pub enum Outcome {
    /// Text-merged document, unvalidated
    Merged(String),
    /// Structurally merged document
    MergedValue(Value),
    /// Raw document text as stored
    Document(String),
    Containment {
        kind: ContainerKind,
        found: bool,
    },
    Container(Container<String, Value>),
    Saved {
        path: PathBuf,
        bytes: u64,
    },
    Deleted {
        path: PathBuf,
    },
}

pub fn format_output(outcome: &Outcome, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(outcome),
        OutputFormat::Json => format_json(outcome),
    }
}
