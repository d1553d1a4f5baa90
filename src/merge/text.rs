//! Text-level merge of serialized JSON objects

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::store::serialize;

/// Merge serialized JSON object texts into one document.
///
/// The first fragment keeps everything but its closing brace, middle
/// fragments contribute their interior, and the last keeps everything but
/// its opening brace. Pieces are concatenated in input order with no
/// separator added, so the members are only comma-separated if the
/// fragments already carry the commas.
///
/// A single fragment is returned unchanged; no fragments yield an empty
/// string.
pub fn merge_documents<S: AsRef<str>>(fragments: &[S]) -> String {
    debug!(fragments = fragments.len(), "merging documents");

    match fragments {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, middle @ .., last] => {
            let mut merged = String::from(without_closing(first.as_ref()));
            for fragment in middle {
                merged.push_str(without_opening(without_closing(fragment.as_ref())));
            }
            merged.push_str(without_opening(last.as_ref()));
            merged
        }
    }
}

/// Serialize each value with indentation, then merge the texts.
pub fn merge_serialized<T: Serialize>(values: &[T]) -> Result<String> {
    let fragments = values
        .iter()
        .map(|value| serialize(value, true))
        .collect::<Result<Vec<_>>>()?;
    Ok(merge_documents(&fragments))
}

// Whitespace outside the braces is not part of the object and is dropped
// with the brace.
fn without_closing(fragment: &str) -> &str {
    let trimmed = fragment.trim_end();
    trimmed.strip_suffix('}').unwrap_or(trimmed)
}

fn without_opening(fragment: &str) -> &str {
    let trimmed = fragment.trim_start();
    trimmed.strip_prefix('{').unwrap_or(trimmed)
}
