//! Parse-then-merge alternative to the text splice

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{CofferError, Result};

/// Parse each fragment as a JSON object and fold the members into one
/// object, first fragment first. A member name seen again replaces the
/// earlier value.
pub fn merge_structural<S: AsRef<str>>(fragments: &[S]) -> Result<Value> {
    let mut merged = Map::new();

    for (index, fragment) in fragments.iter().enumerate() {
        let parsed: Value = serde_json::from_str(fragment.as_ref()).map_err(|e| {
            warn!(index, error = %e, "fragment is not valid JSON");
            CofferError::MalformedFragment {
                index,
                reason: e.to_string(),
            }
        })?;

        match parsed {
            Value::Object(members) => merged.extend(members),
            other => {
                warn!(index, "fragment is not a JSON object");
                return Err(CofferError::MalformedFragment {
                    index,
                    reason: format!("expected an object, found {}", type_name(&other)),
                });
            }
        }
    }

    Ok(Value::Object(merged))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
