//! JSON output formatting

use serde_json::{json, Value};

use crate::output::formatter::Outcome;

pub fn format_json(outcome: &Outcome) -> String {
    let data: Value = match outcome {
        Outcome::Merged(text) => json!({ "merged": text }),
        Outcome::MergedValue(value) => value.clone(),
        Outcome::Document(text) => {
            serde_json::from_str(text).unwrap_or_else(|_| json!({ "document": text }))
        }
        Outcome::Containment { kind, found } => json!({ "kind": kind, "found": found }),
        Outcome::Container(container) => serde_json::to_value(container).unwrap_or(json!(null)),
        Outcome::Saved { path, bytes } => json!({ "saved": path.display().to_string(), "bytes": bytes }),
        Outcome::Deleted { path } => json!({ "deleted": path.display().to_string() }),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Container, ContainerKind};

    #[test]
    fn test_format_containment() {
        let outcome = Outcome::Containment {
            kind: ContainerKind::Queue,
            found: true,
        };
        let parsed: Value = serde_json::from_str(&format_json(&outcome)).unwrap();
        assert_eq!(parsed, json!({ "kind": "queue", "found": true }));
    }

    #[test]
    fn test_format_container() {
        let outcome = Outcome::Container(Container::MutableSequence(vec![json!(1), json!("a")]));
        let parsed: Value = serde_json::from_str(&format_json(&outcome)).unwrap();
        assert_eq!(parsed, json!({ "kind": "mutable_sequence", "items": [1, "a"] }));
    }

    #[test]
    fn test_format_unparseable_document() {
        let outcome = Outcome::Merged("{\"a\":1\"b\":2}".to_string());
        let parsed: Value = serde_json::from_str(&format_json(&outcome)).unwrap();
        assert_eq!(parsed["merged"], json!("{\"a\":1\"b\":2}"));
    }
}
