//! Human-readable output formatting

use bytesize::ByteSize;
use serde_json::Value;

use crate::container::Container;
use crate::output::formatter::Outcome;

pub fn format_human(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Merged(text) | Outcome::Document(text) => text.clone(),
        Outcome::MergedValue(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Outcome::Containment { kind, found } => {
            format!("{}: {}", kind, if *found { "found" } else { "not found" })
        }
        Outcome::Container(container) => format_container(container),
        Outcome::Saved { path, bytes } => {
            format!("Saved {} to {}", ByteSize(*bytes), path.display())
        }
        Outcome::Deleted { path } => format!("Deleted {}", path.display()),
    }
}

/// Header plus one line per element, in the container's enumeration order
fn format_container(container: &Container<String, Value>) -> String {
    let header = format!("{} ({} items)", capitalize(&container.kind().to_string()), container.len());
    let mut output = format!("{}\n{}\n", header, "-".repeat(header.len()));

    match container {
        Container::AssociativeMap(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in entries {
                output.push_str(&format!("  {:<16} {}\n", truncate(key, 16), value));
            }
        }
        Container::Stack(stack) => push_items(&mut output, stack.iter()),
        Container::Queue(queue) => push_items(&mut output, queue.iter()),
        Container::MutableSequence(seq) => push_items(&mut output, seq.iter()),
        Container::FixedArray(array) => push_items(&mut output, array.iter()),
    }

    output
}

fn push_items<'a>(output: &mut String, items: impl Iterator<Item = &'a Value>) {
    for (i, item) in items.enumerate() {
        output.push_str(&format!("  {:>4}  {}\n", i, item));
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
