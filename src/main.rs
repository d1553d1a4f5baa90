//! Coffer CLI - store, search and merge JSON documents

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use coffer::cli::{Args, SubCommand};
use coffer::store::{read_file, serialize, write_file};
use coffer::{
    format_output, merge_documents, merge_structural, remove_array_value, Container, JsonStore,
    Outcome, OutputFormat,
};
use serde_json::Value;
use tracing::Level;

type JsonContainer = Container<String, Value>;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let store = JsonStore::new(args.store_config());
    let output_format = if args.json { OutputFormat::Json } else { OutputFormat::Human };

    let outcome = match args.command {
        SubCommand::Merge {
            files,
            structural,
            output,
        } => {
            let fragments = files
                .iter()
                .map(|file| {
                    read_file(file).with_context(|| format!("reading {}", file.display()))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            match (structural, output) {
                (true, Some(name)) => {
                    let merged = merge_structural(&fragments)?;
                    saved(&store, &merged, &name)?
                }
                (true, None) => Outcome::MergedValue(merge_structural(&fragments)?),
                (false, Some(name)) => {
                    let merged = merge_documents(&fragments);
                    let path = store.path_for(&name)?;
                    write_file(&path, &merged)?;
                    Outcome::Saved {
                        path,
                        bytes: merged.len() as u64,
                    }
                }
                (false, None) => Outcome::Merged(merge_documents(&fragments)),
            }
        }

        SubCommand::Copy { source, name } => {
            let path = store.copy(&source, &name)?;
            saved_at(path)?
        }

        SubCommand::Show { name } => Outcome::Document(store.read_raw(&name)?),

        SubCommand::Clear { name } => {
            let path = store.clear(&name)?;
            saved_at(path)?
        }

        SubCommand::Delete { name } => {
            let path = store.path_for(&name)?;
            store.delete(&name)?;
            Outcome::Deleted { path }
        }

        SubCommand::Contains { file, value } => {
            let container = load_container(&file)?;
            let found = container.contains(&parse_value(&value))?;
            Outcome::Containment {
                kind: container.kind(),
                found,
            }
        }

        SubCommand::Remove {
            file,
            value,
            in_place,
        } => {
            let container = load_container(&file)?;
            let value = parse_value(&value);
            let rebuilt = match &container {
                Container::FixedArray(array) => {
                    Container::FixedArray(remove_array_value(array, &value))
                }
                other => other.remove_value(&value)?,
            };
            if in_place {
                save_container(&file, &rebuilt, store.config().pretty)?;
            }
            Outcome::Container(rebuilt)
        }

        SubCommand::RemoveKey {
            file,
            key,
            in_place,
        } => {
            let mut container = load_container(&file)?;
            container
                .remove_key_pair(key.as_str())
                .with_context(|| format!("removing key '{}'", key))?;
            if in_place {
                save_container(&file, &container, store.config().pretty)?;
            }
            Outcome::Container(container)
        }
    };

    println!("{}", format_output(&outcome, &output_format));
    Ok(())
}

fn load_container(file: &Path) -> anyhow::Result<JsonContainer> {
    let text = read_file(file)?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a container document", file.display()))
}

fn save_container(file: &Path, container: &JsonContainer, pretty: bool) -> anyhow::Result<()> {
    write_file(file, &serialize(container, pretty)?)?;
    Ok(())
}

fn saved(store: &JsonStore, value: &Value, name: &str) -> anyhow::Result<Outcome> {
    let path = store.save(value, name)?;
    saved_at(path)
}

fn saved_at(path: PathBuf) -> anyhow::Result<Outcome> {
    let bytes = std::fs::metadata(&path)?.len();
    Ok(Outcome::Saved { path, bytes })
}

/// JSON text, or a plain string when the argument is not valid JSON
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
