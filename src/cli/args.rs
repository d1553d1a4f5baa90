//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::StoreConfig;

#[derive(Parser)]
#[command(name = "coffer")]
#[command(author, version, about = "Store, search and merge JSON documents", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Directory holding the JSON documents
    #[arg(long, global = true, env = "COFFER_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Write documents without indentation
    #[arg(long, global = true)]
    pub compact: bool,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Args {
    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::new(&self.dir);
        if self.compact {
            config.compact()
        } else {
            config
        }
    }
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Merge JSON object files into one document
    Merge {
        /// Files to merge, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Parse and merge members instead of splicing text
        #[arg(long)]
        structural: bool,

        /// Save the result in the store under this name
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Copy a JSON file into the store
    Copy {
        /// Source JSON file
        source: PathBuf,

        /// Name of the copy
        name: String,
    },

    /// Print a stored document
    Show {
        /// Document name (without .json)
        name: String,
    },

    /// Replace a stored document with an empty string
    Clear {
        /// Document name (without .json)
        name: String,
    },

    /// Delete a stored document
    Delete {
        /// Document name (without .json)
        name: String,
    },

    /// Check whether a container file holds a value
    Contains {
        /// JSON file with {"kind": ..., "items": ...}
        file: PathBuf,

        /// Value to look for, as JSON (bare words are strings)
        value: String,
    },

    /// Remove a value from a container file and print the result
    Remove {
        /// JSON file with {"kind": ..., "items": ...}
        file: PathBuf,

        /// Value to remove, as JSON (bare words are strings)
        value: String,

        /// Write the result back to the file
        #[arg(long)]
        in_place: bool,
    },

    /// Remove a key from an associative map file
    RemoveKey {
        /// JSON file with {"kind": "associative_map", "items": {...}}
        file: PathBuf,

        /// Key to remove
        key: String,

        /// Write the result back to the file
        #[arg(long)]
        in_place: bool,
    },
}
