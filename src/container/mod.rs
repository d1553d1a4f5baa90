//! Container module for uniform search and removal
//!
//! Five container shapes behind one closed enum:
//! - associative maps (searched by value, removed by key)
//! - LIFO stacks and FIFO queues (all-match removal, order preserved)
//! - mutable sequences (first-match removal)
//! - fixed arrays (all-match removal into a new array)

mod ops;
mod types;

pub use ops::{contains, remove_array_value, remove_key_pair, remove_value};
pub use types::{Container, ContainerKind, Stack};
