//! JSON document merging
//!
//! Two entry points:
//! - [`merge_documents`] splices already-serialized object texts together
//!   without parsing them. Formatting is kept verbatim, duplicate member
//!   names are kept, and malformed input is not detected.
//! - [`merge_structural`] parses each fragment and folds the members into
//!   one object.

pub mod structural;
pub mod text;

pub use structural::merge_structural;
pub use text::{merge_documents, merge_serialized};
