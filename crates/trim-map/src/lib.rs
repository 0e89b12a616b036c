//! Schema resolution for fuel trim logs.
//!
//! Source logs come with arbitrary column headers. A two-column mapping
//! table (`original`, `new`) renames them onto the canonical fields; the
//! resolver builds that mapping, checks the four required fields are all
//! covered, and renames the log headers. Pure functions of their inputs.

mod resolver;

pub use resolver::{rename_headers, resolve_mapping, validate_required};
