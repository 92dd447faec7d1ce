//! Query renderer
//!
//! Turns a structured intent into its canonical query string. The string is
//! the wire contract between the renderer and the execution interpreter; the
//! interpreter re-parses it independently and never sees the intent object.

mod canonical;

pub use canonical::{canonical_query, decode, effective_table, render};
