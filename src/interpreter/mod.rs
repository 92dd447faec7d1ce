//! Execution interpreter
//!
//! Re-parses a canonical query string and evaluates it against the table
//! store. The parse is deliberately independent of the intent that produced
//! the string: the query text is the wire contract, as it would be across a
//! real client/server split.

mod errors;
mod interpreter;

pub use errors::{ExecuteError, ExecuteResult};
pub use interpreter::Interpreter;
