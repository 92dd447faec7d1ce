//! Intent types

use crate::store::TableName;

/// Canonical query operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Count,
    Avg,
    Sum,
    Select,
}

impl Operation {
    /// All operations, in classifier precedence order (SELECT is the
    /// fallback and sorts last).
    pub const ALL: [Operation; 4] = [
        Operation::Count,
        Operation::Avg,
        Operation::Sum,
        Operation::Select,
    ];
}

/// Structured classification of an utterance.
///
/// Created fresh per request, never mutated. `table` is always one of the
/// recognized names; the classifier defaults to sales when no cue matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub operation: Operation,
    pub table: TableName,
    pub valid: bool,
}
