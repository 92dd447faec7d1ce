//! Intent classifier
//!
//! Maps a free-text utterance to a structured [`Intent`] through an ordered
//! set of lexical rules. Classification is total over any input text and
//! never fails; unsupported utterances surface as `valid = false` rather
//! than an error.
//!
//! Rule precedence is part of the contract:
//! - operations are tested count, then average, then sum; first match wins
//! - tables are tested customers, then products; sales is the fallback
//!
//! An utterance containing both a count cue and an average cue therefore
//! classifies as COUNT.

mod intent;
mod rules;
mod validity;

pub use intent::{Intent, Operation};

use crate::store::TableName;

/// Classifies an utterance into a structured intent.
pub fn classify(utterance: &str) -> Intent {
    let text = utterance.to_lowercase().trim().to_string();

    let operation = rules::OPERATION_RULES
        .iter()
        .find(|(cues, _)| rules::contains_any(&text, cues))
        .map(|&(_, op)| op)
        .unwrap_or(Operation::Select);

    let table = rules::TABLE_RULES
        .iter()
        .find(|(cues, _)| rules::contains_any(&text, cues))
        .map(|&(_, table)| table)
        .unwrap_or(TableName::Sales);

    Intent {
        operation,
        table,
        valid: validity::is_valid(&text),
    }
}
