//! Utterance validity rules
//!
//! An utterance is valid iff all four checks hold:
//! 1. it matches a recognized pattern (lead verb or any cue)
//! 2. it references a table name as a literal substring
//! 3. its normalized length is at least 3
//! 4. it contains no disallowed operation keyword
//!
//! No partial verdict is surfaced beyond the boolean.

use crate::store::TableName;

use super::rules;

/// Operation keywords the engine refuses outright.
const DISALLOWED: &[&str] = &["join", "union", "delete", "update", "insert"];

const MIN_LENGTH: usize = 3;

/// `text` must already be lowercased and trimmed.
pub(super) fn is_valid(text: &str) -> bool {
    has_known_pattern(text)
        && references_known_table(text)
        && text.len() >= MIN_LENGTH
        && !rules::contains_any(text, DISALLOWED)
}

fn has_known_pattern(text: &str) -> bool {
    rules::lead_verbs().iter().any(|re| re.is_match(text))
        || rules::OPERATION_RULES
            .iter()
            .any(|(cues, _)| rules::contains_any(text, cues))
        || rules::TABLE_RULES
            .iter()
            .any(|(cues, _)| rules::contains_any(text, cues))
        || rules::contains_any(text, rules::SALES_CUES)
}

/// Literal table names only; cue synonyms such as "revenue" or "clients"
/// do not satisfy this check.
fn references_known_table(text: &str) -> bool {
    TableName::ALL.iter().any(|table| text.contains(table.as_str()))
}
