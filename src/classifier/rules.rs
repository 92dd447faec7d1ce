//! Lexical rule tables
//!
//! Each table is an ordered list of (cues, outcome) pairs evaluated
//! top-to-bottom with first-match-wins semantics. The order is load-bearing;
//! do not reorder entries.

use std::sync::OnceLock;

use regex::Regex;

use crate::store::TableName;

use super::intent::Operation;

/// Substring cues for each aggregate operation, in precedence order.
/// SELECT has no cue; it is the fallback when nothing matches.
pub(super) const OPERATION_RULES: &[(&[&str], Operation)] = &[
    (&["count", "number of", "how many"], Operation::Count),
    (&["average", "avg", "mean"], Operation::Avg),
    (&["sum", "total"], Operation::Sum),
];

/// Substring cues for table resolution, in precedence order. Sales is the
/// fallback and carries no rule of its own.
pub(super) const TABLE_RULES: &[(&[&str], TableName)] = &[
    (&["customers", "clients", "users"], TableName::Customers),
    (&["products", "items", "goods"], TableName::Products),
];

/// Sales synonyms. Table resolution never needs these (sales is the
/// default), but the validity check counts them as a recognized pattern.
pub(super) const SALES_CUES: &[&str] = &["sales", "revenue", "transactions"];

/// Lead verbs that open a recognized request, anchored at the start of the
/// normalized utterance.
const LEAD_VERB_PATTERNS: &[&str] = &[
    r"^show\s+me\s+",
    r"^get\s+",
    r"^find\s+",
    r"^list\s+",
    r"^what\s+",
    r"^how\s+",
];

static LEAD_VERBS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Compiled lead-verb patterns, built once per process.
pub(super) fn lead_verbs() -> &'static [Regex] {
    LEAD_VERBS.get_or_init(|| {
        LEAD_VERB_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("lead-verb pattern is valid"))
            .collect()
    })
}

/// True if `text` contains any of the cues as a substring.
pub(super) fn contains_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}
