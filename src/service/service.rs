//! Pipeline orchestration

use std::time::Duration;

use crate::classifier;
use crate::interpreter::Interpreter;
use crate::renderer;
use crate::store::TableStore;

use super::errors::{ServiceError, ServiceResult};
use super::response::{Explanation, ExplainStep, ProcessOutcome, Verdict};

const VALID_FEEDBACK: &str = "Query is valid";
const INVALID_FEEDBACK: &str = "Query contains unsupported operations";

/// Fixed step descriptions reported by `explain`.
const EXPLAIN_STEPS: [&str; 4] = [
    "Natural language parsing",
    "Entity recognition",
    "SQL translation",
    "Query optimization",
];

/// Query service over an injected table store.
pub struct QueryService {
    store: TableStore,
    simulated_latency: Duration,
}

impl QueryService {
    /// Creates a service over the given store.
    pub fn new(store: TableStore) -> Self {
        Self {
            store,
            simulated_latency: Duration::ZERO,
        }
    }

    /// Applies an artificial per-request store delay. Off by default.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    fn interpreter(&self) -> Interpreter<'_> {
        Interpreter::new(&self.store).with_simulated_latency(self.simulated_latency)
    }

    /// Full pipeline: classify, render, execute.
    ///
    /// Fails with a validation error when the utterance does not pass the
    /// classifier's validity check (empty input included).
    pub fn process(&self, utterance: &str) -> ServiceResult<ProcessOutcome> {
        let intent = classifier::classify(utterance);
        if !intent.valid {
            return Err(ServiceError::Validation(INVALID_FEEDBACK.to_string()));
        }

        let sql = renderer::render(&intent);
        let result = self.interpreter().execute(&sql)?;

        Ok(ProcessOutcome {
            natural_query: utterance.to_string(),
            sql_query: sql,
            result,
        })
    }

    /// Classify and render only; never executes and never fails.
    pub fn explain(&self, utterance: &str) -> Explanation {
        let intent = classifier::classify(utterance);
        let sql = renderer::render(&intent);

        Explanation {
            steps: EXPLAIN_STEPS
                .iter()
                .enumerate()
                .map(|(i, description)| ExplainStep {
                    step: i as u32 + 1,
                    description: description.to_string(),
                })
                .collect(),
            original_query: utterance.to_string(),
            translated_sql: sql,
        }
    }

    /// Validity verdict with a fixed message; never fails.
    pub fn validate(&self, utterance: &str) -> Verdict {
        let valid = classifier::classify(utterance).valid;
        Verdict {
            is_valid: valid,
            feedback: if valid { VALID_FEEDBACK } else { INVALID_FEEDBACK }.to_string(),
        }
    }
}
