//! nlquery - a rule-based natural-language query translation and execution
//! simulation engine
//!
//! Pipeline: utterance → classifier → intent → renderer → canonical query
//! string → interpreter → table store → rows.

pub mod api;
pub mod classifier;
pub mod cli;
pub mod interpreter;
pub mod observability;
pub mod renderer;
pub mod service;
pub mod store;
