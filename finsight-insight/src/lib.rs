//! finsight-insight: the remote-model boundary.
//!
//! Two calls leave the app: free-text transaction parsing and the daily
//! whisper insight. Both are fallible black boxes with fixed fallbacks, so
//! nothing downstream ever handles a parse failure. The core crate never
//! imports this one.

pub mod client;
pub mod types;

pub use client::{parse_transaction, whisper_insight, InsightConfig, Provider};
pub use types::{ParsedTransaction, WhisperInsight};
