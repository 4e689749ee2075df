//! Structured results of the remote calls, plus the response cleanup that
//! makes them parseable.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use finsight_core::{default_categories, HealthStatus, TxKind};

/// What the model extracted from a free-text entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedTransaction {
    pub item: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    /// Set when the model rejected the input as non-financial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedTransaction {
    pub fn is_valid(&self) -> bool {
        self.error.is_none() && !self.item.is_empty()
    }

    /// Returned whenever the remote call or its JSON cannot be used.
    pub fn fallback() -> Self {
        Self {
            item: String::new(),
            amount: 0.0,
            kind: TxKind::Expense,
            category: "Other".to_string(),
            error: Some("AI parsing failed".to_string()),
        }
    }

    /// Category clamped to the seed set, canonically cased. The prompt
    /// constrains the model to the seed names, but anything it invents
    /// anyway lands in the "Other" bucket instead of failing downstream.
    pub fn normalized_category(&self) -> String {
        default_categories()
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(&self.category))
            .map(|c| c.name)
            .unwrap_or_else(|| "Other".to_string())
    }
}

/// The daily motivational insight bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhisperInsight {
    pub persona_name: String,
    pub persona_emoji: String,
    pub whisper_message: String,
    pub health_status: HealthStatus,
    pub leak_insight: String,
}

impl WhisperInsight {
    /// Returned whenever the remote call or its JSON cannot be used.
    pub fn fallback() -> Self {
        Self {
            persona_name: "Newcomer".to_string(),
            persona_emoji: "🌱".to_string(),
            whisper_message: "Welcome! Start logging and I'll keep an eye on things.".to_string(),
            health_status: HealthStatus::Good,
            leak_insight: "Log a few expenses so we can find where the money leaks.".to_string(),
        }
    }
}

/// Drop markdown code fences the model sometimes wraps its JSON in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a model reply into a typed result, tolerating fenced output.
pub fn parse_model_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    let clean = strip_code_fences(text);
    serde_json::from_str(&clean).with_context(|| format!("model returned non-JSON: {clean}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fenced_json() {
        let raw = "```json\n{\"item\": \"coffee\"}\n```";
        assert_eq!(strip_code_fences(raw), "{\"item\": \"coffee\"}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_valid_transaction() {
        let raw = r#"{"item": "Coffee", "amount": 60, "type": "expense", "category": "Food"}"#;
        let parsed: ParsedTransaction = parse_model_json(raw).unwrap();
        assert!(parsed.is_valid());
        assert_eq!(parsed.kind, TxKind::Expense);
        assert_eq!(parsed.amount, 60.0);
    }

    #[test]
    fn test_fenced_reply_still_parses() {
        let raw = "```json\n{\"item\": \"Salary\", \"amount\": 30000, \"type\": \"income\", \"category\": \"Income\"}\n```";
        let parsed: ParsedTransaction = parse_model_json(raw).unwrap();
        assert_eq!(parsed.kind, TxKind::Income);
    }

    #[test]
    fn test_rejection_is_not_valid() {
        let raw = r#"{"item": "", "amount": 0, "type": "expense", "category": "Other", "error": "Invalid input"}"#;
        let parsed: ParsedTransaction = parse_model_json(raw).unwrap();
        assert!(!parsed.is_valid());
    }

    #[test]
    fn test_invented_category_clamps_to_other() {
        let raw = r#"{"item": "Weekly shop", "amount": 800, "type": "expense", "category": "Groceries"}"#;
        let parsed: ParsedTransaction = parse_model_json(raw).unwrap();
        assert!(parsed.is_valid());
        assert_eq!(parsed.normalized_category(), "Other");
    }

    #[test]
    fn test_seed_category_survives_case_insensitively() {
        let raw = r#"{"item": "Coffee", "amount": 60, "type": "expense", "category": "food"}"#;
        let parsed: ParsedTransaction = parse_model_json(raw).unwrap();
        assert_eq!(parsed.normalized_category(), "Food");
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_model_json::<ParsedTransaction>("sorry, I can't do that").is_err());
    }

    #[test]
    fn test_whisper_roundtrip_and_fallback() {
        let raw = r#"{
            "persona_name": "Boba Baron",
            "persona_emoji": "🧋",
            "whisper_message": "Third bubble tea this week. Just saying.",
            "health_status": "warning",
            "leak_insight": "This month's bubble tea equals one concert ticket."
        }"#;
        let insight: WhisperInsight = parse_model_json(raw).unwrap();
        assert_eq!(insight.health_status, HealthStatus::Warning);

        let fallback = WhisperInsight::fallback();
        assert_eq!(fallback.health_status, HealthStatus::Good);
        assert_eq!(fallback.persona_emoji, "🌱");
    }
}
