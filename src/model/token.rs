//! AI token usage log records.
//!
//! Token logging is the one mutation that intentionally does not emit
//! an activity entry: usage samples arrive continuously and would
//! drown the feed.

use serde::{Deserialize, Serialize};

/// A single token-spend sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLog {
    /// Store-assigned, `token-…`.
    pub id: String,

    /// RFC 3339 instant the sample was logged.
    pub timestamp: String,

    /// Dollar cost of the sample.
    pub cost: f64,

    /// Arbitrary caller metadata (model, session, tab, …).
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Caller input for a token-usage sample.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenLogDraft {
    pub cost: f64,

    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_flattens_on_the_wire() {
        let log = TokenLog {
            id: "token-abc".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            cost: 0.42,
            metadata: serde_json::from_value(serde_json::json!({"model": "opus"})).unwrap(),
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["model"], "opus");
        assert_eq!(json["cost"], 0.42);
    }

    #[test]
    fn test_draft_accepts_extra_fields() {
        let draft: TokenLogDraft =
            serde_json::from_value(serde_json::json!({"cost": 1.5, "session": "morning"}))
                .unwrap();
        assert_eq!(draft.cost, 1.5);
        assert_eq!(draft.metadata["session"], "morning");
    }
}
