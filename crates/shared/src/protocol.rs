use serde::{Deserialize, Serialize};

use crate::domain::{RuleStatus, NO_EVIDENCE};

/// One per-rule outcome from the verification service, aligned positionally
/// with the submitted rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleVerdict {
    /// Echo of the submitted rule text.
    pub rule: String,
    pub status: RuleStatus,
    /// A located excerpt/citation, or the [`NO_EVIDENCE`] sentinel.
    pub evidence: String,
    pub reasoning: String,
    /// Integer percentage in 0..=100.
    pub confidence: u8,
}

impl RuleVerdict {
    /// Returns the citation when the service actually located one.
    pub fn cited_evidence(&self) -> Option<&str> {
        if self.evidence.is_empty() || self.evidence == NO_EVIDENCE {
            None
        } else {
            Some(&self.evidence)
        }
    }
}

/// Response body of the verification endpoint. `results` is optional so a
/// structurally malformed payload deserializes to `None` instead of failing
/// an untyped field access downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RuleVerdict>>,
}
