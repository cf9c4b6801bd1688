use serde::{Deserialize, Serialize};

/// Fixed number of rule slots in a submission.
pub const RULE_COUNT: usize = 3;

/// Advertised upper bound for an uploaded document. Advisory only: the
/// verification service is the enforcing party.
pub const MAX_FILE_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// Evidence value the service returns when it could not substantiate a
/// verdict. A valid outcome, not an error.
pub const NO_EVIDENCE: &str = "No evidence found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Pass,
    Fail,
}

impl RuleStatus {
    pub fn label(self) -> &'static str {
        match self {
            RuleStatus::Pass => "Pass",
            RuleStatus::Fail => "Fail",
        }
    }
}
