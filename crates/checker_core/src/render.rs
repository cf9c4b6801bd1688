//! Rendering contract consumed by the display surface. The controller owns
//! state; this module only maps verdicts into rows a table can draw.

use shared::{
    domain::{RuleStatus, NO_EVIDENCE},
    protocol::RuleVerdict,
};

/// Shown as the single table row when there are no results yet. The table
/// body is never rendered empty.
pub const EMPTY_RESULTS_PLACEHOLDER: &str = "— no results yet —";

/// Binary visual tag for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Positive,
    Negative,
}

impl StatusTag {
    pub fn label(self) -> &'static str {
        match self {
            StatusTag::Positive => "Pass",
            StatusTag::Negative => "Fail",
        }
    }
}

impl From<RuleStatus> for StatusTag {
    fn from(status: RuleStatus) -> Self {
        match status {
            RuleStatus::Pass => StatusTag::Positive,
            RuleStatus::Fail => StatusTag::Negative,
        }
    }
}

/// A located citation renders differently from the no-evidence sentinel,
/// which is a neutral state rather than an alarming one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceDisplay {
    Cited(String),
    NotFound,
}

impl EvidenceDisplay {
    pub fn text(&self) -> &str {
        match self {
            EvidenceDisplay::Cited(citation) => citation,
            EvidenceDisplay::NotFound => NO_EVIDENCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub rule: String,
    pub tag: StatusTag,
    pub evidence: EvidenceDisplay,
    pub reasoning: String,
    /// Integer percentage, e.g. "92%".
    pub confidence_label: String,
}

impl From<&RuleVerdict> for ResultRow {
    fn from(verdict: &RuleVerdict) -> Self {
        let evidence = match verdict.cited_evidence() {
            Some(citation) => EvidenceDisplay::Cited(citation.to_string()),
            None => EvidenceDisplay::NotFound,
        };
        Self {
            rule: verdict.rule.clone(),
            tag: verdict.status.into(),
            evidence,
            reasoning: verdict.reasoning.clone(),
            confidence_label: format!("{}%", verdict.confidence),
        }
    }
}

pub fn result_rows(verdicts: &[RuleVerdict]) -> Vec<ResultRow> {
    verdicts.iter().map(ResultRow::from).collect()
}
