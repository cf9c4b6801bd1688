//! Submission workflow controller: owns all client state for a single
//! document-check session, enforces input preconditions, and maps service
//! outcomes into renderable state.

use shared::{
    domain::{MAX_FILE_SIZE_BYTES, RULE_COUNT},
    error::SubmitError,
    protocol::{RuleVerdict, VerifyResponse},
};
use tracing::{info, warn};

pub mod config;
pub mod render;
pub mod service;

pub use service::{HttpVerificationService, VerificationService, VerifyRequest};

/// A user-picked document: raw bytes plus the name used for display and for
/// the multipart filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Advisory check for the advertised "Max 20MB — PDF only" constraint.
    /// The controller never rejects a file over this; enforcement is owned by
    /// the verification service.
    pub fn advisory_warning(&self) -> Option<String> {
        let is_pdf = self
            .name
            .rsplit('.')
            .next()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Some(format!(
                "'{}' does not look like a PDF; the service may reject it.",
                self.name
            ));
        }
        if self.bytes.len() as u64 > MAX_FILE_SIZE_BYTES {
            return Some(format!(
                "'{}' exceeds the advertised 20MB limit; the service may reject it.",
                self.name
            ));
        }
        None
    }
}

/// The current document and rule set. Complete iff a file is attached and
/// every rule is non-blank after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    file: Option<SelectedFile>,
    rules: [String; RULE_COUNT],
}

impl Submission {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.name.as_str())
    }

    pub fn rules(&self) -> &[String; RULE_COUNT] {
        &self.rules
    }

    pub fn rules_complete(&self) -> bool {
        self.rules.iter().all(|rule| !rule.trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.file.is_some() && self.rules_complete()
    }
}

/// Renderable view of the workflow. Exactly one variant applies at a time;
/// derived with precedence Submitting > Failed > Ready > Idle so a failed
/// attempt does not discard the previous result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState<'a> {
    Idle,
    Submitting,
    Ready(&'a [RuleVerdict]),
    Failed(&'a SubmitError),
}

/// The submission workflow controller. One instance per check session; no
/// state is shared across instances.
#[derive(Debug, Default)]
pub struct CheckerWorkflow {
    submission: Submission,
    results: Vec<RuleVerdict>,
    in_flight: bool,
    error: Option<SubmitError>,
}

impl CheckerWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn results(&self) -> &[RuleVerdict] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn state(&self) -> WorkflowState<'_> {
        if self.in_flight {
            WorkflowState::Submitting
        } else if let Some(err) = &self.error {
            WorkflowState::Failed(err)
        } else if !self.results.is_empty() {
            WorkflowState::Ready(&self.results)
        } else {
            WorkflowState::Idle
        }
    }

    /// Replaces the selected file (or clears it when the picker was
    /// dismissed empty). Rules and prior results are untouched.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        if let Some(file) = &file {
            if let Some(notice) = file.advisory_warning() {
                warn!(file_name = %file.name, "{notice}");
            }
        }
        self.submission.file = file;
    }

    /// Replaces the rule text at `index`. Pure state update; no validation
    /// happens at edit time.
    ///
    /// # Panics
    ///
    /// Panics if `index >= RULE_COUNT`. The rule list has a fixed size, so an
    /// out-of-range index is a programming error, not a user-facing failure.
    pub fn edit_rule(&mut self, index: usize, text: impl Into<String>) {
        self.submission.rules[index] = text.into();
    }

    /// Detaches the document and drops the result set with it: results are
    /// meaningless without the document that produced them.
    pub fn remove_file(&mut self) {
        self.submission.file = None;
        self.results.clear();
    }

    /// Restores the empty initial state: no file, three blank rules, no
    /// results, no error, Idle.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// First half of a submission: precondition checks and the in-flight
    /// token. Returns the request snapshot to hand to a
    /// [`VerificationService`], or `None` when no request may be issued
    /// (re-entrant call, or a precondition failed and the workflow is now
    /// `Failed`).
    pub fn begin_submit(&mut self) -> Option<VerifyRequest> {
        if self.in_flight {
            warn!("submit ignored: a verification request is already in flight");
            return None;
        }

        self.error = None;

        let Some(file) = &self.submission.file else {
            self.error = Some(SubmitError::MissingFile);
            return None;
        };
        if !self.submission.rules_complete() {
            self.error = Some(SubmitError::IncompleteRules);
            return None;
        }

        self.in_flight = true;
        info!(file_name = %file.name, "submission accepted; issuing verification request");
        Some(VerifyRequest {
            file_name: file.name.clone(),
            file_bytes: file.bytes.clone(),
            rules: self.submission.rules.clone(),
        })
    }

    /// Second half of a submission: releases the in-flight token on every
    /// path, then interprets the outcome. A response with `results` replaces
    /// the result set; one without it fails as malformed and leaves the
    /// previous result set in place.
    pub fn finish_submit(&mut self, outcome: Result<VerifyResponse, SubmitError>) {
        self.in_flight = false;
        match outcome {
            Ok(VerifyResponse {
                results: Some(results),
            }) => {
                info!(count = results.len(), "verification results received");
                self.results = results;
                self.error = None;
            }
            Ok(VerifyResponse { results: None }) => {
                warn!("verification response lacked a results field");
                self.error = Some(SubmitError::MalformedResponse);
            }
            Err(err) => {
                warn!("verification attempt failed: {err}");
                self.error = Some(err);
            }
        }
    }

    /// Runs a whole submission attempt against `service`. Preconditions are
    /// checked before any network effect; at most one attempt is in flight
    /// at a time.
    pub async fn submit(&mut self, service: &dyn VerificationService) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let outcome = service.verify(request).await;
        self.finish_submit(outcome);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
