use thiserror::Error;

/// Fallback message when a transport failure carries no usable text.
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Terminal outcomes of a single submission attempt. The two input errors
/// are recovered locally without issuing a request; the other two surface a
/// failed request. None are retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please upload a PDF file.")]
    MissingFile,
    #[error("Please fill all 3 rules.")]
    IncompleteRules,
    #[error("{0}")]
    Transport(String),
    #[error("No results returned.")]
    MalformedResponse,
}

impl SubmitError {
    /// Builds a transport error, substituting the generic fallback when the
    /// underlying failure has no message.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SubmitError::Transport(GENERIC_FAILURE.to_string())
        } else {
            SubmitError::Transport(message)
        }
    }

    /// True for precondition failures shown as field-level messages; the
    /// request-level failures get banner treatment instead.
    pub fn is_input_error(&self) -> bool {
        matches!(self, SubmitError::MissingFile | SubmitError::IncompleteRules)
    }
}
