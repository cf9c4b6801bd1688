//! Events flowing from the backend worker back to the UI.

use shared::{error::SubmitError, protocol::VerifyResponse};

pub enum UiEvent {
    Info(String),
    VerificationFinished(Result<VerifyResponse, SubmitError>),
}
