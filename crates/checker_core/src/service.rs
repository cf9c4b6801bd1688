//! Seam to the remote verification service.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use shared::{
    domain::RULE_COUNT,
    error::SubmitError,
    protocol::VerifyResponse,
};

/// Snapshot of a complete submission, detached from controller state so the
/// request can be carried across threads or channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub rules: [String; RULE_COUNT],
}

impl VerifyRequest {
    /// The `rules` multipart field: a JSON array of exactly 3 strings.
    pub fn rules_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(&self.rules).map_err(|err| SubmitError::transport(err.to_string()))
    }
}

#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn verify(&self, request: VerifyRequest) -> Result<VerifyResponse, SubmitError>;
}

/// HTTP implementation: one multipart POST per submission. No auth, no retry,
/// no timeout; a hung endpoint keeps the attempt in flight indefinitely.
pub struct HttpVerificationService {
    http: Client,
    endpoint: String,
}

impl HttpVerificationService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl VerificationService for HttpVerificationService {
    async fn verify(&self, request: VerifyRequest) -> Result<VerifyResponse, SubmitError> {
        let rules_json = request.rules_json()?;
        let mime = mime_guess::from_path(&request.file_name).first_or_octet_stream();
        let file_part = Part::bytes(request.file_bytes)
            .file_name(request.file_name.clone())
            .mime_str(mime.as_ref())
            .map_err(|err| SubmitError::transport(err.to_string()))?;
        let form = Form::new()
            .part("file", file_part)
            .text("rules", rules_json);

        tracing::info!(
            endpoint = %self.endpoint,
            file_name = %request.file_name,
            "posting verification request"
        );

        // Non-2xx statuses are not short-circuited: the body is parsed
        // regardless, and a parseable body without `results` surfaces as a
        // malformed response rather than a transport failure.
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| SubmitError::transport(err.to_string()))?;

        response
            .json::<VerifyResponse>()
            .await
            .map_err(|err| SubmitError::transport(err.to_string()))
    }
}
