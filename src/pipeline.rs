//! Recommendation pipeline entry point.
//!
//! One submit action, one synchronous pass: validate the request, assemble
//! the prompt, call the backend, rewrite the answer for display. The
//! generation call is the only step that blocks on I/O; nothing is shared
//! across requests beyond the read-only backend configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{format_recommendation, FormattedRecommendation};
use crate::generate::{GenerationBackend, GenerationError};
use crate::ingest::IngestedFile;
use crate::patient::PatientContext;
use crate::prompt::build_prompt;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// The request carried nothing for the model to work with.
    #[error("describe the patient's symptoms or attach exam results before requesting a recommendation")]
    EmptyRequest,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Everything one submit action carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptRequest {
    pub patient: PatientContext,
    pub exam: Option<IngestedFile>,
    pub symptoms: String,
}

impl PromptRequest {
    /// Ingested text destined for the prompt, if a file was uploaded.
    pub fn exam_text(&self) -> Option<&str> {
        self.exam.as_ref().map(IngestedFile::prompt_text)
    }

    /// A request must carry a symptom description or file text. Whitespace
    /// does not count.
    pub fn has_context(&self) -> bool {
        !self.symptoms.trim().is_empty()
            || self.exam_text().is_some_and(|text| !text.trim().is_empty())
    }

    /// The prompt this request assembles to.
    pub fn to_prompt(&self) -> String {
        build_prompt(&self.patient, self.exam_text(), &self.symptoms)
    }
}

/// Validate and submit a request, returning the raw generated text.
///
/// An empty request is rejected here, before the backend is reached.
pub fn generate_recommendation(
    backend: &dyn GenerationBackend,
    request: &PromptRequest,
) -> Result<String, RecommendError> {
    if !request.has_context() {
        return Err(RecommendError::EmptyRequest);
    }

    let prompt = request.to_prompt();
    tracing::info!(
        prompt_chars = prompt.len(),
        has_exam = request.exam.is_some(),
        "submitting recommendation request"
    );

    let text = backend.generate(&prompt)?;
    tracing::info!(response_chars = text.len(), "recommendation received");
    Ok(text)
}

/// Full pass: validate, generate, and rewrite section headings for display.
pub fn recommend(
    backend: &dyn GenerationBackend,
    request: &PromptRequest,
) -> Result<FormattedRecommendation, RecommendError> {
    let raw = generate_recommendation(backend, request)?;
    Ok(format_recommendation(&raw))
}
