//! Gemini HTTP client.
//!
//! Thin blocking client for the Generative Language `generateContent` call:
//! one user turn in, first candidate's first text part out. The key travels
//! in a header, not the URL, so transport errors can never echo it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{GenerationBackend, GenerationError};
use crate::config::GenerationConfig;

/// How much of an unusable payload to keep in the error message.
const SNIPPET_LEN: usize = 200;

pub struct GeminiClient {
    config: GenerationConfig,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: GenerationConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Request body for `generateContent`: a single user turn.
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response body. Everything is defaulted — a structurally empty reply is a
/// malformed response, not a deserialization crash.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// First candidate's first text part, if it carries anything.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
    }
}

impl GenerationBackend for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if !self.config.is_configured() {
            return Err(GenerationError::MissingConfiguration);
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::info!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "requesting recommendation"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.config.api_key.as_str())
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Transport(format!(
                        "request timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else if e.is_connect() {
                    GenerationError::Transport(format!("connection failed: {e}"))
                } else {
                    GenerationError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response
            .text()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        let parsed: GenerateContentResponse = serde_json::from_str(&payload)
            .map_err(|e| GenerationError::MalformedResponse(format!("{e}; body: {}", snippet(&payload))))?;

        parsed.first_text().ok_or_else(|| {
            GenerationError::MalformedResponse(format!(
                "no candidate text; body: {}",
                snippet(&payload)
            ))
        })
    }
}

fn snippet(payload: &str) -> String {
    if payload.len() <= SNIPPET_LEN {
        return payload.to_string();
    }
    let mut end = SNIPPET_LEN;
    while !payload.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &payload[..end])
}
