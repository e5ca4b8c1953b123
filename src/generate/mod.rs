//! Generation backend interface.
//!
//! One prompt in, one answer out. Each call is an independent single-turn
//! conversation; no history is retained between calls. The core never
//! retries — failures surface typed so the caller owns the retry policy.

pub mod gemini;

pub use gemini::GeminiClient;

use std::cell::{Cell, RefCell};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    /// No credential present; checked before any network activity.
    #[error("no API key configured: supply one via GenerationConfig or the GEMINI_API_KEY environment variable")]
    MissingConfiguration,

    /// Connection-level failure, including timeout.
    #[error("could not reach the generation backend: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("generation backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    /// The backend answered 200 but without usable generated text.
    #[error("generation backend response carried no usable text: {0}")]
    MalformedResponse(String),
}

/// A backend able to answer one assembled prompt.
pub trait GenerationBackend {
    /// Submit a single-turn prompt and return the generated text.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Scriptable backend for tests and offline runs: returns a canned outcome
/// and records what it was asked.
pub struct MockBackend {
    reply: Result<String, GenerationError>,
    calls: Cell<usize>,
    last_prompt: RefCell<Option<String>>,
}

impl MockBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Cell::new(0),
            last_prompt: RefCell::new(None),
        }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self {
            reply: Err(error),
            calls: Cell::new(0),
            last_prompt: RefCell::new(None),
        }
    }

    /// How many times `generate` ran.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// The most recent prompt, if any call happened.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.borrow().clone()
    }
}

impl GenerationBackend for MockBackend {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_prompt.borrow_mut() = Some(prompt.to_string());
        self.reply.clone()
    }
}
