//! remedia — clinical recommendation request pipeline.
//!
//! Turns structured patient fields plus an optional tabular exam upload into
//! a single model prompt, submits it to a generation backend, and rewrites
//! the answer's section titles for display. The surrounding UI (forms,
//! styling, disclaimers) lives outside this crate and drives the
//! [`ingest::ingest`] → [`pipeline::recommend`] boundary.

pub mod config;
pub mod format;
pub mod generate;
pub mod ingest;
pub mod patient;
pub mod pipeline;
pub mod prompt;

pub use config::GenerationConfig;
pub use format::{format_recommendation, FormattedRecommendation, Section};
pub use generate::{GeminiClient, GenerationBackend, GenerationError, MockBackend};
pub use ingest::{ingest, IngestError, IngestedFile};
pub use patient::{Gender, PatientContext};
pub use pipeline::{generate_recommendation, recommend, PromptRequest, RecommendError};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the pipeline.
/// Respects `RUST_LOG`, defaulting to info.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
