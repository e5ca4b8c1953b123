//! Generation backend configuration.
//!
//! The credential is injected explicitly instead of read from ambient secret
//! storage, so an absent key is an ordinary testable condition. It must never
//! reach logs; `Debug` redacts it.

use std::fmt;

/// Environment variable consulted by [`GenerationConfig::from_env`].
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Generative Language API endpoint, v1beta.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default request timeout. Generation takes seconds; a minute bounds the
/// worst case without cutting off slow answers.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the generation backend.
#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Config with the given key and default endpoint, model and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the key from [`API_KEY_ENV`]. An unset variable yields an
    /// unconfigured config, not an error — the client fails fast at call time.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Whether a usable credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &if self.is_configured() { "<set>" } else { "<unset>" })
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
