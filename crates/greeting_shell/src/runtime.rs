//! One-time runtime initialization
//!
//! The entry point initializes the runtime before anything crosses the
//! native boundary. The first call decides the outcome; later calls return
//! the same runtime, or the same startup error, without running again.

use std::sync::OnceLock;

use greeting_core::{GreetingConfig, GreetingError};
use tracing_subscriber::EnvFilter;

use crate::error::{Result, ShellError};

/// Process-wide runtime used by [`init`].
static RUNTIME: RuntimeCell = RuntimeCell::new();

/// Initialized runtime state
#[derive(Debug)]
pub struct Runtime {
    config: GreetingConfig,
}

impl Runtime {
    pub fn config(&self) -> &GreetingConfig {
        &self.config
    }
}

/// Write-once holder for an initialization outcome
#[derive(Debug, Default)]
pub struct RuntimeCell {
    outcome: OnceLock<std::result::Result<Runtime, GreetingError>>,
}

impl RuntimeCell {
    pub const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
        }
    }

    /// Initialize once. Safe to call multiple times; the first call wins.
    pub fn init(&self, config: &GreetingConfig) -> Result<&Runtime> {
        self.outcome
            .get_or_init(|| -> std::result::Result<Runtime, GreetingError> {
                config.validate()?;
                init_logging(config);
                tracing::info!(tag = %config.log_tag, level = %config.level(), "Runtime initialized");
                Ok(Runtime {
                    config: config.clone(),
                })
            })
            .as_ref()
            .map_err(|e| ShellError::Startup(e.clone()))
    }

    /// The runtime, if initialization already succeeded
    pub fn try_get(&self) -> Option<&Runtime> {
        self.outcome.get().and_then(|outcome| outcome.as_ref().ok())
    }
}

/// Initialize the process-wide runtime.
pub fn init(config: &GreetingConfig) -> Result<&'static Runtime> {
    RUNTIME.init(config)
}

/// The process-wide runtime, if initialized
pub fn try_get() -> Option<&'static Runtime> {
    RUNTIME.try_get()
}

/// Install the host log subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(config: &GreetingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level()));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Log subscriber already installed");
    }
}
