//! Application entry point

use std::sync::Arc;

use greeting_core::{GreetingConfig, GreetingProvider};

use crate::error::{Result, ShellError};
use crate::runtime::{self, Runtime, RuntimeCell};

/// A started application: runtime initialized, provider loaded.
pub struct ShellApp {
    runtime: &'static Runtime,
    provider: Arc<dyn GreetingProvider>,
}

impl ShellApp {
    /// Start the application.
    ///
    /// Initializes the process-wide runtime, then loads the provider. Either
    /// failure is returned here as [`ShellError::Startup`], before any screen
    /// is created.
    pub fn start(config: &GreetingConfig, provider: Arc<dyn GreetingProvider>) -> Result<Self> {
        let runtime = runtime::init(config)?;
        Self::with_runtime(runtime, provider)
    }

    /// Start against a caller-owned runtime cell instead of the process-wide one
    pub fn start_in(
        cell: &'static RuntimeCell,
        config: &GreetingConfig,
        provider: Arc<dyn GreetingProvider>,
    ) -> Result<Self> {
        let runtime = cell.init(config)?;
        Self::with_runtime(runtime, provider)
    }

    fn with_runtime(runtime: &'static Runtime, provider: Arc<dyn GreetingProvider>) -> Result<Self> {
        provider.load().map_err(|e| {
            tracing::error!("Greeting provider failed to load: {}", e);
            ShellError::Startup(e)
        })?;
        tracing::info!("ShellApp started");
        Ok(Self { runtime, provider })
    }

    pub fn config(&self) -> &GreetingConfig {
        self.runtime.config()
    }

    /// Ask the provider for the greeting, falling back to the placeholder.
    pub fn greeting_or_placeholder(&self) -> String {
        match self.provider.greeting() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Greeting unavailable, showing placeholder: {}", e);
                self.config().placeholder.clone()
            }
        }
    }
}
