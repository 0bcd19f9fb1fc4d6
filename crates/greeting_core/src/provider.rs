//! Greeting provider seam
//!
//! The host shell depends on this trait only, never on how the greeting is
//! produced. `RustGreeting` is the in-process native provider.

use crate::Result;

/// Something that can hand the shell a display string.
pub trait GreetingProvider: Send + Sync {
    /// Make the provider usable.
    ///
    /// Called once by the application entry point before any `greeting()`
    /// call. Failures here are startup errors.
    fn load(&self) -> Result<()> {
        Ok(())
    }

    /// Produce the display string.
    fn greeting(&self) -> Result<String>;
}

/// The native greeting, linked into the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustGreeting;

impl GreetingProvider for RustGreeting {
    fn greeting(&self) -> Result<String> {
        let text = crate::greeting();
        tracing::debug!(len = text.len(), "RustGreeting: produced greeting");
        Ok(text)
    }
}
