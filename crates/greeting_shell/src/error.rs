//! Shell error types

use greeting_core::GreetingError;
use thiserror::Error;

use crate::widget::WidgetId;

/// Errors surfaced by the host shell
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Runtime initialization or provider loading failed at the entry point
    #[error("Startup failed: {0}")]
    Startup(GreetingError),

    /// The layout has no widget with this identifier
    #[error("Widget not found: {0}")]
    WidgetNotFound(WidgetId),

    #[error(transparent)]
    Greeting(#[from] GreetingError),
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;
