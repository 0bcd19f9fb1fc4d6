//! Greeting error types

use thiserror::Error;

/// Failures at the edges of the greeting provider.
///
/// `greeting()` itself cannot fail; these only arise when the provider is
/// loaded, configured, or handed across a boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreetingError {
    /// The native library backing the provider could not be made usable
    #[error("Native library load failed: {0}")]
    LibraryLoad(String),

    /// The greeting cannot be represented on the other side of a boundary
    #[error("Greeting text not representable: {0}")]
    InvalidText(String),

    /// Configuration could not be parsed or was rejected
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for greeting operations
pub type Result<T> = std::result::Result<T, GreetingError>;
