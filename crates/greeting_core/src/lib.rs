//! Greeting Core
//!
//! The greeting provider shown by the hello-world activity.
//!
//! # Example
//!
//! ```
//! use greeting_core::{greeting, GreetingProvider, RustGreeting};
//!
//! assert_eq!(greeting(), "Hello 🦀");
//!
//! let provider = RustGreeting;
//! provider.load().unwrap();
//! assert_eq!(provider.greeting().unwrap(), greeting());
//! ```

mod config;
mod error;
mod provider;

pub use config::GreetingConfig;
pub use error::{GreetingError, Result};
pub use provider::{GreetingProvider, RustGreeting};

/// The text returned across the native boundary.
pub const GREETING: &str = "Hello 🦀";

/// Produce the greeting.
///
/// Pure and total: no I/O, no shared state, always the same non-empty
/// UTF-8 string. Safe to call from any thread.
pub fn greeting() -> String {
    GREETING.to_string()
}
