//! Greeting Android Platform
//!
//! The native library behind `MainActivity.greeting()`.
//!
//! Exports:
//!
//! - `greeting` / `greeting_abi_version`: plain C ABI, available on every target
//! - `JNI_OnLoad` and `Java_com_example_helloworld_MainActivity_greeting`: Android only
//!
//! `JNI_OnLoad` runs [`init`] when the activity's companion object calls
//! `System.loadLibrary("rust")`, so an initialization failure shows up as a
//! load error at startup instead of inside `onCreate`.

use std::sync::OnceLock;

use greeting_core::{GreetingConfig, GreetingError, GreetingProvider, RustGreeting};

pub mod ffi;

#[cfg(target_os = "android")]
mod jni_bridge;
#[cfg(target_os = "android")]
mod logging;

/// Outcome of the one-time library initialization.
static CONFIG: OnceLock<Result<GreetingConfig, GreetingError>> = OnceLock::new();

/// Initialize the native library.
///
/// Safe to call multiple times; the first call wins and its outcome, success
/// or failure, is returned to every caller. On Android this installs the
/// logcat logger; elsewhere the embedding process owns logging.
pub fn init(config: GreetingConfig) -> greeting_core::Result<&'static GreetingConfig> {
    CONFIG
        .get_or_init(|| {
            config.validate()?;
            #[cfg(target_os = "android")]
            logging::init_logging(&config);
            tracing::info!(tag = %config.log_tag, "Native greeting library initialized");
            Ok(config)
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Text to show when the greeting cannot be produced.
pub fn placeholder() -> String {
    match CONFIG.get() {
        Some(Ok(config)) => config.placeholder.clone(),
        _ => GreetingConfig::default().placeholder,
    }
}

/// The greeting, or the placeholder if the provider fails.
pub fn greeting_or_placeholder() -> String {
    match RustGreeting.greeting() {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Greeting unavailable, returning placeholder: {}", e);
            placeholder()
        }
    }
}
