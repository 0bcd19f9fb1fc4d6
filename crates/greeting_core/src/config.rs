//! Runtime configuration
//!
//! Compiled-in defaults, optionally overridden by a TOML document supplied
//! by the embedding host:
//!
//! ```toml
//! log_tag = "HelloWorld"
//! log_level = "debug"
//! placeholder = "Greeting unavailable"
//! ```

use serde::Deserialize;

use crate::{GreetingError, Result};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Settings read once at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    /// Tag attached to platform log lines (logcat tag on Android)
    pub log_tag: String,
    /// Maximum log level: trace, debug, info, warn, error or off
    pub log_level: String,
    /// Text shown instead of the greeting when the provider fails
    pub placeholder: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            log_tag: "HelloWorld".to_string(),
            log_level: "info".to_string(),
            placeholder: "Greeting unavailable".to_string(),
        }
    }
}

impl GreetingConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: GreetingConfig =
            toml::from_str(src).map_err(|e| GreetingError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the runtime cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.log_tag.trim().is_empty() {
            return Err(GreetingError::Config("log_tag must not be empty".to_string()));
        }
        if self.placeholder.is_empty() {
            return Err(GreetingError::Config("placeholder must not be empty".to_string()));
        }
        if !LOG_LEVELS.contains(&self.level().as_str()) {
            return Err(GreetingError::Config(format!(
                "unknown log_level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// The log level, lowercased.
    pub fn level(&self) -> String {
        self.log_level.trim().to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_valid() {
        let config = GreetingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.level(), "info");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(GreetingConfig::from_toml_str("").unwrap(), GreetingConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = GreetingConfig::from_toml_str(r#"log_level = "DEBUG""#).unwrap();
        assert_eq!(config.level(), "debug");
        assert_eq!(config.log_tag, "HelloWorld");
        assert_eq!(config.placeholder, "Greeting unavailable");
    }

    #[test]
    fn test_full_document() {
        let src = r#"
            log_tag = "Greeter"
            log_level = "warn"
            placeholder = "…"
        "#;
        let config = GreetingConfig::from_toml_str(src).unwrap();
        assert_eq!(
            config,
            GreetingConfig {
                log_tag: "Greeter".to_string(),
                log_level: "warn".to_string(),
                placeholder: "…".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = GreetingConfig::from_toml_str(r#"log_level = "chatty""#).unwrap_err();
        assert!(matches!(err, GreetingError::Config(ref msg) if msg.contains("chatty")));
    }

    #[test]
    fn test_rejects_empty_placeholder() {
        let err = GreetingConfig::from_toml_str(r#"placeholder = """#).unwrap_err();
        assert_eq!(err, GreetingError::Config("placeholder must not be empty".to_string()));
    }

    #[test]
    fn test_rejects_blank_tag() {
        assert!(GreetingConfig::from_toml_str(r#"log_tag = "  ""#).is_err());
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert!(matches!(
            GreetingConfig::from_toml_str("locale = \"fr\""),
            Err(GreetingError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            GreetingConfig::from_toml_str("log_level = "),
            Err(GreetingError::Config(_))
        ));
    }
}
