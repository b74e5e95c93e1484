use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const ELEMENTS_CONFIG_SCHEMA_VERSION: u32 = 1;
pub const UNKNOWN_FIELDS_ENV: &str = "CARD_ELEMENTS_UNKNOWN_FIELDS";

fn default_schema_version() -> u32 {
    ELEMENTS_CONFIG_SCHEMA_VERSION
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ElementsConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub unknown_fields: UnknownFieldPolicy,
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            schema_version: ELEMENTS_CONFIG_SCHEMA_VERSION,
            text: TextConfig::default(),
            unknown_fields: UnknownFieldPolicy::default(),
        }
    }
}

impl ElementsConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ElementsConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ElementsConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ElementsConfigError> {
        if self.schema_version != ELEMENTS_CONFIG_SCHEMA_VERSION {
            return Err(ElementsConfigError::UnsupportedSchemaVersion {
                expected: ELEMENTS_CONFIG_SCHEMA_VERSION,
                got: self.schema_version,
            });
        }
        Ok(())
    }

    /// Applies `CARD_ELEMENTS_UNKNOWN_FIELDS` when it is set to a recognised value.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(policy) = UnknownFieldPolicy::from_env() {
            self.unknown_fields = policy;
        }
        self
    }
}

/// Which preprocessing stages run on free text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    #[serde(default = "enabled")]
    pub rewrite_mentions: bool,
    #[serde(default = "enabled")]
    pub convert_emoji: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            rewrite_mentions: true,
            convert_emoji: true,
        }
    }
}

/// How the JSON boundary treats parameter keys it does not know.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownFieldPolicy {
    Reject,
    Ignore,
}

impl Default for UnknownFieldPolicy {
    fn default() -> Self {
        Self::Reject
    }
}

impl UnknownFieldPolicy {
    /// Parse a policy string (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" | "strict" => Some(Self::Reject),
            "ignore" | "lenient" => Some(Self::Ignore),
            _ => None,
        }
    }

    pub fn from_env() -> Option<Self> {
        env::var(UNKNOWN_FIELDS_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElementsConfigError {
    #[error("invalid config: {0}")]
    Parse(String),
    #[error("unsupported schema version: expected {expected}, got {got}")]
    UnsupportedSchemaVersion { expected: u32, got: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip_defaults() {
        let cfg = ElementsConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize");
        let decoded = ElementsConfig::from_json_str(&json).expect("deserialize");
        assert_eq!(decoded, cfg);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = ElementsConfig::from_json_str("{}").expect("config");
        assert!(cfg.text.rewrite_mentions);
        assert!(cfg.text.convert_emoji);
        assert_eq!(cfg.unknown_fields, UnknownFieldPolicy::Reject);
    }

    #[test]
    fn partial_text_section() {
        let cfg = ElementsConfig::from_json_str(
            r#"{"text":{"convert_emoji":false},"unknown_fields":"ignore"}"#,
        )
        .expect("config");
        assert!(cfg.text.rewrite_mentions);
        assert!(!cfg.text.convert_emoji);
        assert_eq!(cfg.unknown_fields, UnknownFieldPolicy::Ignore);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = ElementsConfig::from_json_str(r#"{"schema_version":1,"extra":42}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_unsupported_schema_version() {
        let err = ElementsConfig::from_json_str(r#"{"schema_version":999}"#).unwrap_err();
        assert_eq!(
            err,
            ElementsConfigError::UnsupportedSchemaVersion {
                expected: 1,
                got: 999
            }
        );
    }

    #[test]
    fn policy_parse() {
        assert_eq!(UnknownFieldPolicy::parse(" Ignore "), Some(UnknownFieldPolicy::Ignore));
        assert_eq!(UnknownFieldPolicy::parse("STRICT"), Some(UnknownFieldPolicy::Reject));
        assert_eq!(UnknownFieldPolicy::parse("maybe"), None);
    }
}
