//! Editing session configuration

use serde::{Deserialize, Serialize};

use charsheet_domain::LanguageCode;

/// Environment variable naming the language a new session starts in.
pub const DEFAULT_LANGUAGE_ENV: &str = "CHARSHEET_DEFAULT_LANGUAGE";

/// Settings for a new editing session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Language the labels start in (`ca` unless configured)
    pub default_language: LanguageCode,
}

impl SessionConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset or invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(DEFAULT_LANGUAGE_ENV) {
            match LanguageCode::new(raw) {
                Ok(code) => config.default_language = code,
                Err(err) => tracing::warn!(
                    error = %err,
                    "Ignoring {}, using '{}'",
                    DEFAULT_LANGUAGE_ENV,
                    config.default_language
                ),
            }
        }
        config
    }
}
