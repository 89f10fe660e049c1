//! Language code used to pick a label bundle

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Code of the language used by the default editing session.
pub const DEFAULT_LANGUAGE: &str = "ca";

/// A validated language code (non-empty, trimmed, lower-case).
///
/// Whether a code is actually available is decided by the localization
/// table, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a new validated language code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the code is empty after trimming
    /// or contains whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Language code cannot be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(format!(
                "Language code cannot contain whitespace: '{}'",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> String {
        code.0
    }
}
