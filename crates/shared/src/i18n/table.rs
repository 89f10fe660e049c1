//! Localization table types
//!
//! A table maps a language code to the label bundle shown on the sheet.
//! Tables are read-only once built; switching language only changes which
//! bundle is looked up.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use charsheet_domain::{Attribute, DomainError, LanguageCode};

/// Errors building a localization table.
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The table is not valid JSON or does not match the expected shape
    #[error("Malformed localization table: {0}")]
    Json(#[from] serde_json::Error),

    /// The table has no languages
    #[error("Localization table has no languages")]
    Empty,

    /// A bundle does not name every attribute
    #[error("Language '{language}' has no label for attribute {attribute}")]
    MissingAttribute {
        language: LanguageCode,
        attribute: Attribute,
    },
}

impl From<LocalizationError> for DomainError {
    fn from(err: LocalizationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Column headings for the attribute grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLabels {
    pub attribute: String,
    pub score: String,
    pub extra: String,
}

/// Every label shown on the sheet for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLabels {
    pub title: String,
    pub name: String,
    pub nationality: String,
    pub rank: String,
    pub archetype: String,
    pub background: String,
    pub personality: String,
    pub personal_traits: String,
    pub attribute_labels: AttributeLabels,
    /// Display name per attribute
    pub attributes: BTreeMap<Attribute, String>,
}

impl SheetLabels {
    /// Display name for an attribute, falling back to its key.
    pub fn attribute(&self, attribute: Attribute) -> &str {
        self.attributes
            .get(&attribute)
            .map(String::as_str)
            .unwrap_or_else(|| attribute.key())
    }
}

/// One language entry of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageBundle {
    /// Language name in English
    pub display_name: String,
    /// Language name in itself, shown in the picker
    pub native_name: String,
    pub translations: SheetLabels,
}

/// Picker entry for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: LanguageCode,
    pub display_name: String,
    pub native_name: String,
}

/// Language code to label bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizationTable {
    bundles: BTreeMap<LanguageCode, LanguageBundle>,
}

impl LocalizationTable {
    /// Parse and validate a table from JSON.
    ///
    /// # Errors
    ///
    /// - `Json` if the text does not have the table's shape
    /// - `Empty` if it has no languages
    /// - `MissingAttribute` if a bundle leaves an attribute unnamed
    pub fn from_json(json: &str) -> Result<Self, LocalizationError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), LocalizationError> {
        if self.bundles.is_empty() {
            return Err(LocalizationError::Empty);
        }
        for (code, bundle) in &self.bundles {
            if let Some(attribute) = Attribute::ALL
                .into_iter()
                .find(|a| !bundle.translations.attributes.contains_key(a))
            {
                return Err(LocalizationError::MissingAttribute {
                    language: code.clone(),
                    attribute,
                });
            }
        }
        Ok(())
    }

    /// The bundle for a language, if the table has it.
    pub fn get(&self, code: &LanguageCode) -> Option<&LanguageBundle> {
        self.bundles.get(code)
    }

    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.bundles.contains_key(code)
    }

    /// Codes in the table, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.bundles.keys()
    }

    /// Picker entries for every language, sorted by code.
    pub fn languages(&self) -> Vec<LanguageOption> {
        self.bundles
            .iter()
            .map(|(code, bundle)| LanguageOption {
                code: code.clone(),
                display_name: bundle.display_name.clone(),
                native_name: bundle.native_name.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
