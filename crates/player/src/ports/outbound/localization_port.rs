//! Localization Port - label lookup for the editing session
//!
//! The session only needs two things from a localization source: the labels
//! for a language, and the list of languages to offer. Any table can back it.

use charsheet_domain::LanguageCode;
use charsheet_shared::{LanguageOption, LocalizationTable, SheetLabels};

/// Port for reading label bundles
///
/// Implementations are read-only; the session never changes the table.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait LocalizationPort: Send + Sync {
    /// Whether the language is available
    fn has_language(&self, code: &LanguageCode) -> bool;

    /// Labels for a language, `None` if the language is unknown
    ///
    /// Returns owned data for mockall compatibility.
    fn labels(&self, code: &LanguageCode) -> Option<SheetLabels>;

    /// Languages the picker offers
    fn languages(&self) -> Vec<LanguageOption>;
}

impl LocalizationPort for LocalizationTable {
    fn has_language(&self, code: &LanguageCode) -> bool {
        self.contains(code)
    }

    fn labels(&self, code: &LanguageCode) -> Option<SheetLabels> {
        self.get(code).map(|bundle| bundle.translations.clone())
    }

    fn languages(&self) -> Vec<LanguageOption> {
        LocalizationTable::languages(self)
    }
}
