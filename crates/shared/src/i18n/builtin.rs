//! The localization table shipped with the crate

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::table::{LocalizationError, LocalizationTable};

const BUILTIN_TABLE_JSON: &str = include_str!("../../i18n/character_sheet.json");

static BUILTIN_TABLE: OnceCell<Arc<LocalizationTable>> = OnceCell::new();

impl LocalizationTable {
    /// The built-in table (`ca`, `en`, `es`), parsed on first use and shared
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the embedded table is malformed. A failed
    /// parse is not cached.
    pub fn builtin() -> Result<Arc<LocalizationTable>, LocalizationError> {
        BUILTIN_TABLE
            .get_or_try_init(|| {
                let table = LocalizationTable::from_json(BUILTIN_TABLE_JSON)?;
                tracing::info!(languages = table.len(), "Loaded built-in localization table");
                Ok(Arc::new(table))
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use charsheet_domain::{Attribute, LanguageCode};

    use super::*;

    fn code(s: &str) -> LanguageCode {
        LanguageCode::new(s).unwrap()
    }

    #[test]
    fn test_builtin_languages() {
        let table = LocalizationTable::builtin().unwrap();
        let codes: Vec<&str> = table.codes().map(LanguageCode::as_str).collect();
        assert_eq!(codes, vec!["ca", "en", "es"]);
    }

    #[test]
    fn test_builtin_is_shared() {
        let first = LocalizationTable::builtin().unwrap();
        let second = LocalizationTable::builtin().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_catalan_labels() {
        let table = LocalizationTable::builtin().unwrap();
        let ca = table.get(&code("ca")).unwrap();
        assert_eq!(ca.native_name, "Català");
        assert_eq!(ca.translations.attribute(Attribute::Strength), "Força");
    }

    #[test]
    fn test_every_bundle_names_every_attribute() {
        let table = LocalizationTable::builtin().unwrap();
        for language in table.codes() {
            let bundle = table.get(language).unwrap();
            for attribute in Attribute::ALL {
                assert!(bundle.translations.attributes.contains_key(&attribute));
            }
        }
    }
}
