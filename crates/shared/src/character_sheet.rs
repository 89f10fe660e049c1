//! Character sheet snapshot for presentation
//!
//! Everything a front end needs to draw the sheet in one value: the
//! character, the labels for the active language, and the choices its
//! pickers offer. The front end renders it and sends `SheetCommand`s back;
//! it never edits the snapshot directly.

use serde::{Deserialize, Serialize};

use charsheet_domain::{Character, LanguageCode, ScoreOption};

use crate::i18n::{LanguageOption, SheetLabels};

/// Snapshot of an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheetView {
    /// Active language
    pub language: LanguageCode,
    /// Labels in the active language
    pub labels: SheetLabels,
    /// Languages the picker offers
    pub languages: Vec<LanguageOption>,
    /// Choices for each attribute score picker
    pub score_options: Vec<ScoreOption>,
    /// The character being edited
    pub character: Character,
}

#[cfg(test)]
mod tests {
    use charsheet_domain::{score_options, Attribute};

    use super::*;
    use crate::i18n::LocalizationTable;

    #[test]
    fn test_view_serializes_for_front_end() {
        let table = LocalizationTable::builtin().unwrap();
        let language = LanguageCode::default();
        let labels = table.get(&language).unwrap().translations.clone();
        let view = CharacterSheetView {
            language,
            labels,
            languages: table.languages(),
            score_options: score_options(),
            character: Character::new(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["language"], "ca");
        assert_eq!(json["labels"]["personalTraits"], "Trets personals");
        assert_eq!(json["labels"]["attributes"]["WILL"], "Voluntat");
        assert_eq!(json["languages"].as_array().unwrap().len(), 3);
        assert_eq!(json["scoreOptions"][0]["label"], "-");
        assert_eq!(
            json["character"]["attributes"][Attribute::Agility.key()]["extraDamage"],
            ""
        );
    }
}
