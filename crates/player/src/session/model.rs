//! Character sheet model - one editing session
//!
//! Owns the character being edited and the active label language. The front
//! end forwards each user edit as a [`SheetCommand`] (or calls the matching
//! method directly) and re-renders from [`CharacterSheetModel::snapshot`].
//! Every operation runs to completion before the next one starts, so there
//! is no partially-applied state to observe.

use std::sync::Arc;

use charsheet_domain::{
    score_options, Attribute, Character, DomainError, FieldUpdate, LanguageCode, ScoreOption,
    SheetChange, SheetCommand,
};
use charsheet_shared::{CharacterSheetView, LocalizationTable, SheetLabels};

use super::config::SessionConfig;
use crate::ports::outbound::LocalizationPort;

/// The editing session for one character sheet.
pub struct CharacterSheetModel {
    character: Character,
    language: LanguageCode,
    localization: Arc<dyn LocalizationPort>,
}

impl std::fmt::Debug for CharacterSheetModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterSheetModel")
            .field("character", &self.character)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl CharacterSheetModel {
    /// Start a session on a blank character.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the configured default language is
    /// not available from `localization`.
    pub fn new(
        config: &SessionConfig,
        localization: Arc<dyn LocalizationPort>,
    ) -> Result<Self, DomainError> {
        let language = config.default_language.clone();
        if !localization.has_language(&language) {
            tracing::warn!(language = %language, "Default language not in localization table");
            return Err(DomainError::not_found("language", language.as_str()));
        }

        tracing::info!(language = %language, "Started character sheet session");
        Ok(Self {
            character: Character::new(),
            language,
            localization,
        })
    }

    /// Start a session backed by the built-in localization table.
    ///
    /// # Errors
    ///
    /// Fails if the built-in table cannot be loaded or lacks the configured
    /// default language.
    pub fn with_builtin_table(config: &SessionConfig) -> Result<Self, DomainError> {
        let table: Arc<dyn LocalizationPort> = LocalizationTable::builtin()?;
        Self::new(config, table)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Labels for the active language.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the localization source no longer
    /// has the active language.
    pub fn labels(&self) -> Result<SheetLabels, DomainError> {
        self.localization
            .labels(&self.language)
            .ok_or_else(|| DomainError::not_found("language", self.language.as_str()))
    }

    /// Choices for the attribute score pickers.
    pub fn score_options(&self) -> Vec<ScoreOption> {
        score_options()
    }

    /// Everything the front end needs to render the sheet.
    ///
    /// # Errors
    ///
    /// Same as [`CharacterSheetModel::labels`].
    pub fn snapshot(&self) -> Result<CharacterSheetView, DomainError> {
        Ok(CharacterSheetView {
            language: self.language.clone(),
            labels: self.labels()?,
            languages: self.localization.languages(),
            score_options: self.score_options(),
            character: self.character.clone(),
        })
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Apply one edit from the front end.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for trait or stress indices past the end, and
    /// `NotFound` for an unknown language. A rejected command changes
    /// nothing.
    pub fn apply(&mut self, command: SheetCommand) -> Result<SheetChange, DomainError> {
        let result = match command {
            SheetCommand::SetField { update } => Ok(self.set_field(update)),
            SheetCommand::SetTraitAt { index, value } => self.set_trait_at(index, value),
            SheetCommand::SetAttributeScore { attribute, score } => {
                Ok(self.set_attribute_score(attribute, score))
            }
            SheetCommand::SetStressAt { index, marked } => self.set_stress_at(index, marked),
            SheetCommand::ToggleStress { index } => self.toggle_stress(index),
            SheetCommand::SelectLanguage { code } => self.select_language(code),
        };
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Rejected character sheet edit");
        }
        result
    }

    /// Replace one non-attribute field wholesale.
    pub fn set_field(&mut self, update: FieldUpdate) -> SheetChange {
        let change = self.character.set_field(update);
        tracing::trace!(?change, "Field updated");
        change
    }

    /// Replace one personal trait slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `index >= 5`.
    pub fn set_trait_at(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<SheetChange, DomainError> {
        self.character.set_trait_at(index, value)
    }

    /// Set an attribute's score and its derived bonus together.
    pub fn set_attribute_score(
        &mut self,
        attribute: Attribute,
        score: impl Into<String>,
    ) -> SheetChange {
        let change = self.character.set_attribute_score(attribute, score);
        let value = self.character.attribute(attribute);
        tracing::debug!(
            attribute = %attribute,
            score = value.score(),
            extra = value.extra_damage(),
            "Attribute score updated"
        );
        change
    }

    /// Mark or clear one stress box.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `index >= 12`.
    pub fn set_stress_at(&mut self, index: usize, marked: bool) -> Result<SheetChange, DomainError> {
        self.character.set_stress_at(index, marked)
    }

    /// Flip one stress box.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `index >= 12`.
    pub fn toggle_stress(&mut self, index: usize) -> Result<SheetChange, DomainError> {
        self.character.toggle_stress(index)
    }

    /// Switch the label language. The character is not touched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the language is not available; the
    /// previous language stays active.
    pub fn select_language(&mut self, code: LanguageCode) -> Result<SheetChange, DomainError> {
        if !self.localization.has_language(&code) {
            return Err(DomainError::not_found("language", code.as_str()));
        }
        let from = std::mem::replace(&mut self.language, code.clone());
        tracing::debug!(from = %from, to = %code, "Language selected");
        Ok(SheetChange::LanguageChanged { from, to: code })
    }

    /// Clear the sheet for a new character, keeping the active language.
    pub fn reset(&mut self) -> SheetChange {
        self.character = Character::new();
        tracing::info!("Character sheet reset");
        SheetChange::Reset
    }
}

#[cfg(test)]
mod tests {
    use charsheet_domain::{AttributeValue, TRAIT_COUNT};
    use charsheet_shared::{AttributeLabels, LanguageOption};

    use super::*;
    use crate::ports::outbound::MockLocalizationPort;

    fn code(s: &str) -> LanguageCode {
        LanguageCode::new(s).unwrap()
    }

    fn labels(title: &str) -> SheetLabels {
        SheetLabels {
            title: title.to_string(),
            name: "Name".to_string(),
            nationality: "Nationality".to_string(),
            rank: "Rank".to_string(),
            archetype: "Archetype".to_string(),
            background: "Background".to_string(),
            personality: "Personality".to_string(),
            personal_traits: "Personal Traits".to_string(),
            attribute_labels: AttributeLabels {
                attribute: "Attribute".to_string(),
                score: "Score".to_string(),
                extra: "Extra".to_string(),
            },
            attributes: Attribute::ALL
                .into_iter()
                .map(|a| (a, a.key().to_string()))
                .collect(),
        }
    }

    /// A port that knows `ca` and `en`.
    fn two_language_port() -> MockLocalizationPort {
        let mut port = MockLocalizationPort::new();
        port.expect_has_language()
            .returning(|c| matches!(c.as_str(), "ca" | "en"));
        port.expect_labels().returning(|c| match c.as_str() {
            "ca" => Some(labels("Full de personatge")),
            "en" => Some(labels("Character Sheet")),
            _ => None,
        });
        port.expect_languages().returning(|| {
            vec![
                LanguageOption {
                    code: code("ca"),
                    display_name: "Catalan".to_string(),
                    native_name: "Català".to_string(),
                },
                LanguageOption {
                    code: code("en"),
                    display_name: "English".to_string(),
                    native_name: "English".to_string(),
                },
            ]
        });
        port
    }

    fn model() -> CharacterSheetModel {
        CharacterSheetModel::new(&SessionConfig::default(), Arc::new(two_language_port())).unwrap()
    }

    #[test]
    fn test_new_session_is_blank_in_default_language() {
        let model = model();
        assert_eq!(model.language().as_str(), "ca");
        assert_eq!(model.character(), &Character::new());
        assert_eq!(model.labels().unwrap().title, "Full de personatge");
    }

    #[test]
    fn test_new_session_rejects_unknown_default_language() {
        let config = SessionConfig {
            default_language: code("fr"),
        };
        let err = CharacterSheetModel::new(&config, Arc::new(two_language_port())).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "language", .. }));
    }

    #[test]
    fn test_select_language_leaves_character_alone() {
        let mut model = model();
        model.set_field(FieldUpdate::Name("Montserrat".to_string()));
        model.set_attribute_score(Attribute::Insight, "13");
        let before = model.character().clone();

        let change = model.select_language(code("en")).unwrap();

        assert_eq!(
            change,
            SheetChange::LanguageChanged {
                from: code("ca"),
                to: code("en"),
            }
        );
        assert_eq!(model.character(), &before);
        assert_eq!(model.labels().unwrap().title, "Character Sheet");
    }

    #[test]
    fn test_unknown_language_keeps_previous() {
        let mut model = model();
        let err = model
            .apply(SheetCommand::SelectLanguage { code: code("xx") })
            .unwrap_err();

        assert_eq!(err, DomainError::not_found("language", "xx"));
        assert_eq!(model.language().as_str(), "ca");
    }

    #[test]
    fn test_apply_attribute_score() {
        let mut model = model();
        let change = model
            .apply(SheetCommand::SetAttributeScore {
                attribute: Attribute::Reason,
                score: "20".to_string(),
            })
            .unwrap();

        assert!(matches!(
            change,
            SheetChange::AttributeChanged { attribute: Attribute::Reason, .. }
        ));
        assert_eq!(
            model.character().attribute(Attribute::Reason),
            &AttributeValue::from_score("20")
        );
        assert_eq!(model.character().attribute(Attribute::Reason).extra_damage(), "5");
    }

    #[test]
    fn test_apply_trait_out_of_range_changes_nothing() {
        let mut model = model();
        let err = model
            .apply(SheetCommand::SetTraitAt {
                index: TRAIT_COUNT,
                value: "Stubborn".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::OutOfRange { index: 5, len: 5, .. }));
        assert_eq!(model.character(), &Character::new());
    }

    #[test]
    fn test_apply_stress_commands() {
        let mut model = model();
        model
            .apply(SheetCommand::SetStressAt { index: 0, marked: true })
            .unwrap();
        model.apply(SheetCommand::ToggleStress { index: 1 }).unwrap();
        assert_eq!(model.character().stress_marked(), 2);

        assert!(model.apply(SheetCommand::ToggleStress { index: 12 }).is_err());
    }

    #[test]
    fn test_reset_keeps_language() {
        let mut model = model();
        model.select_language(code("en")).unwrap();
        model.set_trait_at(0, "Curious").unwrap();

        assert_eq!(model.reset(), SheetChange::Reset);
        assert_eq!(model.character(), &Character::new());
        assert_eq!(model.language().as_str(), "en");
    }

    #[test]
    fn test_snapshot() {
        let mut model = model();
        model.set_attribute_score(Attribute::Will, "8");
        let view = model.snapshot().unwrap();

        assert_eq!(view.language.as_str(), "ca");
        assert_eq!(view.labels.title, "Full de personatge");
        assert_eq!(view.languages.len(), 2);
        assert_eq!(view.score_options.len(), 21);
        assert_eq!(view.character.attribute(Attribute::Will).extra_damage(), "0");
    }

    #[test]
    fn test_builtin_table_session() {
        let model = CharacterSheetModel::with_builtin_table(&SessionConfig::default()).unwrap();
        let view = model.snapshot().unwrap();
        assert_eq!(view.labels.attribute(Attribute::Agility), "Agilitat");
    }
}
