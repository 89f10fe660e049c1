//! Character sheet edits and their outcomes
//!
//! `FieldUpdate` and `SheetCommand` are what the presentation layer sends;
//! `SheetChange` is what a mutation reports back, so callers can react
//! without diffing the whole sheet.

use serde::{Deserialize, Serialize};

use crate::aggregates::{STRESS_BOXES, TRAIT_COUNT};
use crate::types::Attribute;
use crate::value_objects::{AttributeValue, LanguageCode};

/// Wholesale replacement of one non-attribute field.
///
/// One variant per field, each carrying the value type that field stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    Name(String),
    Nationality(String),
    Rank(String),
    Archetype(String),
    Background(String),
    Personality(String),
    PersonalTraits([String; TRAIT_COUNT]),
    Stress([bool; STRESS_BOXES]),
    Courage(String),
    Wounds(String),
    Armor(String),
    Fortune(String),
    Languages(String),
}

impl FieldUpdate {
    /// Serialized name of the field this update targets.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Name(_) => "name",
            FieldUpdate::Nationality(_) => "nationality",
            FieldUpdate::Rank(_) => "rank",
            FieldUpdate::Archetype(_) => "archetype",
            FieldUpdate::Background(_) => "background",
            FieldUpdate::Personality(_) => "personality",
            FieldUpdate::PersonalTraits(_) => "personalTraits",
            FieldUpdate::Stress(_) => "stress",
            FieldUpdate::Courage(_) => "courage",
            FieldUpdate::Wounds(_) => "wounds",
            FieldUpdate::Armor(_) => "armor",
            FieldUpdate::Fortune(_) => "fortune",
            FieldUpdate::Languages(_) => "languages",
        }
    }
}

/// A user edit forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SheetCommand {
    SetField { update: FieldUpdate },
    SetTraitAt { index: usize, value: String },
    SetAttributeScore { attribute: Attribute, score: String },
    SetStressAt { index: usize, marked: bool },
    ToggleStress { index: usize },
    SelectLanguage { code: LanguageCode },
}

/// Outcome of applying an edit to a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetChange {
    /// A whole field was replaced
    FieldReplaced { field: &'static str },
    /// One personal trait slot changed
    TraitChanged {
        index: usize,
        from: String,
        to: String,
    },
    /// An attribute's score (and with it the bonus) changed
    AttributeChanged {
        attribute: Attribute,
        from: AttributeValue,
        to: AttributeValue,
    },
    /// One stress box was set
    StressChanged { index: usize, marked: bool },
    /// The label language was switched
    LanguageChanged { from: LanguageCode, to: LanguageCode },
    /// The sheet was cleared for a new session
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_update_wire_shape() {
        let update = FieldUpdate::Name("Ada".to_string());
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "field": "name", "value": "Ada" }));
    }

    #[test]
    fn test_field_name_matches_wire_tag() {
        let update = FieldUpdate::PersonalTraits(Default::default());
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["field"], update.field_name());
    }

    #[test]
    fn test_stress_update_requires_twelve_boxes() {
        let short = r#"{ "field": "stress", "value": [true, false] }"#;
        assert!(serde_json::from_str::<FieldUpdate>(short).is_err());
    }

    #[test]
    fn test_command_parses_from_presentation_json() {
        let json = r#"{ "type": "set_attribute_score", "attribute": "STRENGTH", "score": "9" }"#;
        let command: SheetCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            SheetCommand::SetAttributeScore {
                attribute: Attribute::Strength,
                score: "9".to_string(),
            }
        );
    }

    #[test]
    fn test_set_field_command_parses() {
        let json = r#"{ "type": "set_field", "update": { "field": "rank", "value": "Captain" } }"#;
        let command: SheetCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            SheetCommand::SetField {
                update: FieldUpdate::Rank("Captain".to_string()),
            }
        );
    }
}
