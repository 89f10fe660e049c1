//! Score and derived bonus for one attribute

use serde::{Deserialize, Serialize};

use super::score::derive_extra;

/// An attribute's score and the extra-damage bonus derived from it.
///
/// Valid by construction: the only way to build one is from a score, and
/// the bonus is computed at that moment. Deserialization goes through the
/// same path, so a stored `extraDamage` that disagrees with its score is
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AttributeValueData")]
pub struct AttributeValue {
    score: String,
    extra_damage: String,
}

impl AttributeValue {
    /// Build the value for a score, deriving its bonus.
    pub fn from_score(score: impl Into<String>) -> Self {
        let score = score.into();
        let extra_damage = derive_extra(&score).to_string();
        Self {
            score,
            extra_damage,
        }
    }

    /// The score text as picked (empty when unset).
    pub fn score(&self) -> &str {
        &self.score
    }

    /// The derived extra-damage bonus (empty when the score is unset).
    pub fn extra_damage(&self) -> &str {
        &self.extra_damage
    }

    /// Whether a score has been picked.
    pub fn is_set(&self) -> bool {
        !self.score.is_empty()
    }
}

/// Wire shape accepted on deserialization; any `extraDamage` is ignored.
#[derive(Deserialize)]
struct AttributeValueData {
    #[serde(default)]
    score: String,
}

impl From<AttributeValueData> for AttributeValue {
    fn from(data: AttributeValueData) -> Self {
        Self::from_score(data.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let value = AttributeValue::default();
        assert_eq!(value.score(), "");
        assert_eq!(value.extra_damage(), "");
        assert!(!value.is_set());
    }

    #[test]
    fn test_from_score_derives_bonus() {
        let value = AttributeValue::from_score("14");
        assert_eq!(value.score(), "14");
        assert_eq!(value.extra_damage(), "4");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(AttributeValue::from_score("9")).unwrap();
        assert_eq!(json, serde_json::json!({ "score": "9", "extraDamage": "1" }));
    }

    #[test]
    fn test_deserialize_recomputes_stale_bonus() {
        let value: AttributeValue =
            serde_json::from_str(r#"{ "score": "20", "extraDamage": "1" }"#).unwrap();
        assert_eq!(value.extra_damage(), "5");
    }
}
