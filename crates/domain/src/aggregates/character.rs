//! Character aggregate - the data behind one character sheet
//!
//! # Invariants
//!
//! - Exactly five personal trait slots and twelve stress boxes (array types)
//! - Exactly one [`AttributeValue`] per [`Attribute`]; there is no API to add
//!   or remove attributes
//! - Every attribute's bonus matches its score, because scores are only ever
//!   written through [`AttributeValue::from_score`]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::{FieldUpdate, SheetChange};
use crate::types::Attribute;
use crate::value_objects::AttributeValue;

/// Number of personal trait slots on a sheet.
pub const TRAIT_COUNT: usize = 5;

/// Number of boxes on the stress track.
pub const STRESS_BOXES: usize = 12;

// =============================================================================
// Attributes
// =============================================================================

/// Scores for all six attributes.
///
/// Serialized as a map keyed by attribute name. A map missing any of the
/// six keys does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Attribute, AttributeValue>",
    into = "BTreeMap<Attribute, AttributeValue>"
)]
pub struct Attributes([AttributeValue; Attribute::COUNT]);

impl Attributes {
    /// The value stored for an attribute.
    pub fn get(&self, attribute: Attribute) -> &AttributeValue {
        &self.0[attribute.index()]
    }

    /// All attributes with their values, in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        Attribute::ALL.into_iter().zip(self.0.iter())
    }

    fn replace(&mut self, attribute: Attribute, value: AttributeValue) -> AttributeValue {
        std::mem::replace(&mut self.0[attribute.index()], value)
    }
}

impl TryFrom<BTreeMap<Attribute, AttributeValue>> for Attributes {
    type Error = DomainError;

    fn try_from(mut map: BTreeMap<Attribute, AttributeValue>) -> Result<Self, Self::Error> {
        let mut values: [AttributeValue; Attribute::COUNT] = Default::default();
        for attribute in Attribute::ALL {
            values[attribute.index()] = map.remove(&attribute).ok_or_else(|| {
                DomainError::validation(format!("attributes must contain {}", attribute))
            })?;
        }
        Ok(Self(values))
    }
}

impl From<Attributes> for BTreeMap<Attribute, AttributeValue> {
    fn from(attributes: Attributes) -> Self {
        Attribute::ALL.into_iter().zip(attributes.0).collect()
    }
}

// =============================================================================
// Character
// =============================================================================

/// A character as edited on the sheet.
///
/// `Character::default()` is the blank sheet a new editing session starts
/// from. Free-text fields accept any string, including empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    name: String,
    nationality: String,
    rank: String,
    archetype: String,
    background: String,
    personality: String,
    personal_traits: [String; TRAIT_COUNT],
    stress: [bool; STRESS_BOXES],
    courage: String,
    wounds: String,
    armor: String,
    fortune: String,
    languages: String,
    attributes: Attributes,
}

impl Character {
    /// A blank character sheet.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn rank(&self) -> &str {
        &self.rank
    }

    pub fn archetype(&self) -> &str {
        &self.archetype
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn personality(&self) -> &str {
        &self.personality
    }

    pub fn personal_traits(&self) -> &[String; TRAIT_COUNT] {
        &self.personal_traits
    }

    pub fn stress(&self) -> &[bool; STRESS_BOXES] {
        &self.stress
    }

    pub fn courage(&self) -> &str {
        &self.courage
    }

    pub fn wounds(&self) -> &str {
        &self.wounds
    }

    pub fn armor(&self) -> &str {
        &self.armor
    }

    pub fn fortune(&self) -> &str {
        &self.fortune
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Shorthand for `self.attributes().get(attribute)`.
    pub fn attribute(&self, attribute: Attribute) -> &AttributeValue {
        self.attributes.get(attribute)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace one non-attribute field wholesale.
    ///
    /// No validation is applied; every other field is left as it was.
    pub fn set_field(&mut self, update: FieldUpdate) -> SheetChange {
        let field = update.field_name();
        match update {
            FieldUpdate::Name(value) => self.name = value,
            FieldUpdate::Nationality(value) => self.nationality = value,
            FieldUpdate::Rank(value) => self.rank = value,
            FieldUpdate::Archetype(value) => self.archetype = value,
            FieldUpdate::Background(value) => self.background = value,
            FieldUpdate::Personality(value) => self.personality = value,
            FieldUpdate::PersonalTraits(value) => self.personal_traits = value,
            FieldUpdate::Stress(value) => self.stress = value,
            FieldUpdate::Courage(value) => self.courage = value,
            FieldUpdate::Wounds(value) => self.wounds = value,
            FieldUpdate::Armor(value) => self.armor = value,
            FieldUpdate::Fortune(value) => self.fortune = value,
            FieldUpdate::Languages(value) => self.languages = value,
        }
        SheetChange::FieldReplaced { field }
    }

    /// Replace one personal trait slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `index >= 5`; the character is
    /// left untouched.
    pub fn set_trait_at(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<SheetChange, DomainError> {
        let slot = self
            .personal_traits
            .get_mut(index)
            .ok_or_else(|| DomainError::out_of_range("personalTraits", index, TRAIT_COUNT))?;
        let to = value.into();
        let from = std::mem::replace(slot, to.clone());
        Ok(SheetChange::TraitChanged { index, from, to })
    }

    /// Set an attribute's score, deriving its bonus in the same write.
    ///
    /// The other five attributes are untouched. Scores outside the picker
    /// range, or text that is not a number, are stored as given.
    pub fn set_attribute_score(
        &mut self,
        attribute: Attribute,
        score: impl Into<String>,
    ) -> SheetChange {
        let to = AttributeValue::from_score(score);
        let from = self.attributes.replace(attribute, to.clone());
        SheetChange::AttributeChanged {
            attribute,
            from,
            to,
        }
    }

    /// Mark or clear one stress box.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `index >= 12`.
    pub fn set_stress_at(&mut self, index: usize, marked: bool) -> Result<SheetChange, DomainError> {
        let slot = self.stress_slot(index)?;
        *slot = marked;
        Ok(SheetChange::StressChanged { index, marked })
    }

    /// Flip one stress box.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `index >= 12`.
    pub fn toggle_stress(&mut self, index: usize) -> Result<SheetChange, DomainError> {
        let slot = self.stress_slot(index)?;
        *slot = !*slot;
        Ok(SheetChange::StressChanged {
            index,
            marked: *slot,
        })
    }

    /// Number of marked stress boxes.
    pub fn stress_marked(&self) -> usize {
        self.stress.iter().filter(|&&marked| marked).count()
    }

    fn stress_slot(&mut self, index: usize) -> Result<&mut bool, DomainError> {
        self.stress
            .get_mut(index)
            .ok_or_else(|| DomainError::out_of_range("stress", index, STRESS_BOXES))
    }
}
