//! Character sheet domain.
//!
//! The character data model, the attribute bonus rule, and the typed edits
//! that keep the model's invariants. Pure data and rules: no I/O, no
//! logging, no knowledge of how the sheet is displayed.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod types;
pub mod value_objects;

pub use aggregates::{Attributes, Character, STRESS_BOXES, TRAIT_COUNT};
pub use error::DomainError;
pub use events::{FieldUpdate, SheetChange, SheetCommand};
pub use types::Attribute;
pub use value_objects::{
    derive_extra, parse_score, score_options, AttributeValue, LanguageCode, ScoreOption,
    DEFAULT_LANGUAGE, EMPTY_SCORE_LABEL, SCORE_OPTION_MAX, SCORE_OPTION_MIN,
};
