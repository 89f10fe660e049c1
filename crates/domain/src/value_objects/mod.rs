//! Value objects - Immutable objects defined by their attributes

mod attribute_value;
mod language;
mod score;

pub use attribute_value::AttributeValue;
pub use language::{LanguageCode, DEFAULT_LANGUAGE};
pub use score::{
    derive_extra, parse_score, score_options, ScoreOption, EMPTY_SCORE_LABEL, SCORE_OPTION_MAX,
    SCORE_OPTION_MIN,
};
