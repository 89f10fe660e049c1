//! Editing session for one character sheet

mod config;
mod model;

pub use config::{SessionConfig, DEFAULT_LANGUAGE_ENV};
pub use model::CharacterSheetModel;
