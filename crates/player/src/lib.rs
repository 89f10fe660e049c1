//! Character sheet player crate.
//!
//! The editing session a front end drives: it owns the character, applies
//! edits, tracks the label language, and produces render snapshots. Drawing
//! the sheet is left to whatever consumes [`CharacterSheetView`].

pub mod ports;
pub mod session;

pub use charsheet_shared::CharacterSheetView;
pub use ports::outbound::LocalizationPort;
pub use session::{CharacterSheetModel, SessionConfig, DEFAULT_LANGUAGE_ENV};
