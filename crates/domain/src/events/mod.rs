//! Domain events and commands for character sheet edits

mod character_events;

pub use character_events::{FieldUpdate, SheetChange, SheetCommand};
