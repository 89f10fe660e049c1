//! Character sheet shared types
//!
//! Types that sit between the editing session and whatever renders it:
//! - The localization table and its label bundles
//! - The sheet snapshot handed to the presentation layer
//!
//! # Design Principles
//!
//! 1. **No editing logic** - edits go through the domain model
//! 2. **Read-only tables** - a localization table never changes once built
//! 3. **Serde everywhere** - every type here crosses to a front end

pub mod character_sheet;
pub mod i18n;

pub use character_sheet::CharacterSheetView;
pub use i18n::{
    AttributeLabels, LanguageBundle, LanguageOption, LocalizationError, LocalizationTable,
    SheetLabels,
};
