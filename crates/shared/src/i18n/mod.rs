//! Localization: label bundles per language

mod builtin;
mod table;

pub use table::{
    AttributeLabels, LanguageBundle, LanguageOption, LocalizationError, LocalizationTable,
    SheetLabels,
};
