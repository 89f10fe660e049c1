//! Shared vocabulary types used across the character sheet crates.

mod attribute;

pub use attribute::Attribute;
