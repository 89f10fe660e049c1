//! Port traits for the player crate

pub mod outbound;
