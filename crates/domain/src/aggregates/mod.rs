//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! | Concern | How it is enforced |
//! |---------|--------------------|
//! | Fixed-length sequences | Array types, not `Vec` |
//! | Closed key sets | Enum-indexed arrays, not maps |
//! | Derived values | Private fields set only through constructors |
//! | Domain Events | Return enums from mutations |

pub mod character;

pub use character::{Attributes, Character, STRESS_BOXES, TRAIT_COUNT};
