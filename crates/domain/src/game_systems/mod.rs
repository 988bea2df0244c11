//! Game system implementations.
//!
//! Only D&D 5th Edition SRD rules are modeled. Each system implements the
//! traits defined in `traits.rs`; the rule tables themselves live in the
//! system's module as process-wide constants.

pub mod dnd5e;
mod traits;

pub use dnd5e::Dnd5eSystem;
pub use traits::{CasterType, SpellcastingSystem};
