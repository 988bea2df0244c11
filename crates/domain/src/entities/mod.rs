//! Reference entities loaded from the SRD catalog.

mod feat;
mod spell;

pub use feat::{Feat, FeatPrerequisite};
pub use spell::{Spell, MAX_SPELL_LEVEL};
