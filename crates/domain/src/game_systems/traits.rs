//! Game system traits for spellcasting mechanics.
//!
//! Class names arrive as free text. Implementations resolve them
//! case-insensitively and answer with the non-caster defaults on a miss
//! rather than failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Ability;

/// For systems with spellcasting.
pub trait SpellcastingSystem: Send + Sync {
    /// Get the caster archetype for a class.
    fn caster_type(&self, class: &str) -> CasterType;

    /// Get the spellcasting ability for a class.
    fn spellcasting_ability(&self, class: &str) -> Option<Ability>;

    /// Whether this class prepares spells from its whole list each day.
    fn uses_spell_preparation(&self, class: &str) -> bool;

    /// Maximum prepared spells; 0 for classes that do not prepare.
    fn max_prepared_spells(&self, class: &str, level: u32, ability_modifier: i32) -> u32;

    /// Spell slots keyed by spell level.
    fn spell_slots(&self, class: &str, level: u32) -> BTreeMap<u32, u32>;

    /// Cantrips known for a class at a given level.
    fn cantrips_known(&self, class: &str, level: u32) -> u32;

    /// Spells known for a class at a given level (for known-spell casters).
    fn spells_known(&self, class: &str, level: u32) -> Option<u32>;

    /// Highest spell level castable at a given class level; 0 for non-casters.
    fn max_spell_level(&self, class: &str, level: u32) -> u32;
}

/// Type of spellcaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasterType {
    /// Full caster (Wizard, Cleric, Druid, Sorcerer, Bard)
    Full,
    /// Half caster (Paladin, Ranger)
    Half,
    /// Third caster (Eldritch Knight, Arcane Trickster)
    Third,
    /// Pact magic (Warlock)
    Pact,
    /// No spellcasting
    None,
}

impl CasterType {
    pub fn is_caster(&self) -> bool {
        !matches!(self, CasterType::None)
    }

    /// Level used to index the half-caster table when approximating a
    /// third caster: `ceil(level / 3) * 2`.
    pub fn third_caster_table_level(class_level: u32) -> u32 {
        class_level.div_ceil(3) * 2
    }
}
