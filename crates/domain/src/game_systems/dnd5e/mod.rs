//! D&D 5th Edition SRD rule tables.
//!
//! Every table is a process-wide constant (the feat catalog is built once on
//! first use). Lookups keyed by free-text names are case-insensitive; a miss
//! is an ordinary `None`, never a panic.

mod feats;
mod multiclass;
mod point_buy;
mod proficiency;
mod spellcasting;

use std::collections::BTreeMap;

pub use feats::{feat_catalog, find_feat};
pub use multiclass::{
    multiclass_proficiencies, multiclass_requirement, AbilityMinimum, MulticlassRequirement,
    RequirementType,
};
pub use point_buy::{
    is_standard_array, point_buy_cost, POINT_BUY_BUDGET, POINT_BUY_MAX_SCORE,
    POINT_BUY_MIN_SCORE, STANDARD_ARRAY,
};
pub use proficiency::{class_proficiencies, equipment_proficiency};
pub use spellcasting::{
    cantrips_known, caster_type, full_caster_slots, half_caster_slots, max_spell_level,
    pact_magic, prepared_spells_limit, slot_progression, spellcasting_ability, spells_known,
    uses_prepared_spells, PactMagic, PREPARED_SPELL_CLASSES,
};

use super::traits::{CasterType, SpellcastingSystem};
use crate::types::{Ability, ClassName};

/// D&D 5e spellcasting rules behind the string-keyed [`SpellcastingSystem`] seam.
///
/// Unknown class names answer as non-casters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dnd5eSystem;

impl Dnd5eSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SpellcastingSystem for Dnd5eSystem {
    fn caster_type(&self, class: &str) -> CasterType {
        ClassName::lookup(class).map_or(CasterType::None, caster_type)
    }

    fn spellcasting_ability(&self, class: &str) -> Option<Ability> {
        ClassName::lookup(class).and_then(spellcasting_ability)
    }

    fn uses_spell_preparation(&self, class: &str) -> bool {
        ClassName::lookup(class).is_some_and(uses_prepared_spells)
    }

    fn max_prepared_spells(&self, class: &str, level: u32, ability_modifier: i32) -> u32 {
        ClassName::lookup(class).map_or(0, |class| {
            prepared_spells_limit(class, level, ability_modifier)
        })
    }

    fn spell_slots(&self, class: &str, level: u32) -> BTreeMap<u32, u32> {
        match self.caster_type(class) {
            CasterType::Pact => pact_magic(level)
                .map(|pact| BTreeMap::from([(pact.slot_level, pact.slots)]))
                .unwrap_or_default(),
            caster => (1..)
                .zip(slot_progression(caster, level).iter().copied())
                .collect(),
        }
    }

    fn cantrips_known(&self, class: &str, level: u32) -> u32 {
        ClassName::lookup(class).map_or(0, |class| cantrips_known(class, level))
    }

    fn spells_known(&self, class: &str, level: u32) -> Option<u32> {
        ClassName::lookup(class).and_then(|class| spells_known(class, level))
    }

    fn max_spell_level(&self, class: &str, level: u32) -> u32 {
        max_spell_level(self.caster_type(class), level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_caster_spell_slots() {
        let system = Dnd5eSystem::new();

        let level1 = system.spell_slots("wizard", 1);
        assert_eq!(level1.get(&1), Some(&2));
        assert_eq!(level1.get(&2), None);

        let level5 = system.spell_slots("Wizard", 5);
        assert_eq!(level5.get(&1), Some(&4));
        assert_eq!(level5.get(&2), Some(&3));
        assert_eq!(level5.get(&3), Some(&2));

        let level20 = system.spell_slots("wizard", 20);
        assert_eq!(level20.get(&9), Some(&1));
    }

    #[test]
    fn half_caster_spell_slots() {
        let system = Dnd5eSystem::new();

        // Paladins don't get slots until level 2
        assert!(system.spell_slots("paladin", 1).is_empty());
        assert_eq!(system.spell_slots("paladin", 2).get(&1), Some(&2));
    }

    #[test]
    fn warlock_pact_slots() {
        let system = Dnd5eSystem::new();

        let level5 = system.spell_slots("warlock", 5);
        assert_eq!(level5.get(&3), Some(&2)); // 2 third-level slots
        assert_eq!(level5.len(), 1);

        let level11 = system.spell_slots("warlock", 11);
        assert_eq!(level11.get(&5), Some(&3)); // 3 fifth-level slots
    }

    #[test]
    fn max_spell_level_boundaries() {
        let system = Dnd5eSystem::new();
        assert_eq!(system.max_spell_level("Paladin", 1), 0);
        assert_eq!(system.max_spell_level("Paladin", 2), 1);
        assert_eq!(system.max_spell_level("Warlock", 5), 3);
        assert_eq!(system.max_spell_level("Barbarian", 20), 0);
    }

    #[test]
    fn unknown_class_is_a_non_caster() {
        let system = Dnd5eSystem::new();
        assert_eq!(system.caster_type("Artificer"), CasterType::None);
        assert!(system.spell_slots("Artificer", 5).is_empty());
        assert_eq!(system.spells_known("Artificer", 5), None);
        assert_eq!(system.cantrips_known("Artificer", 5), 0);
        assert_eq!(system.max_prepared_spells("Artificer", 5, 3), 0);
    }

    #[test]
    fn preparation_by_class() {
        let system = Dnd5eSystem::new();
        assert!(system.uses_spell_preparation("cleric"));
        assert!(!system.uses_spell_preparation("sorcerer"));
        // Wizard level 5, INT 16 (+3): 5 + 3 = 8
        assert_eq!(system.max_prepared_spells("wizard", 5, 3), 8);
        assert_eq!(system.spellcasting_ability("Cleric"), Some(Ability::Wis));
        assert_eq!(system.spellcasting_ability("Monk"), None);
    }
}
