//! Spell slot, spells-known and cantrip progressions.

use crate::game_systems::CasterType;
use crate::types::{Ability, ClassName};

// Spell slot progression tables, indexed by class level - 1.
// Entry i of a row is the slot count for spell level i + 1.

const FULL_CASTER_SLOTS: [&[u32]; 20] = [
    &[2],
    &[3],
    &[4, 2],
    &[4, 3],
    &[4, 3, 2],
    &[4, 3, 3],
    &[4, 3, 3, 1],
    &[4, 3, 3, 2],
    &[4, 3, 3, 3, 1],
    &[4, 3, 3, 3, 2],
    &[4, 3, 3, 3, 2, 1],
    &[4, 3, 3, 3, 2, 1],
    &[4, 3, 3, 3, 2, 1, 1],
    &[4, 3, 3, 3, 2, 1, 1],
    &[4, 3, 3, 3, 2, 1, 1, 1],
    &[4, 3, 3, 3, 2, 1, 1, 1],
    &[4, 3, 3, 3, 2, 1, 1, 1, 1],
    &[4, 3, 3, 3, 3, 1, 1, 1, 1],
    &[4, 3, 3, 3, 3, 2, 1, 1, 1],
    &[4, 3, 3, 3, 3, 2, 2, 1, 1],
];

// Half casters get no slots until level 2
const HALF_CASTER_SLOTS: [&[u32]; 20] = [
    &[],
    &[2],
    &[3],
    &[3],
    &[4, 2],
    &[4, 2],
    &[4, 3],
    &[4, 3],
    &[4, 3, 2],
    &[4, 3, 2],
    &[4, 3, 3],
    &[4, 3, 3],
    &[4, 3, 3, 1],
    &[4, 3, 3, 1],
    &[4, 3, 3, 2],
    &[4, 3, 3, 2],
    &[4, 3, 3, 3, 1],
    &[4, 3, 3, 3, 1],
    &[4, 3, 3, 3, 2],
    &[4, 3, 3, 3, 2],
];

/// Warlock pact magic: every slot is cast at the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PactMagic {
    pub slots: u32,
    pub slot_level: u32,
}

// Spells known tables (level 1 = index 0)
const BARD_SPELLS_KNOWN: [u32; 20] = [
    4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15, 15, 16, 18, 19, 19, 20, 22, 22, 22,
];

const RANGER_SPELLS_KNOWN: [u32; 20] = [
    0, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11,
];

const SORCERER_SPELLS_KNOWN: [u32; 20] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15, 15,
];

const WARLOCK_SPELLS_KNOWN: [u32; 20] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15,
];

/// Classes that prepare spells daily instead of tracking spells known.
pub const PREPARED_SPELL_CLASSES: [ClassName; 4] = [
    ClassName::Cleric,
    ClassName::Druid,
    ClassName::Paladin,
    ClassName::Wizard,
];

fn row<T: Copy>(table: &[T; 20], level: u32) -> Option<T> {
    let index = usize::try_from(level).ok()?.checked_sub(1)?;
    table.get(index).copied()
}

pub fn caster_type(class: ClassName) -> CasterType {
    match class {
        ClassName::Bard
        | ClassName::Cleric
        | ClassName::Druid
        | ClassName::Sorcerer
        | ClassName::Wizard => CasterType::Full,
        ClassName::Paladin | ClassName::Ranger => CasterType::Half,
        ClassName::Warlock => CasterType::Pact,
        // Eldritch Knight / Arcane Trickster subclasses
        ClassName::Fighter | ClassName::Rogue => CasterType::Third,
        ClassName::Barbarian | ClassName::Monk => CasterType::None,
    }
}

pub fn spellcasting_ability(class: ClassName) -> Option<Ability> {
    match class {
        ClassName::Wizard | ClassName::Fighter | ClassName::Rogue => Some(Ability::Int),
        ClassName::Cleric | ClassName::Druid | ClassName::Ranger => Some(Ability::Wis),
        ClassName::Bard | ClassName::Paladin | ClassName::Sorcerer | ClassName::Warlock => {
            Some(Ability::Cha)
        }
        ClassName::Barbarian | ClassName::Monk => None,
    }
}

pub fn full_caster_slots(level: u32) -> &'static [u32] {
    row(&FULL_CASTER_SLOTS, level).unwrap_or_default()
}

pub fn half_caster_slots(level: u32) -> &'static [u32] {
    row(&HALF_CASTER_SLOTS, level).unwrap_or_default()
}

pub fn pact_magic(level: u32) -> Option<PactMagic> {
    let (slots, slot_level) = match level {
        1 => (1, 1),
        2 => (2, 1),
        3..=4 => (2, 2),
        5..=6 => (2, 3),
        7..=8 => (2, 4),
        9..=10 => (2, 5),
        11..=16 => (3, 5),
        17..=20 => (4, 5),
        _ => return None,
    };
    Some(PactMagic { slots, slot_level })
}

/// Slot row for a caster archetype at a class level.
///
/// Third casters reuse the half-caster table at `ceil(level / 3) * 2`, an
/// approximation of the Eldritch Knight / Arcane Trickster tables. Pact
/// casters have no row; see [`pact_magic`].
pub fn slot_progression(caster_type: CasterType, level: u32) -> &'static [u32] {
    match caster_type {
        CasterType::Full => full_caster_slots(level),
        CasterType::Half => half_caster_slots(level),
        CasterType::Third => half_caster_slots(CasterType::third_caster_table_level(level)),
        CasterType::Pact | CasterType::None => &[],
    }
}

/// Highest castable spell level, derived from the number of slot entries.
pub fn max_spell_level(caster_type: CasterType, level: u32) -> u32 {
    match caster_type {
        CasterType::None => 0,
        CasterType::Pact => pact_magic(level).map_or(0, |pact| pact.slot_level),
        _ => u32::try_from(slot_progression(caster_type, level).len()).unwrap_or(0),
    }
}

/// Spells known, or `None` for prepared casters and classes without a table.
pub fn spells_known(class: ClassName, level: u32) -> Option<u32> {
    let table = match class {
        ClassName::Bard => &BARD_SPELLS_KNOWN,
        ClassName::Ranger => &RANGER_SPELLS_KNOWN,
        ClassName::Sorcerer => &SORCERER_SPELLS_KNOWN,
        ClassName::Warlock => &WARLOCK_SPELLS_KNOWN,
        _ => return None,
    };
    Some(row(table, level).unwrap_or(0))
}

pub fn cantrips_known(class: ClassName, level: u32) -> u32 {
    let (low, mid, high) = match class {
        ClassName::Bard | ClassName::Druid | ClassName::Warlock => (2, 3, 4),
        ClassName::Cleric | ClassName::Wizard => (3, 4, 5),
        ClassName::Sorcerer => (4, 5, 6),
        _ => return 0,
    };
    match level {
        1..=3 => low,
        4..=9 => mid,
        10..=20 => high,
        _ => 0,
    }
}

pub fn uses_prepared_spells(class: ClassName) -> bool {
    PREPARED_SPELL_CLASSES.contains(&class)
}

/// `max(1, modifier + level)`, using half the level for half casters.
/// Classes that do not prepare spells get 0.
pub fn prepared_spells_limit(class: ClassName, level: u32, ability_modifier: i32) -> u32 {
    if !uses_prepared_spells(class) {
        return 0;
    }
    let effective_level = match caster_type(class) {
        CasterType::Half => level / 2,
        _ => level,
    };
    let effective_level = i32::try_from(effective_level).unwrap_or(i32::MAX);
    let limit = ability_modifier.saturating_add(effective_level).max(1);
    u32::try_from(limit).unwrap_or(1)
}
