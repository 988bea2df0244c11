//! Spell list filtering and spell selection checks.

use std::collections::BTreeMap;

use serde::Serialize;

use charforge_domain::codes;
use charforge_domain::dnd5e::caster_type;
use charforge_domain::{
    CasterType, ClassName, Dnd5eSystem, Spell, SpellcastingSystem, ValidationError,
    ValidationResult, MAX_SPELL_LEVEL,
};

/// Cantrips plus leveled spells bucketed by spell level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSpells<'a> {
    pub cantrips: Vec<&'a Spell>,
    /// Only levels with at least one spell are present.
    pub spells_by_level: BTreeMap<u32, Vec<&'a Spell>>,
}

/// Everything a spell picker needs for one class at one level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellOptions<'a> {
    pub max_spell_level: u32,
    pub available_spells: Vec<&'a Spell>,
    pub cantrips: Vec<&'a Spell>,
    /// Every level 1-9 is present, possibly empty.
    pub spells_by_level: BTreeMap<u32, Vec<&'a Spell>>,
}

/// Highest spell level the class can cast at a class level; 0 for
/// non-casters and unknown classes.
pub fn max_spell_level(class_name: &str, level: u32) -> u32 {
    Dnd5eSystem::new().max_spell_level(class_name, level)
}

pub fn can_class_cast_spell(class_name: &str, spell: &Spell) -> bool {
    spell.is_on_class_list(class_name)
}

/// Spells on the class list that the class can currently cast. Cantrips
/// only need to be on the list.
pub fn filter_spells_by_class_and_level<'a>(
    spells: &'a [Spell],
    class_name: &str,
    level: u32,
) -> Vec<&'a Spell> {
    let max_level = max_spell_level(class_name, level);
    spells
        .iter()
        .filter(|spell| {
            can_class_cast_spell(class_name, spell)
                && (spell.is_cantrip() || spell.level <= max_level)
        })
        .collect()
}

/// Check a single spell choice. Every applicable problem is reported.
pub fn validate_spell_selection(spell: &Spell, class_name: &str, level: u32) -> ValidationResult {
    let mut result = ValidationResult::builder();

    if !can_class_cast_spell(class_name, spell) {
        result.push(
            ValidationError::error(
                codes::SPELL_NOT_ON_CLASS_LIST,
                format!("{} is not on the {} spell list", spell.name, class_name),
            )
            .with_field("spells")
            .with_suggestion(format!(
                "{} is available to: {}",
                spell.name,
                spell.classes.join(", ")
            )),
        );
    }

    let max_level = max_spell_level(class_name, level);
    if spell.level > 0 && spell.level > max_level {
        result.push(
            ValidationError::error(
                codes::SPELL_LEVEL_TOO_HIGH,
                format!(
                    "Cannot cast {} (level {}). Maximum spell level at level {} is {}",
                    spell.name, spell.level, level, max_level
                ),
            )
            .with_field("spells")
            .with_suggestion(format!(
                "You need to be a higher level {} to cast this spell",
                class_name
            )),
        );
    }

    // Only a known non-caster; unknown classes already fail the checks above
    let known_non_caster =
        ClassName::lookup(class_name).map(caster_type) == Some(CasterType::None);
    if known_non_caster && spell.level > 0 {
        result.push(
            ValidationError::error(
                codes::CLASS_CANNOT_CAST_SPELLS,
                format!("{} cannot cast spells", class_name),
            )
            .with_field("class")
            .with_suggestion("Consider a spellcasting class like Wizard, Cleric, or Bard"),
        );
    }

    result.build()
}

pub fn available_spells<'a>(spells: &'a [Spell], class_name: &str, level: u32) -> AvailableSpells<'a> {
    let filtered = filter_spells_by_class_and_level(spells, class_name, level);

    let mut cantrips = Vec::new();
    let mut spells_by_level: BTreeMap<u32, Vec<&Spell>> = BTreeMap::new();
    for spell in filtered {
        if spell.is_cantrip() {
            cantrips.push(spell);
        } else if spell.level <= MAX_SPELL_LEVEL {
            spells_by_level.entry(spell.level).or_default().push(spell);
        }
    }

    AvailableSpells {
        cantrips,
        spells_by_level,
    }
}

pub fn spell_options<'a>(class_name: &str, level: u32, spells: &'a [Spell]) -> SpellOptions<'a> {
    let available_spells = filter_spells_by_class_and_level(spells, class_name, level);
    let cantrips = available_spells
        .iter()
        .copied()
        .filter(|spell| spell.is_cantrip())
        .collect();
    let spells_by_level = (1..=MAX_SPELL_LEVEL)
        .map(|spell_level| {
            let bucket = available_spells
                .iter()
                .copied()
                .filter(|spell| spell.level == spell_level)
                .collect::<Vec<_>>();
            (spell_level, bucket)
        })
        .collect();

    SpellOptions {
        max_spell_level: max_spell_level(class_name, level),
        available_spells,
        cantrips,
        spells_by_level,
    }
}
