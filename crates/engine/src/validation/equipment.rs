//! Equipment proficiency.
//!
//! Using gear without proficiency is legal but penalized, so every finding
//! here is a warning.

use charforge_domain::codes;
use charforge_domain::dnd5e::{self, equipment_proficiency};
use charforge_domain::{
    ClassName, EquipmentItem, ItemType, ProficiencyType, ValidationError, ValidationResult,
};

/// Proficiency needed to use an item; `None` when the item needs none.
pub fn equipment_proficiency_requirement(item_name: &str) -> Option<ProficiencyType> {
    equipment_proficiency(item_name)
}

/// Full proficiency set of a class; empty for unknown classes.
pub fn class_proficiencies(class_name: &str) -> &'static [ProficiencyType] {
    ClassName::lookup(class_name)
        .map(dnd5e::class_proficiencies)
        .unwrap_or_default()
}

pub fn class_has_proficiency(class_name: &str, proficiency: ProficiencyType) -> bool {
    class_proficiencies(class_name).contains(&proficiency)
}

/// True if no proficiency is required, a class grants it, or it is in the
/// extra proficiencies from race, background, or feats.
pub fn has_proficiency_with_equipment<C, P>(
    item_name: &str,
    classes: &[C],
    additional_proficiencies: &[P],
) -> bool
where
    C: AsRef<str>,
    P: AsRef<str>,
{
    let Some(required) = equipment_proficiency_requirement(item_name) else {
        return true;
    };

    classes
        .iter()
        .any(|class| class_has_proficiency(class.as_ref(), required))
        || additional_proficiencies
            .iter()
            .any(|extra| extra.as_ref().trim().eq_ignore_ascii_case(required.as_str()))
}

pub fn unproficient_penalty(item: &EquipmentItem) -> &'static str {
    match item.item_type {
        ItemType::Armor | ItemType::Shield => {
            "Disadvantage on ability checks, saving throws, and attack rolls involving Strength or Dexterity, and you cannot cast spells"
        }
        ItemType::Weapon => "Cannot add proficiency bonus to attack rolls",
        ItemType::Equipment => "No specific penalty",
    }
}

pub fn validate_equipment_proficiency<C, P>(
    item: &EquipmentItem,
    classes: &[C],
    additional_proficiencies: &[P],
) -> ValidationResult
where
    C: AsRef<str>,
    P: AsRef<str>,
{
    if has_proficiency_with_equipment(&item.name, classes, additional_proficiencies) {
        return ValidationResult::valid();
    }

    let requirement = equipment_proficiency_requirement(&item.name)
        .map(|required| format!(" (requires {})", required.label()))
        .unwrap_or_default();

    ValidationResult::from_findings([ValidationError::warning(
        codes::EQUIPMENT_NOT_PROFICIENT,
        format!("You are not proficient with {}{}", item.name, requirement),
    )
    .with_field("equipment")
    .with_suggestion(format!("Penalty: {}", unproficient_penalty(item)))])
}

pub fn validate_all_equipped_items<C, P>(
    items: &[EquipmentItem],
    classes: &[C],
    additional_proficiencies: &[P],
) -> ValidationResult
where
    C: AsRef<str>,
    P: AsRef<str>,
{
    items
        .iter()
        .map(|item| validate_equipment_proficiency(item, classes, additional_proficiencies))
        .collect()
}
