//! Armor and weapon proficiency tables.

use crate::types::{ClassName, ProficiencyType};

use ProficiencyType::*;

const EQUIPMENT_PROFICIENCY: &[(&str, ProficiencyType)] = &[
    // Light armor
    ("Padded", LightArmor),
    ("Leather", LightArmor),
    ("Studded Leather", LightArmor),
    // Medium armor
    ("Hide", MediumArmor),
    ("Chain Shirt", MediumArmor),
    ("Scale Mail", MediumArmor),
    ("Breastplate", MediumArmor),
    ("Half Plate", MediumArmor),
    // Heavy armor
    ("Ring Mail", HeavyArmor),
    ("Chain Mail", HeavyArmor),
    ("Splint", HeavyArmor),
    ("Plate", HeavyArmor),
    // Shields
    ("Shield", Shields),
    // Simple weapons
    ("Club", SimpleWeapons),
    ("Dagger", SimpleWeapons),
    ("Greatclub", SimpleWeapons),
    ("Handaxe", SimpleWeapons),
    ("Javelin", SimpleWeapons),
    ("Light Hammer", SimpleWeapons),
    ("Mace", SimpleWeapons),
    ("Quarterstaff", SimpleWeapons),
    ("Sickle", SimpleWeapons),
    ("Spear", SimpleWeapons),
    ("Light Crossbow", SimpleWeapons),
    ("Dart", SimpleWeapons),
    ("Shortbow", SimpleWeapons),
    ("Sling", SimpleWeapons),
    // Martial weapons
    ("Battleaxe", MartialWeapons),
    ("Flail", MartialWeapons),
    ("Glaive", MartialWeapons),
    ("Greataxe", MartialWeapons),
    ("Greatsword", MartialWeapons),
    ("Halberd", MartialWeapons),
    ("Lance", MartialWeapons),
    ("Longsword", MartialWeapons),
    ("Maul", MartialWeapons),
    ("Morningstar", MartialWeapons),
    ("Pike", MartialWeapons),
    ("Rapier", MartialWeapons),
    ("Scimitar", MartialWeapons),
    ("Shortsword", MartialWeapons),
    ("Trident", MartialWeapons),
    ("War Pick", MartialWeapons),
    ("Warhammer", MartialWeapons),
    ("Whip", MartialWeapons),
    ("Blowgun", MartialWeapons),
    ("Hand Crossbow", MartialWeapons),
    ("Heavy Crossbow", MartialWeapons),
    ("Longbow", MartialWeapons),
    ("Net", MartialWeapons),
];

/// Proficiency needed to use an item, looked up by name (case-insensitive).
/// Items outside the table need no proficiency.
pub fn equipment_proficiency(item_name: &str) -> Option<ProficiencyType> {
    let item_name = item_name.trim();
    EQUIPMENT_PROFICIENCY
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(item_name))
        .map(|&(_, proficiency)| proficiency)
}

/// Full proficiency set granted when a class is taken at level 1.
pub fn class_proficiencies(class: ClassName) -> &'static [ProficiencyType] {
    match class {
        ClassName::Barbarian | ClassName::Ranger => &[
            LightArmor,
            MediumArmor,
            Shields,
            SimpleWeapons,
            MartialWeapons,
        ],
        ClassName::Bard | ClassName::Rogue | ClassName::Warlock => &[LightArmor, SimpleWeapons],
        ClassName::Cleric | ClassName::Druid => {
            &[LightArmor, MediumArmor, Shields, SimpleWeapons]
        }
        ClassName::Fighter | ClassName::Paladin => &[
            LightArmor,
            MediumArmor,
            HeavyArmor,
            Shields,
            SimpleWeapons,
            MartialWeapons,
        ],
        ClassName::Monk | ClassName::Sorcerer | ClassName::Wizard => &[SimpleWeapons],
    }
}
