//! Equipment and proficiency categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Category of training required to use a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProficiencyType {
    LightArmor,
    MediumArmor,
    HeavyArmor,
    Shields,
    SimpleWeapons,
    MartialWeapons,
    SpecificWeapon,
}

impl ProficiencyType {
    /// Wire identifier (`"heavy-armor"`), as stored in a character's proficiency list.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyType::LightArmor => "light-armor",
            ProficiencyType::MediumArmor => "medium-armor",
            ProficiencyType::HeavyArmor => "heavy-armor",
            ProficiencyType::Shields => "shields",
            ProficiencyType::SimpleWeapons => "simple-weapons",
            ProficiencyType::MartialWeapons => "martial-weapons",
            ProficiencyType::SpecificWeapon => "specific-weapon",
        }
    }

    /// Prose form (`"heavy armor"`).
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for ProficiencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light-armor" => Ok(ProficiencyType::LightArmor),
            "medium-armor" => Ok(ProficiencyType::MediumArmor),
            "heavy-armor" => Ok(ProficiencyType::HeavyArmor),
            "shields" => Ok(ProficiencyType::Shields),
            "simple-weapons" => Ok(ProficiencyType::SimpleWeapons),
            "martial-weapons" => Ok(ProficiencyType::MartialWeapons),
            "specific-weapon" => Ok(ProficiencyType::SpecificWeapon),
            _ => Err(DomainError::parse(format!("Unknown proficiency type: {}", s))),
        }
    }
}

/// Broad kind of an equipped item; drives the non-proficiency penalty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Shield,
    Equipment,
}

/// An item as the validators see it.
///
/// The proficiency requirement is not stored here; it is looked up by name
/// in the equipment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
}

impl EquipmentItem {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            weight: None,
            armor_class: None,
            damage: None,
        }
    }

    pub fn weapon(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Weapon)
    }

    pub fn armor(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Armor)
    }

    pub fn shield(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Shield)
    }
}
