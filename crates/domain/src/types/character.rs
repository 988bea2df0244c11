//! Read-only character projection consumed by the validators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ability::AbilityScores;
use super::equipment::EquipmentItem;
use crate::error::DomainError;

/// The twelve SRD base classes.
///
/// Class names arrive as free text; parsing is case-insensitive and an
/// unknown name is an ordinary lookup miss (homebrew content is legal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassName {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl ClassName {
    pub const ALL: [ClassName; 12] = [
        ClassName::Barbarian,
        ClassName::Bard,
        ClassName::Cleric,
        ClassName::Druid,
        ClassName::Fighter,
        ClassName::Monk,
        ClassName::Paladin,
        ClassName::Ranger,
        ClassName::Rogue,
        ClassName::Sorcerer,
        ClassName::Warlock,
        ClassName::Wizard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::Barbarian => "Barbarian",
            ClassName::Bard => "Bard",
            ClassName::Cleric => "Cleric",
            ClassName::Druid => "Druid",
            ClassName::Fighter => "Fighter",
            ClassName::Monk => "Monk",
            ClassName::Paladin => "Paladin",
            ClassName::Ranger => "Ranger",
            ClassName::Rogue => "Rogue",
            ClassName::Sorcerer => "Sorcerer",
            ClassName::Warlock => "Warlock",
            ClassName::Wizard => "Wizard",
        }
    }

    /// Case-insensitive lookup returning `None` on a miss.
    pub fn lookup(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ClassName::ALL
            .iter()
            .copied()
            .find(|class| class.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown class: {}", s)))
    }
}

/// How the ability scores were generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityScoreMethod {
    PointBuy,
    StandardArray,
    #[default]
    Manual,
}

impl AbilityScoreMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityScoreMethod::PointBuy => "point-buy",
            AbilityScoreMethod::StandardArray => "standard-array",
            AbilityScoreMethod::Manual => "manual",
        }
    }
}

/// Levels held in one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    /// Free-text class name as stored; may be homebrew.
    pub name: String,
    pub level: u32,
}

impl ClassLevel {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// The SRD class, if the name is one.
    pub fn class(&self) -> Option<ClassName> {
        ClassName::lookup(&self.name)
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// Snapshot of a character built by the caller right before validation.
///
/// The validators only borrow it; nothing is retained after a call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterForValidation {
    pub name: String,
    pub race: String,
    #[serde(default)]
    pub classes: Vec<ClassLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Total character level.
    pub level: u32,
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub ability_score_method: AbilityScoreMethod,
    /// Additional proficiencies from race, background, or feats.
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default)]
    pub feats: Vec<String>,
    #[serde(default)]
    pub known_spells: Vec<String>,
    #[serde(default)]
    pub equipped_items: Vec<EquipmentItem>,
    #[serde(default)]
    pub has_spellcasting: bool,
}

impl CharacterForValidation {
    /// A level-1 character with default scores and no class.
    pub fn new(name: impl Into<String>, race: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            race: race.into(),
            classes: Vec::new(),
            background: None,
            level: 1,
            ability_scores: AbilityScores::default(),
            ability_score_method: AbilityScoreMethod::Manual,
            proficiencies: Vec::new(),
            feats: Vec::new(),
            known_spells: Vec::new(),
            equipped_items: Vec::new(),
            has_spellcasting: false,
        }
    }

    /// Names of every class held, in order.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c.is(name))
    }

    pub fn is_multiclassed(&self) -> bool {
        self.classes.len() > 1
    }

    pub fn has_feat(&self, name: &str) -> bool {
        self.feats.iter().any(|f| f.eq_ignore_ascii_case(name))
    }

    pub fn has_proficiency(&self, proficiency: &str) -> bool {
        self.proficiencies
            .iter()
            .any(|p| p.eq_ignore_ascii_case(proficiency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lookup_is_case_insensitive() {
        assert_eq!(ClassName::lookup("wizard"), Some(ClassName::Wizard));
        assert_eq!(ClassName::lookup(" PALADIN "), Some(ClassName::Paladin));
        assert_eq!(ClassName::lookup("Artificer"), None);
        assert!(matches!(
            "Blood Hunter".parse::<ClassName>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn method_wire_names() {
        let method: AbilityScoreMethod = serde_json::from_str("\"point-buy\"").unwrap();
        assert_eq!(method, AbilityScoreMethod::PointBuy);
        assert_eq!(
            serde_json::to_value(AbilityScoreMethod::StandardArray).unwrap(),
            "standard-array"
        );
    }

    #[test]
    fn deserializes_with_optional_lists_missing() {
        let json = r#"{
            "name": "Tamsin",
            "race": "Elf",
            "classes": [{"name": "Wizard", "level": 3}],
            "level": 3,
            "abilityScores": {"str": 8, "dex": 14, "con": 13, "int": 15, "wis": 12, "cha": 10},
            "abilityScoreMethod": "point-buy"
        }"#;
        let character: CharacterForValidation = serde_json::from_str(json).unwrap();
        assert!(character.feats.is_empty());
        assert!(character.equipped_items.is_empty());
        assert!(!character.has_spellcasting);
        assert_eq!(character.classes[0].class(), Some(ClassName::Wizard));
    }

    #[test]
    fn membership_helpers_ignore_case() {
        let mut character = CharacterForValidation::new("Brom", "Dwarf");
        character.classes.push(ClassLevel::new("Fighter", 2));
        character.feats.push("Tough".to_string());
        character.proficiencies.push("heavy-armor".to_string());

        assert!(character.has_class("fighter"));
        assert!(character.has_feat("TOUGH"));
        assert!(character.has_proficiency("Heavy-Armor"));
        assert!(!character.is_multiclassed());
    }
}
