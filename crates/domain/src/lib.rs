//! Charforge domain: the D&D 5e SRD data model and rule tables.
//!
//! Everything here is pure data and lookup. The validators that turn these
//! tables into findings live in `charforge-engine`.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod types;

pub use entities::{Feat, FeatPrerequisite, Spell, MAX_SPELL_LEVEL};
pub use error::DomainError;

pub use game_systems::{dnd5e, CasterType, Dnd5eSystem, SpellcastingSystem};

pub use types::{
    ability_modifier, codes, format_modifier, Ability, AbilityScoreMethod, AbilityScores,
    CharacterForValidation, ClassLevel, ClassName, EquipmentItem, ItemType, ProficiencyType,
    Severity, ValidationError, ValidationResult, ValidationResultBuilder,
};
