//! Feat entity and its prerequisite vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Ability;

/// A feat from the SRD catalog.
///
/// No catalog feat is repeatable, so there is no per-feat repeatable flag;
/// holding a feat twice is always rejected by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feat {
    /// Display name of the feat
    pub name: String,
    /// Requirements to take this feat
    #[serde(default)]
    pub prerequisites: Vec<FeatPrerequisite>,
    /// Short rules summary
    pub description: String,
}

impl Feat {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prerequisites: Vec::new(),
            description: description.into(),
        }
    }

    /// Builder-style prerequisite addition.
    #[must_use]
    pub fn requires(mut self, prerequisite: FeatPrerequisite) -> Self {
        self.prerequisites.push(prerequisite);
        self
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

/// A single requirement for taking a feat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatPrerequisite {
    /// Minimum ability score
    Ability { ability: Ability, minimum: i32 },
    /// Proficiency identifier such as `heavy-armor`
    Proficiency { proficiency: String },
    /// Ability to cast at least one spell
    Spellcasting,
    /// Specific race, matched case-insensitively
    Race { race: String },
    /// Levels in a specific class, matched case-insensitively
    Class { class: String },
    /// Minimum total character level
    Level { level: u32 },
}

impl FeatPrerequisite {
    pub fn ability(ability: Ability, minimum: i32) -> Self {
        Self::Ability { ability, minimum }
    }

    pub fn proficiency(proficiency: impl Into<String>) -> Self {
        Self::Proficiency {
            proficiency: proficiency.into(),
        }
    }
}

impl fmt::Display for FeatPrerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatPrerequisite::Ability { ability, minimum } => {
                write!(f, "{} {}", ability.abbreviation(), minimum)
            }
            FeatPrerequisite::Proficiency { proficiency } => {
                write!(f, "Proficiency with {}", proficiency.replace('-', " "))
            }
            FeatPrerequisite::Spellcasting => {
                f.write_str("The ability to cast at least one spell")
            }
            FeatPrerequisite::Race { race } => write!(f, "{} race", race),
            FeatPrerequisite::Class { class } => write!(f, "{} class", class),
            FeatPrerequisite::Level { level } => write!(f, "Level {}", level),
        }
    }
}
