//! The six D&D ability scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the six abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];

    /// Short lowercase key used on the wire (`"str"`).
    pub fn key(&self) -> &'static str {
        match self {
            Ability::Str => "str",
            Ability::Dex => "dex",
            Ability::Con => "con",
            Ability::Int => "int",
            Ability::Wis => "wis",
            Ability::Cha => "cha",
        }
    }

    /// Uppercase abbreviation used in messages (`"STR"`).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Str => "STR",
            Ability::Dex => "DEX",
            Ability::Con => "CON",
            Ability::Int => "INT",
            Ability::Wis => "WIS",
            Ability::Cha => "CHA",
        }
    }

    /// Dotted field path used to group validation output (`"abilityScores.str"`).
    pub fn field_path(&self) -> String {
        format!("abilityScores.{}", self.key())
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "str" | "strength" => Ok(Ability::Str),
            "dex" | "dexterity" => Ok(Ability::Dex),
            "con" | "constitution" => Ok(Ability::Con),
            "int" | "intelligence" => Ok(Ability::Int),
            "wis" | "wisdom" => Ok(Ability::Wis),
            "cha" | "charisma" => Ok(Ability::Cha),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}

/// A full set of ability scores.
///
/// Scores are plain integers; range checks belong to the validators, which
/// apply different bounds depending on the rule being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl AbilityScores {
    pub fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            str,
            dex,
            con,
            int,
            wis,
            cha,
        }
    }

    /// Every ability set to the same score.
    pub fn uniform(score: i32) -> Self {
        Self::new(score, score, score, score, score, score)
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.str,
            Ability::Dex => self.dex,
            Ability::Con => self.con,
            Ability::Int => self.int,
            Ability::Wis => self.wis,
            Ability::Cha => self.cha,
        }
    }

    /// Copy of these scores with one ability replaced.
    #[must_use]
    pub fn with(mut self, ability: Ability, score: i32) -> Self {
        match ability {
            Ability::Str => self.str = score,
            Ability::Dex => self.dex = score,
            Ability::Con => self.con = score,
            Ability::Int => self.int = score,
            Ability::Wis => self.wis = score,
            Ability::Cha => self.cha = score,
        }
        self
    }

    /// Iterate `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.iter().map(move |&a| (a, self.get(a)))
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }
}

/// Ability modifier for a score: floor((score - 10) / 2).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Render a modifier with an explicit sign (`+2`, `-1`, `+0`).
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}
