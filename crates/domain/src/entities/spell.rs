//! Spell entity as seen by the rules engine.
//!
//! Only `name`, `level` and `classes` drive validation; the remaining fields
//! are carried through so callers can filter full catalog entries without
//! re-fetching them.

use serde::{Deserialize, Serialize};

/// Highest spell level in the SRD.
pub const MAX_SPELL_LEVEL: u32 = 9;

/// A spell from the reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    /// Display name of the spell
    pub name: String,
    /// Spell level; cantrips are level 0
    pub level: u32,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub casting_time: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub components: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    /// Classes whose spell list includes this spell (free text)
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub ritual: bool,
}

impl Spell {
    /// Create a spell with only the fields the validators read.
    pub fn new<I, S>(name: impl Into<String>, level: u32, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            level,
            school: String::new(),
            casting_time: String::new(),
            range: String::new(),
            components: String::new(),
            duration: String::new(),
            description: String::new(),
            classes: classes.into_iter().map(Into::into).collect(),
            ritual: false,
        }
    }

    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }

    /// Case-insensitive membership of `class_name` in the spell's class list.
    pub fn is_on_class_list(&self, class_name: &str) -> bool {
        let class_name = class_name.trim();
        self.classes
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(class_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_membership_ignores_case() {
        let spell = Spell::new("Fireball", 3, ["Sorcerer", "Wizard"]);
        assert!(spell.is_on_class_list("wizard"));
        assert!(spell.is_on_class_list("SORCERER"));
        assert!(!spell.is_on_class_list("Cleric"));
        assert!(!spell.is_cantrip());
    }

    #[test]
    fn deserializes_catalog_entry() {
        let json = r#"{
            "name": "Fire Bolt",
            "level": 0,
            "school": "Evocation",
            "castingTime": "1 action",
            "range": "120 feet",
            "components": "V, S",
            "duration": "Instantaneous",
            "description": "You hurl a mote of fire.",
            "classes": ["Sorcerer", "Wizard"]
        }"#;
        let spell: Spell = serde_json::from_str(json).unwrap();
        assert!(spell.is_cantrip());
        assert_eq!(spell.casting_time, "1 action");
        assert!(!spell.ritual);
    }
}
