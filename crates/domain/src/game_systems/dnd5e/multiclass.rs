//! Multiclass ability prerequisites and the proficiencies multiclassing grants.

use serde::{Deserialize, Serialize};

use crate::types::{Ability, ClassName, ProficiencyType};

/// How the listed ability minimums combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementType {
    /// Every listed minimum must be met.
    All,
    /// At least one listed minimum must be met.
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityMinimum {
    pub ability: Ability,
    pub minimum: i32,
}

const fn min13(ability: Ability) -> AbilityMinimum {
    AbilityMinimum {
        ability,
        minimum: 13,
    }
}

const STR_13: AbilityMinimum = min13(Ability::Str);
const DEX_13: AbilityMinimum = min13(Ability::Dex);
const INT_13: AbilityMinimum = min13(Ability::Int);
const WIS_13: AbilityMinimum = min13(Ability::Wis);
const CHA_13: AbilityMinimum = min13(Ability::Cha);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulticlassRequirement {
    pub class: ClassName,
    pub requirements: &'static [AbilityMinimum],
    pub requirement_type: RequirementType,
}

impl MulticlassRequirement {
    /// `"STR 13 and CHA 13"` or `"STR 13 or DEX 13"`.
    pub fn description(&self) -> String {
        let separator = match self.requirement_type {
            RequirementType::All => " and ",
            RequirementType::Any => " or ",
        };
        self.requirement_labels().join(separator)
    }

    /// Each minimum as `"STR 13"`.
    pub fn requirement_labels(&self) -> Vec<String> {
        self.requirements
            .iter()
            .map(|req| format!("{} {}", req.ability.abbreviation(), req.minimum))
            .collect()
    }
}

pub fn multiclass_requirement(class: ClassName) -> MulticlassRequirement {
    use RequirementType::{All, Any};

    fn requirement(
        class: ClassName,
        requirements: &'static [AbilityMinimum],
        requirement_type: RequirementType,
    ) -> MulticlassRequirement {
        MulticlassRequirement {
            class,
            requirements,
            requirement_type,
        }
    }

    match class {
        ClassName::Barbarian => requirement(class, &[STR_13], All),
        ClassName::Bard => requirement(class, &[CHA_13], All),
        ClassName::Cleric => requirement(class, &[WIS_13], All),
        ClassName::Druid => requirement(class, &[WIS_13], All),
        ClassName::Fighter => requirement(class, &[STR_13, DEX_13], Any),
        ClassName::Monk => requirement(class, &[DEX_13, WIS_13], All),
        ClassName::Paladin => requirement(class, &[STR_13, CHA_13], All),
        ClassName::Ranger => requirement(class, &[DEX_13, WIS_13], All),
        ClassName::Rogue => requirement(class, &[DEX_13], All),
        ClassName::Sorcerer => requirement(class, &[CHA_13], All),
        ClassName::Warlock => requirement(class, &[CHA_13], All),
        ClassName::Wizard => requirement(class, &[INT_13], All),
    }
}

/// Reduced proficiency set gained when entering a class by multiclassing.
pub fn multiclass_proficiencies(class: ClassName) -> &'static [ProficiencyType] {
    use ProficiencyType::*;

    match class {
        ClassName::Barbarian => &[Shields, SimpleWeapons, MartialWeapons],
        ClassName::Bard => &[LightArmor],
        ClassName::Cleric | ClassName::Druid => &[LightArmor, MediumArmor, Shields],
        ClassName::Fighter | ClassName::Paladin | ClassName::Ranger => &[
            LightArmor,
            MediumArmor,
            Shields,
            SimpleWeapons,
            MartialWeapons,
        ],
        ClassName::Monk => &[SimpleWeapons],
        ClassName::Rogue => &[LightArmor],
        ClassName::Warlock => &[LightArmor, SimpleWeapons],
        ClassName::Sorcerer | ClassName::Wizard => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_accepts_either_ability() {
        let req = multiclass_requirement(ClassName::Fighter);
        assert_eq!(req.requirement_type, RequirementType::Any);
        assert_eq!(req.description(), "STR 13 or DEX 13");
    }

    #[test]
    fn paladin_needs_both() {
        let req = multiclass_requirement(ClassName::Paladin);
        assert_eq!(req.requirement_type, RequirementType::All);
        assert_eq!(req.description(), "STR 13 and CHA 13");
    }

    #[test]
    fn every_class_has_a_thirteen_minimum() {
        for class in ClassName::ALL {
            let req = multiclass_requirement(class);
            assert!(!req.requirements.is_empty());
            assert!(req.requirements.iter().all(|r| r.minimum == 13));
        }
    }

    #[test]
    fn multiclass_proficiency_sets() {
        assert!(multiclass_proficiencies(ClassName::Wizard).is_empty());
        assert_eq!(
            multiclass_proficiencies(ClassName::Warlock),
            &[ProficiencyType::LightArmor, ProficiencyType::SimpleWeapons]
        );
        assert!(!multiclass_proficiencies(ClassName::Fighter).contains(&ProficiencyType::HeavyArmor));
    }
}
