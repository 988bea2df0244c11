//! Multiclass prerequisites.
//!
//! Entering a new class requires meeting its ability minimums, and so does
//! leaving every class already held.

use charforge_domain::codes;
use charforge_domain::dnd5e::{self, MulticlassRequirement, RequirementType};
use charforge_domain::{AbilityScores, ClassName, ProficiencyType, ValidationError, ValidationResult};

/// Case-insensitive requirement lookup.
pub fn multiclass_prerequisite(class_name: &str) -> Option<MulticlassRequirement> {
    ClassName::lookup(class_name).map(dnd5e::multiclass_requirement)
}

/// Check one class's prerequisites against the scores.
///
/// Unknown classes produce a warning only, since they may be homebrew.
pub fn check_multiclass_prerequisites(class_name: &str, scores: &AbilityScores) -> ValidationResult {
    let Some(prerequisite) = multiclass_prerequisite(class_name) else {
        tracing::debug!(class = class_name, "No multiclass prerequisites for class");
        return ValidationResult::from_findings([ValidationError::warning(
            codes::MULTICLASS_UNKNOWN_CLASS,
            format!(
                "Unknown class \"{}\" - cannot validate multiclass prerequisites",
                class_name
            ),
        )
        .with_field("class")]);
    };

    let mut result = ValidationResult::builder();

    match prerequisite.requirement_type {
        RequirementType::All => {
            for req in prerequisite.requirements {
                let score = scores.get(req.ability);
                if score < req.minimum {
                    let abbr = req.ability.abbreviation();
                    result.push(
                        ValidationError::error(
                            codes::MULTICLASS_PREREQ_NOT_MET,
                            format!(
                                "Multiclassing into {} requires {} {} or higher. Your {} is {}.",
                                class_name, abbr, req.minimum, abbr, score
                            ),
                        )
                        .with_field(req.ability.field_path())
                        .with_suggestion(format!("Increase {} to at least {}", abbr, req.minimum)),
                    );
                }
            }
        }
        RequirementType::Any => {
            let meets_any = prerequisite
                .requirements
                .iter()
                .any(|req| scores.get(req.ability) >= req.minimum);

            if !meets_any {
                let alternatives = prerequisite.requirement_labels().join(" or ");
                result.push(
                    ValidationError::error(
                        codes::MULTICLASS_PREREQ_NOT_MET,
                        format!(
                            "Multiclassing into {} requires one of: {}. None of these are met.",
                            class_name, alternatives
                        ),
                    )
                    .with_field("abilityScores")
                    .with_suggestion(format!(
                        "Increase one of {} to meet the requirement",
                        alternatives
                    )),
                );
            }
        }
    }

    result.build()
}

/// Whether a character holding `current_classes` may add `target_class`.
///
/// Errors from a held class are prefixed with "To multiclass out of ...".
pub fn can_multiclass<S: AsRef<str>>(
    current_classes: &[S],
    target_class: &str,
    scores: &AbilityScores,
) -> ValidationResult {
    let mut result = ValidationResult::builder();

    for current in current_classes {
        let current = current.as_ref();
        let (errors, warnings) = check_multiclass_prerequisites(current, scores).into_parts();
        let prefix = format!("To multiclass out of {}", current);
        result.extend(errors.into_iter().map(|error| error.prefixed(&prefix)));
        result.extend(warnings);
    }

    result.absorb(check_multiclass_prerequisites(target_class, scores));
    result.build()
}

/// `"STR 13 and CHA 13"`, `"STR 13 or DEX 13"`, or a placeholder for
/// unknown classes.
pub fn multiclass_prerequisite_description(class_name: &str) -> String {
    multiclass_prerequisite(class_name)
        .map(|prerequisite| prerequisite.description())
        .unwrap_or_else(|| "Unknown class prerequisites".to_string())
}

/// Proficiencies gained by multiclassing into a class; empty when unknown.
pub fn multiclass_proficiencies(class_name: &str) -> &'static [ProficiencyType] {
    ClassName::lookup(class_name)
        .map(dnd5e::multiclass_proficiencies)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use charforge_domain::Ability;

    fn scores(str: i32, dex: i32, wis: i32, cha: i32) -> AbilityScores {
        AbilityScores::new(str, dex, 10, 10, wis, cha)
    }

    #[test]
    fn fighter_accepts_either_strength_or_dexterity() {
        assert!(check_multiclass_prerequisites("Fighter", &scores(14, 8, 10, 10)).is_valid());
        assert!(check_multiclass_prerequisites("Fighter", &scores(8, 14, 10, 10)).is_valid());

        let result = check_multiclass_prerequisites("Fighter", &scores(8, 8, 10, 10));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].message,
            "Multiclassing into Fighter requires one of: STR 13 or DEX 13. None of these are met."
        );
        assert_eq!(result.errors()[0].field.as_deref(), Some("abilityScores"));
    }

    #[test]
    fn monk_needs_both_abilities() {
        let result = check_multiclass_prerequisites("Monk", &scores(10, 14, 8, 10));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].message,
            "Multiclassing into Monk requires WIS 13 or higher. Your WIS is 8."
        );
        assert_eq!(result.errors()[0].field, Some(Ability::Wis.field_path()));

        assert!(check_multiclass_prerequisites("Monk", &scores(10, 14, 14, 10)).is_valid());
    }

    #[test]
    fn paladin_reports_each_unmet_ability() {
        let result = check_multiclass_prerequisites("paladin", &scores(8, 10, 10, 8));
        assert_eq!(result.errors().len(), 2);
        // Message keeps the caller's spelling
        assert!(result.errors()[0].message.starts_with("Multiclassing into paladin"));
    }

    #[test]
    fn exactly_thirteen_passes() {
        let at_minimum = AbilityScores::default().with(Ability::Int, 13);
        assert!(check_multiclass_prerequisites("Wizard", &at_minimum).is_valid());
    }

    #[test]
    fn unknown_class_is_only_a_warning() {
        let result = check_multiclass_prerequisites("Artificer", &AbilityScores::uniform(3));
        assert!(result.is_valid());
        assert_eq!(result.warnings()[0].code, codes::MULTICLASS_UNKNOWN_CLASS);
        assert_eq!(
            result.warnings()[0].message,
            "Unknown class \"Artificer\" - cannot validate multiclass prerequisites"
        );
    }

    #[test]
    fn leaving_a_class_requires_its_prerequisites_too() {
        // Wizard with INT 10 tries to pick up Rogue
        let character = AbilityScores::default().with(Ability::Dex, 14);
        let result = can_multiclass(&["Wizard"], "Rogue", &character);

        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].message,
            "To multiclass out of Wizard: Multiclassing into Wizard requires INT 13 or higher. Your INT is 10."
        );
    }

    #[test]
    fn target_and_source_findings_are_combined() {
        let result = can_multiclass(&["Homebrew".to_string()], "Sorcerer", &AbilityScores::default());
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].message.starts_with("Multiclassing into Sorcerer"));
    }

    #[test]
    fn descriptions() {
        assert_eq!(multiclass_prerequisite_description("Paladin"), "STR 13 and CHA 13");
        assert_eq!(multiclass_prerequisite_description("fighter"), "STR 13 or DEX 13");
        assert_eq!(
            multiclass_prerequisite_description("Mystic"),
            "Unknown class prerequisites"
        );
    }

    #[test]
    fn proficiencies_gained() {
        assert_eq!(multiclass_proficiencies("Rogue"), &[ProficiencyType::LightArmor]);
        assert!(multiclass_proficiencies("Mystic").is_empty());
    }
}
