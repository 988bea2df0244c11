//! Spells-known and prepared-spell limits.

use charforge_domain::codes;
use charforge_domain::{Dnd5eSystem, SpellcastingSystem, ValidationError, ValidationResult};

use super::plural;

/// Spells known at a level, or `None` for prepared casters and classes
/// without a known-spells table.
pub fn spells_known_limit(class_name: &str, level: u32) -> Option<u32> {
    Dnd5eSystem::new().spells_known(class_name, level)
}

pub fn cantrips_known_limit(class_name: &str, level: u32) -> u32 {
    Dnd5eSystem::new().cantrips_known(class_name, level)
}

/// `max(1, modifier + level)` for prepared casters (half level for
/// Paladins), 0 for everyone else.
pub fn prepared_spells_limit(class_name: &str, level: u32, ability_modifier: i32) -> u32 {
    Dnd5eSystem::new().max_prepared_spells(class_name, level, ability_modifier)
}

fn count(items: &[String]) -> u32 {
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}

pub fn validate_known_spells_limit(
    class_name: &str,
    level: u32,
    known_spells: &[String],
    known_cantrips: &[String],
) -> ValidationResult {
    let mut result = ValidationResult::builder();

    if let Some(limit) = spells_known_limit(class_name, level) {
        let known = count(known_spells);
        if known > limit {
            let excess = known - limit;
            result.push(
                ValidationError::error(
                    codes::TOO_MANY_SPELLS_KNOWN,
                    format!(
                        "You know {} spells, but a level {} {} can only know {} spells. Remove {} spell{}.",
                        known, level, class_name, limit, excess, plural(excess)
                    ),
                )
                .with_field("knownSpells")
                .with_suggestion(format!(
                    "Remove {} spell{} from your known spells",
                    excess,
                    plural(excess)
                )),
            );
        } else if known < limit {
            let remaining = limit - known;
            result.push(
                ValidationError::info(
                    codes::SPELLS_KNOWN_AVAILABLE,
                    format!("You can know {} more spell{}", remaining, plural(remaining)),
                )
                .with_field("knownSpells"),
            );
        }
    }

    let cantrip_limit = cantrips_known_limit(class_name, level);
    if cantrip_limit > 0 {
        let known = count(known_cantrips);
        if known > cantrip_limit {
            let excess = known - cantrip_limit;
            result.push(
                ValidationError::error(
                    codes::TOO_MANY_CANTRIPS_KNOWN,
                    format!(
                        "You know {} cantrips, but a level {} {} can only know {}. Remove {} cantrip{}.",
                        known, level, class_name, cantrip_limit, excess, plural(excess)
                    ),
                )
                .with_field("knownCantrips")
                .with_suggestion(format!(
                    "Remove {} cantrip{} from your known cantrips",
                    excess,
                    plural(excess)
                )),
            );
        } else if known < cantrip_limit {
            let remaining = cantrip_limit - known;
            result.push(
                ValidationError::info(
                    codes::CANTRIPS_KNOWN_AVAILABLE,
                    format!("You can know {} more cantrip{}", remaining, plural(remaining)),
                )
                .with_field("knownCantrips"),
            );
        }
    }

    result.build()
}

/// Prepared-spell count check; classes that don't prepare spells pass.
pub fn validate_prepared_spells_limit(
    class_name: &str,
    level: u32,
    ability_modifier: i32,
    prepared_spells: &[String],
) -> ValidationResult {
    if !Dnd5eSystem::new().uses_spell_preparation(class_name) {
        return ValidationResult::valid();
    }

    let limit = prepared_spells_limit(class_name, level, ability_modifier);
    let prepared = count(prepared_spells);
    let mut result = ValidationResult::builder();

    if prepared > limit {
        let excess = prepared - limit;
        result.push(
            ValidationError::error(
                codes::TOO_MANY_PREPARED_SPELLS,
                format!(
                    "You have {} spells prepared, but can only prepare {}. Unprepare {} spell{}.",
                    prepared,
                    limit,
                    excess,
                    plural(excess)
                ),
            )
            .with_field("preparedSpells")
            .with_suggestion(format!("Unprepare {} spell{}", excess, plural(excess))),
        );
    } else if prepared < limit {
        let remaining = limit - prepared;
        result.push(
            ValidationError::info(
                codes::CAN_PREPARE_MORE_SPELLS,
                format!("You can prepare {} more spell{}", remaining, plural(remaining)),
            )
            .with_field("preparedSpells"),
        );
    }

    result.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Spell {}", i)).collect()
    }

    #[test]
    fn limits_by_class() {
        assert_eq!(spells_known_limit("Bard", 1), Some(4));
        assert_eq!(spells_known_limit("sorcerer", 20), Some(15));
        assert_eq!(spells_known_limit("Ranger", 1), Some(0));
        assert_eq!(spells_known_limit("Wizard", 5), None);
        assert_eq!(spells_known_limit("Barbarian", 5), None);

        assert_eq!(cantrips_known_limit("Wizard", 1), 3);
        assert_eq!(cantrips_known_limit("Sorcerer", 10), 6);
        assert_eq!(cantrips_known_limit("Paladin", 10), 0);
    }

    #[test]
    fn prepared_limit_formula() {
        // Cleric level 5, WIS 16 (+3): 5 + 3 = 8
        assert_eq!(prepared_spells_limit("Cleric", 5, 3), 8);
        // Paladin level 5, CHA 14 (+2): 2 + 2 = 4
        assert_eq!(prepared_spells_limit("Paladin", 5, 2), 4);
        // Never below one
        assert_eq!(prepared_spells_limit("Wizard", 1, -3), 1);
        assert_eq!(prepared_spells_limit("Bard", 5, 3), 0);
    }

    #[test]
    fn too_many_spells_known() {
        let result = validate_known_spells_limit("Sorcerer", 1, &names(4), &names(4));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            result.errors()[0].message,
            "You know 4 spells, but a level 1 Sorcerer can only know 2 spells. Remove 2 spells."
        );
        assert_eq!(result.errors()[0].field.as_deref(), Some("knownSpells"));
    }

    #[test]
    fn too_many_cantrips_known() {
        let result = validate_known_spells_limit("Bard", 1, &names(4), &names(3));
        assert_eq!(result.errors()[0].code, codes::TOO_MANY_CANTRIPS_KNOWN);
        assert_eq!(
            result.errors()[0].message,
            "You know 3 cantrips, but a level 1 Bard can only know 2. Remove 1 cantrip."
        );
    }

    #[test]
    fn deficits_are_info_notes() {
        let result = validate_known_spells_limit("Bard", 3, &names(5), &names(1));
        assert!(result.is_valid());
        let messages: Vec<_> = result.warnings().iter().map(|w| w.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["You can know 1 more spell", "You can know 1 more cantrip"]
        );
    }

    #[test]
    fn prepared_casters_only_get_the_cantrip_check() {
        let result = validate_known_spells_limit("Wizard", 1, &names(10), &names(3));
        assert!(!result.has_findings());
    }

    #[test]
    fn non_casters_have_nothing_to_check() {
        assert!(!validate_known_spells_limit("Barbarian", 5, &names(2), &names(2)).has_findings());
    }

    #[test]
    fn prepared_spells_over_and_under() {
        let over = validate_prepared_spells_limit("Cleric", 1, 2, &names(5));
        assert_eq!(
            over.errors()[0].message,
            "You have 5 spells prepared, but can only prepare 3. Unprepare 2 spells."
        );

        let under = validate_prepared_spells_limit("Druid", 4, 3, &names(2));
        assert!(under.is_valid());
        assert_eq!(under.warnings()[0].message, "You can prepare 5 more spells");

        assert!(!validate_prepared_spells_limit("Warlock", 5, 3, &names(20)).has_findings());
    }
}
