//! Ability score bounds, independent of how the scores were generated.

use charforge_domain::codes;
use charforge_domain::dnd5e::AbilityMinimum;
use charforge_domain::{Ability, AbilityScores, ValidationError, ValidationResult};

use crate::config::AbilityScoreLimits;

/// Validate one score against the SRD bounds.
pub fn validate_ability_score(ability: Ability, value: i32) -> ValidationResult {
    validate_ability_score_with(&AbilityScoreLimits::default(), ability, value)
}

/// Validate one score against configured bounds.
pub fn validate_ability_score_with(
    limits: &AbilityScoreLimits,
    ability: Ability,
    value: i32,
) -> ValidationResult {
    ValidationResult::from_findings(score_findings(limits, ability, f64::from(value)))
}

/// Validate a raw, possibly non-integer value as received from a form.
///
/// Non-numeric and fractional values produce `ABILITY_SCORE_NOT_INTEGER`;
/// numeric values are still bounds-checked.
pub fn validate_ability_score_value(
    limits: &AbilityScoreLimits,
    ability: Ability,
    value: &serde_json::Value,
) -> ValidationResult {
    match value.as_f64() {
        Some(number) => ValidationResult::from_findings(score_findings(limits, ability, number)),
        None => ValidationResult::from_findings([not_integer(ability)]),
    }
}

pub fn validate_all_ability_scores(scores: &AbilityScores) -> ValidationResult {
    validate_all_ability_scores_with(&AbilityScoreLimits::default(), scores)
}

pub fn validate_all_ability_scores_with(
    limits: &AbilityScoreLimits,
    scores: &AbilityScores,
) -> ValidationResult {
    scores
        .iter()
        .map(|(ability, value)| validate_ability_score_with(limits, ability, value))
        .collect()
}

pub fn meets_ability_minimum(scores: &AbilityScores, ability: Ability, minimum: i32) -> bool {
    scores.get(ability) >= minimum
}

/// Per-ability shortfall report for a prospective class.
///
/// Each unmet minimum is an error naming how many points are missing; a
/// score sitting exactly on the minimum is reported as an info note.
pub fn validate_ability_scores_for_multiclass(
    scores: &AbilityScores,
    target_class: &str,
    prerequisites: &[AbilityMinimum],
) -> ValidationResult {
    let mut result = ValidationResult::builder();

    for prereq in prerequisites {
        let ability = prereq.ability;
        let abbr = ability.abbreviation();
        let current = scores.get(ability);

        if current < prereq.minimum {
            let difference = prereq.minimum - current;
            result.push(
                ValidationError::error(
                    codes::MULTICLASS_ABILITY_NOT_MET,
                    format!(
                        "{} {} required for {}. Current: {} (need {} more)",
                        abbr, prereq.minimum, target_class, current, difference
                    ),
                )
                .with_field(ability.field_path())
                .with_suggestion(format!(
                    "Increase {} by {} to meet the requirement",
                    abbr, difference
                )),
            );
        } else if current == prereq.minimum {
            result.push(
                ValidationError::info(
                    codes::MULTICLASS_ABILITY_AT_MINIMUM,
                    format!(
                        "{} is exactly at the minimum ({}) for {}",
                        abbr, prereq.minimum, target_class
                    ),
                )
                .with_field(ability.field_path()),
            );
        }
    }

    result.build()
}

fn not_integer(ability: Ability) -> ValidationError {
    ValidationError::error(
        codes::ABILITY_SCORE_NOT_INTEGER,
        format!("{} must be a whole number", ability.abbreviation()),
    )
    .with_field(ability.field_path())
}

// Checks run independently so one value can trip several of them.
fn score_findings(limits: &AbilityScoreLimits, ability: Ability, value: f64) -> Vec<ValidationError> {
    let abbr = ability.abbreviation();
    let minimum = f64::from(limits.minimum);
    let normal_maximum = f64::from(limits.normal_maximum);
    let absolute_maximum = f64::from(limits.absolute_maximum);
    let mut findings = Vec::new();

    if value.fract() != 0.0 {
        findings.push(not_integer(ability));
    }

    if value < minimum {
        findings.push(
            ValidationError::error(
                codes::ABILITY_SCORE_TOO_LOW,
                format!("{} cannot be less than {}", abbr, limits.minimum),
            )
            .with_field(ability.field_path())
            .with_suggestion(format!("Set {} to at least {}", abbr, limits.minimum)),
        );
    }

    if value > absolute_maximum {
        findings.push(
            ValidationError::error(
                codes::ABILITY_SCORE_TOO_HIGH,
                format!("{} cannot exceed {}", abbr, limits.absolute_maximum),
            )
            .with_field(ability.field_path())
            .with_suggestion(format!(
                "The maximum ability score in D&D 5e is {}",
                limits.absolute_maximum
            )),
        );
    }

    if value > normal_maximum && value <= absolute_maximum {
        findings.push(
            ValidationError::warning(
                codes::ABILITY_SCORE_ABOVE_NORMAL_MAX,
                format!(
                    "{} of {} exceeds the normal maximum of {}. This is only possible with magic items or special features.",
                    abbr, value, limits.normal_maximum
                ),
            )
            .with_field(ability.field_path()),
        );
    }

    findings
}
