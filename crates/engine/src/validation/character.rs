//! Whole-character validation and the lighter entry points used while a
//! character is being edited.

use once_cell::sync::Lazy;

use charforge_domain::{
    Ability, AbilityScoreMethod, AbilityScores, CharacterForValidation, ValidationResult,
};

use super::ability_scores::{
    validate_ability_score_value, validate_ability_score_with, validate_all_ability_scores_with,
};
use super::equipment::validate_all_equipped_items;
use super::feats::validate_feat;
use super::multiclass::{can_multiclass, check_multiclass_prerequisites};
use crate::config::RulesConfig;

// =============================================================================
// Check Port
// =============================================================================

/// One conditional step of whole-character validation.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterCheck: Send + Sync {
    /// Stable name, reported by [`CharacterValidator::checks_applied`].
    fn name(&self) -> &'static str;

    /// Whether this check is relevant to the character at all.
    fn applies(&self, character: &CharacterForValidation) -> bool;

    fn run(&self, character: &CharacterForValidation, config: &RulesConfig) -> ValidationResult;
}

// =============================================================================
// Standard Checks
// =============================================================================

/// Bounds on every score. Always runs.
pub struct AbilityScoresCheck;

impl CharacterCheck for AbilityScoresCheck {
    fn name(&self) -> &'static str {
        "ability_scores"
    }

    fn applies(&self, _character: &CharacterForValidation) -> bool {
        true
    }

    fn run(&self, character: &CharacterForValidation, config: &RulesConfig) -> ValidationResult {
        validate_all_ability_scores_with(&config.ability_scores, &character.ability_scores)
    }
}

/// Point-buy budget, for characters whose scores were bought.
pub struct PointBuyCheck;

impl CharacterCheck for PointBuyCheck {
    fn name(&self) -> &'static str {
        "point_buy"
    }

    fn applies(&self, character: &CharacterForValidation) -> bool {
        character.ability_score_method == AbilityScoreMethod::PointBuy
    }

    fn run(&self, character: &CharacterForValidation, config: &RulesConfig) -> ValidationResult {
        config.point_buy.validate_scores(&character.ability_scores)
    }
}

/// Prerequisites of every held class, once a second class is taken.
pub struct MulticlassCheck;

impl CharacterCheck for MulticlassCheck {
    fn name(&self) -> &'static str {
        "multiclass"
    }

    fn applies(&self, character: &CharacterForValidation) -> bool {
        character.is_multiclassed()
    }

    fn run(&self, character: &CharacterForValidation, _config: &RulesConfig) -> ValidationResult {
        character
            .classes
            .iter()
            .map(|class| check_multiclass_prerequisites(&class.name, &character.ability_scores))
            .collect()
    }
}

/// Proficiency with equipped gear.
pub struct EquipmentCheck;

impl CharacterCheck for EquipmentCheck {
    fn name(&self) -> &'static str {
        "equipment"
    }

    fn applies(&self, character: &CharacterForValidation) -> bool {
        !character.equipped_items.is_empty()
    }

    fn run(&self, character: &CharacterForValidation, _config: &RulesConfig) -> ValidationResult {
        validate_all_equipped_items(
            &character.equipped_items,
            &character.class_names(),
            &character.proficiencies,
        )
    }
}

/// Prerequisites of every held feat.
///
/// A feat is checked with itself discounted, so only a repeated entry counts
/// as taking it twice.
pub struct FeatsCheck;

impl CharacterCheck for FeatsCheck {
    fn name(&self) -> &'static str {
        "feats"
    }

    fn applies(&self, character: &CharacterForValidation) -> bool {
        !character.feats.is_empty()
    }

    fn run(&self, character: &CharacterForValidation, _config: &RulesConfig) -> ValidationResult {
        character
            .feats
            .iter()
            .enumerate()
            .map(|(index, feat)| {
                let repeated = character.feats[..index]
                    .iter()
                    .any(|earlier| earlier.trim().eq_ignore_ascii_case(feat.trim()));
                validate_feat(feat, character, repeated)
            })
            .collect()
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Runs an ordered list of checks and merges their findings.
pub struct CharacterValidator {
    config: RulesConfig,
    checks: Vec<Box<dyn CharacterCheck>>,
}

impl Default for CharacterValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterValidator {
    /// SRD configuration with the standard checks.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Standard checks, in order: ability scores, point buy, multiclass,
    /// equipment, feats.
    pub fn with_config(config: RulesConfig) -> Self {
        Self::with_checks(
            config,
            vec![
                Box::new(AbilityScoresCheck),
                Box::new(PointBuyCheck),
                Box::new(MulticlassCheck),
                Box::new(EquipmentCheck),
                Box::new(FeatsCheck),
            ],
        )
    }

    pub fn with_checks(config: RulesConfig, checks: Vec<Box<dyn CharacterCheck>>) -> Self {
        Self { config, checks }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Names of the checks that would run for this character.
    pub fn checks_applied(&self, character: &CharacterForValidation) -> Vec<&'static str> {
        self.checks
            .iter()
            .filter(|check| check.applies(character))
            .map(|check| check.name())
            .collect()
    }

    pub fn validate(&self, character: &CharacterForValidation) -> ValidationResult {
        let mut applied = Vec::new();
        let mut result = ValidationResult::builder();

        for check in &self.checks {
            if check.applies(character) {
                applied.push(check.name());
                result.absorb(check.run(character, &self.config));
            }
        }

        let result = result.build();
        tracing::debug!(
            character = %character.name,
            checks = ?applied,
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "Character validation finished"
        );
        result
    }

    /// Ability scores (and point buy, if used) plus the prerequisites of
    /// the listed classes, without building a full character.
    pub fn validate_ability_score_change<S: AsRef<str>>(
        &self,
        scores: &AbilityScores,
        method: AbilityScoreMethod,
        current_classes: &[S],
    ) -> ValidationResult {
        let mut result = ValidationResult::builder();
        result.absorb(validate_all_ability_scores_with(
            &self.config.ability_scores,
            scores,
        ));

        if method == AbilityScoreMethod::PointBuy {
            result.absorb(self.config.point_buy.validate_scores(scores));
        }

        for class in current_classes {
            result.absorb(check_multiclass_prerequisites(class.as_ref(), scores));
        }

        result.build()
    }

    /// Validate one form field as it is edited.
    ///
    /// `"abilityScores"` checks a whole score object; `"str"`, `"dex"`, and
    /// the rest check that score in the context of the others (10 when no
    /// context is given). Any other field passes.
    pub fn validate_field(
        &self,
        field_name: &str,
        value: &serde_json::Value,
        context: Option<&AbilityScores>,
    ) -> ValidationResult {
        let limits = &self.config.ability_scores;

        if field_name == "abilityScores" {
            return Ability::ALL
                .iter()
                .map(|&ability| {
                    let raw = value.get(ability.key()).unwrap_or(&serde_json::Value::Null);
                    validate_ability_score_value(limits, ability, raw)
                })
                .collect();
        }

        let Ok(target) = field_name.parse::<Ability>() else {
            return ValidationResult::valid();
        };
        let context = context.copied().unwrap_or_default();

        Ability::ALL
            .iter()
            .map(|&ability| {
                if ability == target {
                    validate_ability_score_value(limits, ability, value)
                } else {
                    validate_ability_score_with(limits, ability, context.get(ability))
                }
            })
            .collect()
    }
}

static DEFAULT_VALIDATOR: Lazy<CharacterValidator> = Lazy::new(CharacterValidator::new);

// =============================================================================
// Entry Points
// =============================================================================

/// Validate a character with the SRD rules.
pub fn validate_character(character: &CharacterForValidation) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(character)
}

pub fn validate_ability_score_change<S: AsRef<str>>(
    scores: &AbilityScores,
    method: AbilityScoreMethod,
    current_classes: &[S],
) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_ability_score_change(scores, method, current_classes)
}

/// Whether the character may add `new_class`. Adding a class already held
/// is a level-up and always passes.
pub fn validate_multiclass_addition(
    character: &CharacterForValidation,
    new_class: &str,
) -> ValidationResult {
    if character.has_class(new_class) {
        return ValidationResult::valid();
    }
    can_multiclass(&character.class_names(), new_class, &character.ability_scores)
}

pub fn validate_field(
    field_name: &str,
    value: &serde_json::Value,
    context: Option<&AbilityScores>,
) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_field(field_name, value, context)
}
