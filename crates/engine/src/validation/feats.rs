//! Feat prerequisite checks against the SRD feat catalog.

use serde::Serialize;

use charforge_domain::codes;
use charforge_domain::dnd5e::{feat_catalog, find_feat};
use charforge_domain::{CharacterForValidation, Feat, FeatPrerequisite, ValidationError, ValidationResult};

/// A feat the character misses by exactly one prerequisite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearlyAvailableFeat {
    pub feat: &'static Feat,
    pub missing_prereqs: Vec<ValidationError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatOptions {
    /// Qualifying feats the character does not hold yet.
    pub available: Vec<&'static Feat>,
    /// Catalog feats the character already holds.
    pub already_taken: Vec<&'static Feat>,
}

pub fn get_feat(name: &str) -> Option<&'static Feat> {
    find_feat(name)
}

/// The finding for an unmet prerequisite, or `None` when it is met.
pub fn check_prerequisite(
    prerequisite: &FeatPrerequisite,
    character: &CharacterForValidation,
) -> Option<ValidationError> {
    match prerequisite {
        FeatPrerequisite::Ability { ability, minimum } => {
            let score = character.ability_scores.get(*ability);
            (score < *minimum).then(|| {
                let abbr = ability.abbreviation();
                ValidationError::error(
                    codes::FEAT_ABILITY_NOT_MET,
                    format!("Requires {} {}. Current: {}", abbr, minimum, score),
                )
                .with_field(ability.field_path())
                .with_suggestion(format!("Increase {} to at least {}", abbr, minimum))
            })
        }
        FeatPrerequisite::Proficiency { proficiency } => {
            (!character.has_proficiency(proficiency)).then(|| {
                let label = proficiency.replace('-', " ");
                ValidationError::error(
                    codes::FEAT_PROFICIENCY_NOT_MET,
                    format!("Requires proficiency with {}", label),
                )
                .with_field("proficiencies")
                .with_suggestion(format!("Gain {} proficiency first", label))
            })
        }
        FeatPrerequisite::Spellcasting => (!character.has_spellcasting).then(|| {
            ValidationError::error(
                codes::FEAT_SPELLCASTING_NOT_MET,
                "Requires the ability to cast at least one spell",
            )
            .with_field("class")
            .with_suggestion("Choose a spellcasting class or take the Magic Initiate feat first")
        }),
        FeatPrerequisite::Level { level } => (character.level < *level).then(|| {
            ValidationError::error(
                codes::FEAT_LEVEL_NOT_MET,
                format!(
                    "Requires character level {}. Current: {}",
                    level, character.level
                ),
            )
            .with_field("level")
        }),
        FeatPrerequisite::Race { race } => {
            (!character.race.trim().eq_ignore_ascii_case(race.trim())).then(|| {
                ValidationError::error(codes::FEAT_RACE_NOT_MET, format!("Requires {} race", race))
                    .with_field("race")
            })
        }
        FeatPrerequisite::Class { class } => (!character.has_class(class)).then(|| {
            ValidationError::error(codes::FEAT_CLASS_NOT_MET, format!("Requires {} class", class))
                .with_field("class")
        }),
    }
}

/// Whether the character may take `feat_name`.
///
/// Holding the feat already is an error; unknown feats only warn.
pub fn validate_feat_prerequisites(
    feat_name: &str,
    character: &CharacterForValidation,
) -> ValidationResult {
    validate_feat(feat_name, character, character.has_feat(feat_name))
}

/// Shared by the public check and the character facade, which decides
/// separately whether the feat counts as already held.
pub(crate) fn validate_feat(
    feat_name: &str,
    character: &CharacterForValidation,
    already_held: bool,
) -> ValidationResult {
    let Some(feat) = get_feat(feat_name) else {
        tracing::debug!(feat = feat_name, "Feat not in catalog");
        return ValidationResult::from_findings([ValidationError::warning(
            codes::FEAT_UNKNOWN,
            format!("Unknown feat \"{}\"", feat_name),
        )
        .with_field("feats")]);
    };

    let mut result = ValidationResult::builder();

    if already_held {
        result.push(
            ValidationError::error(
                codes::FEAT_ALREADY_TAKEN,
                format!("You already have the {} feat", feat_name),
            )
            .with_field("feats"),
        );
    }

    result.extend(
        feat.prerequisites
            .iter()
            .filter_map(|prerequisite| check_prerequisite(prerequisite, character))
            .map(|error| error.prefixed(feat_name)),
    );

    result.build()
}

/// Catalog feats the character qualifies for and does not already hold.
pub fn available_feats(character: &CharacterForValidation) -> Vec<&'static Feat> {
    feat_catalog()
        .iter()
        .filter(|feat| validate_feat_prerequisites(&feat.name, character).is_valid())
        .collect()
}

/// Feats blocked by exactly one unmet prerequisite. Held feats are skipped.
pub fn nearly_available_feats(character: &CharacterForValidation) -> Vec<NearlyAvailableFeat> {
    feat_catalog()
        .iter()
        .filter(|feat| !character.has_feat(&feat.name))
        .filter_map(|feat| {
            let (errors, _) = validate_feat(&feat.name, character, false).into_parts();
            (errors.len() == 1).then_some(NearlyAvailableFeat {
                feat,
                missing_prereqs: errors,
            })
        })
        .collect()
}

pub fn feat_options(character: &CharacterForValidation) -> FeatOptions {
    let already_taken = feat_catalog()
        .iter()
        .filter(|feat| character.has_feat(&feat.name))
        .collect();

    FeatOptions {
        available: available_feats(character),
        already_taken,
    }
}
