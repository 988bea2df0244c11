//! Rules validators.
//!
//! Each submodule owns one rule area and returns a [`ValidationResult`]
//! listing every problem it finds. Errors block a character; warnings and
//! info notes never do. [`character`] composes the areas into whole-sheet
//! validation.
//!
//! [`ValidationResult`]: charforge_domain::ValidationResult

pub mod ability_scores;
pub mod character;
pub mod equipment;
pub mod feats;
pub mod feedback;
pub mod multiclass;
pub mod point_buy;
pub mod spells;
pub mod spells_known;

#[cfg(test)]
mod tests;

pub use character::{
    validate_ability_score_change, validate_character, validate_field,
    validate_multiclass_addition, AbilityScoresCheck, CharacterCheck, CharacterValidator,
    EquipmentCheck, FeatsCheck, MulticlassCheck, PointBuyCheck,
};
pub use feats::{feat_options, FeatOptions};
pub use feedback::{validation_status, validation_summary, ValidationStatus, ValidationSummary};
pub use spells::{spell_options, SpellOptions};

/// Plural suffix for a count in a message.
pub(crate) fn plural(n: impl Into<i64>) -> &'static str {
    if n.into() > 1 {
        "s"
    } else {
        ""
    }
}
