//! Charforge rules engine.
//!
//! Pure D&D 5e SRD validation over the types in `charforge-domain`. Nothing
//! here performs I/O; callers hand in a character (or a piece of one) and
//! get back a [`ValidationResult`].
//!
//! ## Structure
//!
//! - `validation/` - One module per rule area plus whole-character checks
//! - `config` - Tunable limits, loadable from the environment
//!
//! [`ValidationResult`]: charforge_domain::ValidationResult

pub mod config;
pub mod validation;

pub use config::{ConfigError, RulesConfig};
pub use validation::{
    feat_options, spell_options, validate_ability_score_change, validate_character,
    validate_field, validate_multiclass_addition, validation_status, CharacterCheck,
    CharacterValidator,
};
