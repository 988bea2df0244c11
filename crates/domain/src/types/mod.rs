//! # Charforge Domain Types
//!
//! Shared vocabulary for the rules engine: the character projection the
//! validators read and the result types they produce.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no side effects
//! 2. **Stable API** - Callers render these directly
//! 3. **Serializable** - All types derive Serialize/Deserialize (camelCase on the wire)

mod ability;
pub use ability::{ability_modifier, format_modifier, Ability, AbilityScores};

mod character;
pub use character::{AbilityScoreMethod, CharacterForValidation, ClassLevel, ClassName};

mod equipment;
pub use equipment::{EquipmentItem, ItemType, ProficiencyType};

mod validation;
pub use validation::{
    codes, Severity, ValidationError, ValidationResult, ValidationResultBuilder,
};
