//! Validation output vocabulary shared by every rule check.
//!
//! A [`ValidationResult`] is always built fresh and never mutated after
//! construction; combining results produces a new value. Validity is derived
//! from the error list and cannot be set independently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The configuration is illegal; blocks the action upstream.
    Error,
    /// Legal but noteworthy.
    Warning,
    /// Purely informational (e.g. points left to spend).
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding produced by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Stable machine-readable identifier, see [`codes`].
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
    pub severity: Severity,
    /// Dotted path used for grouping (e.g. `abilityScores.str`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Optional remediation text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
            field: None,
            suggestion: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, Severity::Error)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, Severity::Warning)
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, Severity::Info)
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Same finding with its message prefixed, e.g. `"Grappler: Requires STR 13"`.
    #[must_use]
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.message = format!("{}: {}", prefix, self.message);
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Outcome of one or more rule checks.
///
/// # Invariants
///
/// `is_valid()` is `true` exactly when `errors()` is empty. Warnings and infos
/// live in `warnings()` and never affect validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ValidationResultRepr")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationResult {
    /// A passing result with no findings.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Build a result from explicit lists; validity is derived from `errors`.
    pub fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Build a result by routing each finding on its severity.
    pub fn from_findings(findings: impl IntoIterator<Item = ValidationError>) -> Self {
        let mut builder = ValidationResultBuilder::default();
        builder.extend(findings);
        builder.build()
    }

    pub fn builder() -> ValidationResultBuilder {
        ValidationResultBuilder::default()
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Warning- and info-severity findings.
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Errors followed by warnings, in production order.
    pub fn all_findings(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn has_findings(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn into_parts(self) -> (Vec<ValidationError>, Vec<ValidationError>) {
        (self.errors, self.warnings)
    }

    /// Concatenate two results into a new one.
    #[must_use]
    pub fn merge(self, other: ValidationResult) -> ValidationResult {
        let (mut errors, mut warnings) = self.into_parts();
        let (other_errors, other_warnings) = other.into_parts();
        errors.extend(other_errors);
        warnings.extend(other_warnings);
        Self::from_parts(errors, warnings)
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        let mut builder = ValidationResultBuilder::default();
        for result in iter {
            builder.absorb(result);
        }
        builder.build()
    }
}

/// Wire shape; an incoming `isValid` is ignored and recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationResultRepr {
    #[serde(default)]
    errors: Vec<ValidationError>,
    #[serde(default)]
    warnings: Vec<ValidationError>,
}

impl From<ValidationResultRepr> for ValidationResult {
    fn from(repr: ValidationResultRepr) -> Self {
        Self::from_parts(repr.errors, repr.warnings)
    }
}

/// Accumulates findings while a validator runs.
#[derive(Debug, Default)]
pub struct ValidationResultBuilder {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResultBuilder {
    /// Route a finding on its severity.
    pub fn push(&mut self, finding: ValidationError) -> &mut Self {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning | Severity::Info => self.warnings.push(finding),
        }
        self
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = ValidationError>) -> &mut Self {
        for finding in findings {
            self.push(finding);
        }
        self
    }

    /// Take over every finding of a finished result.
    pub fn absorb(&mut self, result: ValidationResult) -> &mut Self {
        let (errors, warnings) = result.into_parts();
        self.errors.extend(errors);
        self.warnings.extend(warnings);
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn build(self) -> ValidationResult {
        ValidationResult::from_parts(self.errors, self.warnings)
    }
}

/// Stable codes carried by [`ValidationError::code`].
pub mod codes {
    pub const ABILITY_SCORE_NOT_INTEGER: &str = "ABILITY_SCORE_NOT_INTEGER";
    pub const ABILITY_SCORE_TOO_LOW: &str = "ABILITY_SCORE_TOO_LOW";
    pub const ABILITY_SCORE_TOO_HIGH: &str = "ABILITY_SCORE_TOO_HIGH";
    pub const ABILITY_SCORE_ABOVE_NORMAL_MAX: &str = "ABILITY_SCORE_ABOVE_NORMAL_MAX";

    pub const POINT_BUY_NOT_INTEGER: &str = "POINT_BUY_NOT_INTEGER";
    pub const POINT_BUY_SCORE_TOO_LOW: &str = "POINT_BUY_SCORE_TOO_LOW";
    pub const POINT_BUY_SCORE_TOO_HIGH: &str = "POINT_BUY_SCORE_TOO_HIGH";
    pub const POINT_BUY_EXCEEDED: &str = "POINT_BUY_EXCEEDED";
    pub const POINT_BUY_POINTS_REMAINING: &str = "POINT_BUY_POINTS_REMAINING";

    pub const MULTICLASS_UNKNOWN_CLASS: &str = "MULTICLASS_UNKNOWN_CLASS";
    pub const MULTICLASS_PREREQ_NOT_MET: &str = "MULTICLASS_PREREQ_NOT_MET";
    pub const MULTICLASS_ABILITY_NOT_MET: &str = "MULTICLASS_ABILITY_NOT_MET";
    pub const MULTICLASS_ABILITY_AT_MINIMUM: &str = "MULTICLASS_ABILITY_AT_MINIMUM";

    pub const SPELL_NOT_ON_CLASS_LIST: &str = "SPELL_NOT_ON_CLASS_LIST";
    pub const SPELL_LEVEL_TOO_HIGH: &str = "SPELL_LEVEL_TOO_HIGH";
    pub const CLASS_CANNOT_CAST_SPELLS: &str = "CLASS_CANNOT_CAST_SPELLS";

    pub const TOO_MANY_SPELLS_KNOWN: &str = "TOO_MANY_SPELLS_KNOWN";
    pub const SPELLS_KNOWN_AVAILABLE: &str = "SPELLS_KNOWN_AVAILABLE";
    pub const TOO_MANY_CANTRIPS_KNOWN: &str = "TOO_MANY_CANTRIPS_KNOWN";
    pub const CANTRIPS_KNOWN_AVAILABLE: &str = "CANTRIPS_KNOWN_AVAILABLE";
    pub const TOO_MANY_PREPARED_SPELLS: &str = "TOO_MANY_PREPARED_SPELLS";
    pub const CAN_PREPARE_MORE_SPELLS: &str = "CAN_PREPARE_MORE_SPELLS";

    pub const FEAT_UNKNOWN: &str = "FEAT_UNKNOWN";
    pub const FEAT_ALREADY_TAKEN: &str = "FEAT_ALREADY_TAKEN";
    pub const FEAT_ABILITY_NOT_MET: &str = "FEAT_ABILITY_NOT_MET";
    pub const FEAT_PROFICIENCY_NOT_MET: &str = "FEAT_PROFICIENCY_NOT_MET";
    pub const FEAT_SPELLCASTING_NOT_MET: &str = "FEAT_SPELLCASTING_NOT_MET";
    pub const FEAT_LEVEL_NOT_MET: &str = "FEAT_LEVEL_NOT_MET";
    pub const FEAT_RACE_NOT_MET: &str = "FEAT_RACE_NOT_MET";
    pub const FEAT_CLASS_NOT_MET: &str = "FEAT_CLASS_NOT_MET";

    pub const EQUIPMENT_NOT_PROFICIENT: &str = "EQUIPMENT_NOT_PROFICIENT";
}
