//! Combining and summarizing validation results for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use charforge_domain::{Severity, ValidationError, ValidationResult};

use super::plural;

/// Bucket for findings without a field.
pub const GENERAL_FIELD: &str = "general";

/// Counts and a one-line summary such as `"2 errors, 1 warning"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub summary_text: String,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Error,
    Warning,
    Valid,
}

/// Overall status with the first message of the winning tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStatus {
    pub status: StatusKind,
    pub message: String,
    pub count: usize,
}

/// Concatenate every result; valid only if no input had errors.
pub fn merge_validation_results(
    results: impl IntoIterator<Item = ValidationResult>,
) -> ValidationResult {
    results.into_iter().collect()
}

/// Errors and warnings keyed by field, in production order within a field.
pub fn group_errors_by_field(result: &ValidationResult) -> BTreeMap<String, Vec<ValidationError>> {
    let mut grouped: BTreeMap<String, Vec<ValidationError>> = BTreeMap::new();
    for finding in result.all_findings() {
        let field = finding.field.as_deref().unwrap_or(GENERAL_FIELD);
        grouped
            .entry(field.to_string())
            .or_default()
            .push(finding.clone());
    }
    grouped
}

pub fn highest_severity(findings: &[ValidationError]) -> Option<Severity> {
    findings.iter().map(|finding| finding.severity).min()
}

/// `"message (suggestion)"`, or just the message.
pub fn format_validation_error(finding: &ValidationError) -> String {
    match &finding.suggestion {
        Some(suggestion) => format!("{} ({})", finding.message, suggestion),
        None => finding.message.clone(),
    }
}

pub fn filter_by_severity(result: &ValidationResult, severity: Severity) -> Vec<ValidationError> {
    result
        .all_findings()
        .filter(|finding| finding.severity == severity)
        .cloned()
        .collect()
}

fn on_field(finding: &ValidationError, field: &str) -> bool {
    finding.field.as_deref() == Some(field)
}

pub fn has_field_error(result: &ValidationResult, field: &str) -> bool {
    result.errors().iter().any(|e| on_field(e, field))
}

pub fn has_field_warning(result: &ValidationResult, field: &str) -> bool {
    result.warnings().iter().any(|w| on_field(w, field))
}

/// Every finding, of any severity, attached to `field`.
pub fn field_errors(result: &ValidationResult, field: &str) -> Vec<ValidationError> {
    result
        .all_findings()
        .filter(|finding| on_field(finding, field))
        .cloned()
        .collect()
}

fn with_optional(
    mut finding: ValidationError,
    field: Option<&str>,
    suggestion: Option<&str>,
) -> ValidationError {
    finding.field = field.map(str::to_string);
    finding.suggestion = suggestion.map(str::to_string);
    finding
}

pub fn create_error_result(
    code: &str,
    message: &str,
    field: Option<&str>,
    suggestion: Option<&str>,
) -> ValidationResult {
    ValidationResult::from_findings([with_optional(
        ValidationError::error(code, message),
        field,
        suggestion,
    )])
}

pub fn create_warning_result(
    code: &str,
    message: &str,
    field: Option<&str>,
    suggestion: Option<&str>,
) -> ValidationResult {
    ValidationResult::from_findings([with_optional(
        ValidationError::warning(code, message),
        field,
        suggestion,
    )])
}

fn count_label(count: usize, noun: &str) -> String {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    format!("{} {}{}", count, noun, plural(count))
}

pub fn validation_summary(result: &ValidationResult) -> ValidationSummary {
    let error_count = result.errors().len();
    let warning_count = count_severity(result.warnings(), Severity::Warning);
    let info_count = count_severity(result.warnings(), Severity::Info);

    let mut parts = Vec::new();
    if error_count > 0 {
        parts.push(count_label(error_count, "error"));
    }
    if warning_count > 0 {
        parts.push(count_label(warning_count, "warning"));
    }

    let summary_text = if !parts.is_empty() {
        parts.join(", ")
    } else if info_count > 0 {
        count_label(info_count, "note")
    } else {
        "Valid".to_string()
    };

    ValidationSummary {
        error_count,
        warning_count,
        info_count,
        summary_text,
        is_valid: result.is_valid(),
    }
}

fn count_severity(findings: &[ValidationError], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}

/// Errors win over warnings; info-only results are plain valid.
pub fn validation_status(result: &ValidationResult) -> ValidationStatus {
    if !result.is_valid() {
        return ValidationStatus {
            status: StatusKind::Error,
            message: result
                .errors()
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "Validation errors found".to_string()),
            count: result.errors().len(),
        };
    }

    let warnings: Vec<_> = result
        .warnings()
        .iter()
        .filter(|w| w.severity == Severity::Warning)
        .collect();

    match warnings.first() {
        Some(first) => ValidationStatus {
            status: StatusKind::Warning,
            message: first.message.clone(),
            count: warnings.len(),
        },
        None => ValidationStatus {
            status: StatusKind::Valid,
            message: "All validations passed".to_string(),
            count: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationResult {
        ValidationResult::from_findings([
            ValidationError::error("E1", "STR too low")
                .with_field("abilityScores.str")
                .with_suggestion("Raise it"),
            ValidationError::warning("W1", "Not proficient").with_field("equipment"),
            ValidationError::info("I1", "Points left").with_field("abilityScores.str"),
            ValidationError::info("I2", "Loose note"),
        ])
    }

    #[test]
    fn merge_of_nothing_is_valid() {
        let merged = merge_validation_results(Vec::new());
        assert!(merged.is_valid());
        assert!(!merged.has_findings());
    }

    #[test]
    fn merge_keeps_order_and_recomputes_validity() {
        let merged = merge_validation_results([
            create_warning_result("W", "first", None, None),
            create_error_result("E", "second", Some("level"), None),
        ]);
        assert!(!merged.is_valid());
        assert_eq!(merged.warnings()[0].message, "first");
        assert_eq!(merged.errors()[0].field.as_deref(), Some("level"));
    }

    #[test]
    fn grouping_by_field() {
        let grouped = group_errors_by_field(&sample());
        assert_eq!(grouped["abilityScores.str"].len(), 2);
        assert_eq!(grouped["equipment"].len(), 1);
        assert_eq!(grouped[GENERAL_FIELD][0].code, "I2");
    }

    #[test]
    fn severity_helpers() {
        let sample = sample();
        assert_eq!(highest_severity(sample.warnings()), Some(Severity::Warning));
        assert_eq!(highest_severity(&[]), None);
        assert_eq!(filter_by_severity(&sample, Severity::Info).len(), 2);
    }

    #[test]
    fn formatting_appends_suggestion() {
        let sample = sample();
        assert_eq!(format_validation_error(&sample.errors()[0]), "STR too low (Raise it)");
        assert_eq!(format_validation_error(&sample.warnings()[0]), "Not proficient");
    }

    #[test]
    fn field_queries() {
        let sample = sample();
        assert!(has_field_error(&sample, "abilityScores.str"));
        assert!(!has_field_error(&sample, "equipment"));
        assert!(has_field_warning(&sample, "equipment"));
        assert_eq!(field_errors(&sample, "abilityScores.str").len(), 2);
    }

    #[test]
    fn summary_text_prefers_errors_then_warnings() {
        let summary = validation_summary(&sample());
        assert_eq!(summary.summary_text, "1 error, 1 warning");
        assert_eq!(summary.info_count, 2);
        assert!(!summary.is_valid);

        let notes = ValidationResult::from_findings([
            ValidationError::info("I", "a"),
            ValidationError::info("I", "b"),
        ]);
        assert_eq!(validation_summary(&notes).summary_text, "2 notes");
        assert_eq!(validation_summary(&ValidationResult::valid()).summary_text, "Valid");
    }

    #[test]
    fn status_tiers() {
        let status = validation_status(&sample());
        assert_eq!(status.status, StatusKind::Error);
        assert_eq!(status.message, "STR too low");
        assert_eq!(status.count, 1);

        let warned = create_warning_result("W", "Heads up", None, None);
        assert_eq!(validation_status(&warned).status, StatusKind::Warning);

        let info_only = ValidationResult::from_findings([ValidationError::info("I", "fyi")]);
        let status = validation_status(&info_only);
        assert_eq!(status.status, StatusKind::Valid);
        assert_eq!(status.message, "All validations passed");
    }
}
