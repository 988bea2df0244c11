use charforge_domain::{
    AbilityScoreMethod, AbilityScores, CharacterForValidation, ClassLevel, EquipmentItem,
    Severity, ValidationError, ValidationResult,
};

use crate::validation::feedback::{merge_validation_results, validation_summary};
use crate::validation::validate_character;

fn messy_character() -> CharacterForValidation {
    let mut character = CharacterForValidation::new("Vex", "Elf");
    character.classes = vec![ClassLevel::new("Wizard", 3), ClassLevel::new("Paladin", 1)];
    character.level = 4;
    character.ability_score_method = AbilityScoreMethod::PointBuy;
    character.ability_scores = AbilityScores::new(8, 14, 14, 15, 12, 10);
    character.equipped_items = vec![EquipmentItem::armor("Plate"), EquipmentItem::weapon("Dagger")];
    character.feats = vec!["Grappler".into(), "Homebrew Feat".into()];
    character
}

fn codes(findings: &[ValidationError]) -> Vec<&str> {
    findings.iter().map(|f| f.code.as_str()).collect()
}

#[test]
fn valid_exactly_when_no_errors() {
    let result = validate_character(&messy_character());
    assert_eq!(result.is_valid(), result.errors().is_empty());
    assert!(!result.is_valid());
    assert!(result
        .errors()
        .iter()
        .all(|e| e.severity == Severity::Error));
    assert!(result
        .warnings()
        .iter()
        .all(|w| w.severity != Severity::Error));
}

#[test]
fn validation_is_repeatable() {
    let character = messy_character();
    assert_eq!(validate_character(&character), validate_character(&character));
}

#[test]
fn merge_is_associative_and_ordered() {
    let a = ValidationResult::from_findings([ValidationError::error("A", "a")]);
    let b = ValidationResult::from_findings([ValidationError::warning("B", "b")]);
    let c = ValidationResult::from_findings([
        ValidationError::error("C", "c"),
        ValidationError::info("D", "d"),
    ]);

    let left = merge_validation_results([
        merge_validation_results([a.clone(), b.clone()]),
        c.clone(),
    ]);
    let right = merge_validation_results([a, merge_validation_results([b, c])]);

    assert_eq!(left, right);
    assert_eq!(codes(left.errors()), vec!["A", "C"]);
    assert_eq!(codes(left.warnings()), vec!["B", "D"]);
}

#[test]
fn merged_validity_is_recomputed() {
    let only_warnings = merge_validation_results([
        ValidationResult::from_findings([ValidationError::warning("W", "w")]),
        ValidationResult::valid(),
    ]);
    assert!(only_warnings.is_valid());
}

#[test]
fn summary_counts_match_the_result() {
    let result = validate_character(&messy_character());
    let summary = validation_summary(&result);

    assert_eq!(summary.error_count, result.errors().len());
    assert_eq!(
        summary.warning_count + summary.info_count,
        result.warnings().len()
    );
    assert_eq!(summary.is_valid, result.is_valid());
}
