//! Point-buy validation and the incremental helpers behind +/- buttons.
//!
//! The free functions use the SRD budget; [`PointBuyConfig`] carries the
//! same operations for a configured budget and range.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use charforge_domain::codes;
use charforge_domain::dnd5e::point_buy_cost;
use charforge_domain::{Ability, AbilityScores, ValidationError, ValidationResult};

use super::plural;
use crate::config::PointBuyConfig;

/// Whether a +/- step is allowed, and why not when it isn't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAdjustment {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ScoreAdjustment {
    fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn denied(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointBuySummary {
    pub total_spent: u32,
    /// Negative when over budget.
    pub remaining: i64,
    /// Cost per ability; unpurchasable scores count as 0.
    pub breakdown: BTreeMap<Ability, u32>,
    pub is_valid: bool,
}

impl PointBuyConfig {
    /// Cost of a score within the configured range.
    pub fn cost(&self, score: i32) -> Option<u32> {
        if score < self.min_score || score > self.max_score {
            return None;
        }
        point_buy_cost(score)
    }

    /// Total spent, or `None` if any score cannot be bought.
    pub fn total_spent(&self, scores: &AbilityScores) -> Option<u32> {
        scores.iter().map(|(_, score)| self.cost(score)).sum()
    }

    pub fn validate_score(&self, ability: Ability, score: i32) -> ValidationResult {
        let abbr = ability.abbreviation();
        let mut result = ValidationResult::builder();

        if score < self.min_score {
            result.push(
                ValidationError::error(
                    codes::POINT_BUY_SCORE_TOO_LOW,
                    format!("{} cannot be lower than {} in point buy", abbr, self.min_score),
                )
                .with_field(ability.field_path())
                .with_suggestion(format!(
                    "Minimum ability score in point buy is {}",
                    self.min_score
                )),
            );
        }

        if score > self.max_score {
            result.push(
                ValidationError::error(
                    codes::POINT_BUY_SCORE_TOO_HIGH,
                    format!("{} cannot exceed {} in point buy", abbr, self.max_score),
                )
                .with_field(ability.field_path())
                .with_suggestion(format!(
                    "Maximum ability score in point buy is {} (before racial bonuses)",
                    self.max_score
                )),
            );
        }

        result.build()
    }

    /// Per-score range checks, then the budget check once every score is
    /// purchasable.
    pub fn validate_scores(&self, scores: &AbilityScores) -> ValidationResult {
        let mut result = ValidationResult::builder();
        for (ability, score) in scores.iter() {
            result.absorb(self.validate_score(ability, score));
        }

        if result.has_errors() {
            return result.build();
        }

        let Some(total) = self.total_spent(scores) else {
            return result.build();
        };

        if total > self.total_points {
            let excess = total - self.total_points;
            result.push(
                ValidationError::error(
                    codes::POINT_BUY_EXCEEDED,
                    format!(
                        "You've spent {} points, but only {} are available. You're {} point{} over.",
                        total,
                        self.total_points,
                        excess,
                        plural(excess)
                    ),
                )
                .with_field("abilityScores")
                .with_suggestion(format!(
                    "Reduce some ability scores to free up {} point{}",
                    excess,
                    plural(excess)
                )),
            );
        } else if total < self.total_points {
            let remaining = self.total_points - total;
            result.push(
                ValidationError::info(
                    codes::POINT_BUY_POINTS_REMAINING,
                    format!(
                        "You have {} point{} left to spend",
                        remaining,
                        plural(remaining)
                    ),
                )
                .with_field("abilityScores"),
            );
        }

        result.build()
    }

    pub fn can_increase(&self, current_score: i32, total_spent: u32) -> ScoreAdjustment {
        if current_score >= self.max_score {
            return ScoreAdjustment::denied(format!(
                "Maximum score of {} reached",
                self.max_score
            ));
        }

        let (Some(current_cost), Some(next_cost)) = (
            self.cost(current_score),
            self.cost(current_score.saturating_add(1)),
        ) else {
            return ScoreAdjustment::denied("Invalid score");
        };

        let needed = i64::from(next_cost) - i64::from(current_cost);
        let available = i64::from(self.total_points) - i64::from(total_spent);

        if needed > available {
            return ScoreAdjustment::denied(format!(
                "Need {} point{}, but only {} available",
                needed,
                plural(needed),
                available
            ));
        }

        ScoreAdjustment::allowed()
    }

    pub fn can_decrease(&self, current_score: i32) -> ScoreAdjustment {
        if current_score <= self.min_score {
            return ScoreAdjustment::denied(format!(
                "Minimum score of {} reached",
                self.min_score
            ));
        }
        ScoreAdjustment::allowed()
    }

    pub fn points_freed_by_decrease(&self, current_score: i32) -> u32 {
        if current_score <= self.min_score {
            return 0;
        }
        match (self.cost(current_score), self.cost(current_score - 1)) {
            (Some(current), Some(lower)) => current.saturating_sub(lower),
            _ => 0,
        }
    }

    pub fn summary(&self, scores: &AbilityScores) -> PointBuySummary {
        let mut breakdown = BTreeMap::new();
        let mut total_spent = 0;
        let mut every_score_valid = true;

        for (ability, score) in scores.iter() {
            let cost = self.cost(score).unwrap_or_else(|| {
                every_score_valid = false;
                0
            });
            breakdown.insert(ability, cost);
            total_spent += cost;
        }

        PointBuySummary {
            total_spent,
            remaining: i64::from(self.total_points) - i64::from(total_spent),
            breakdown,
            is_valid: every_score_valid && total_spent <= self.total_points,
        }
    }
}

pub fn validate_point_buy_score(ability: Ability, score: i32) -> ValidationResult {
    PointBuyConfig::default().validate_score(ability, score)
}

pub fn validate_point_buy_scores(scores: &AbilityScores) -> ValidationResult {
    PointBuyConfig::default().validate_scores(scores)
}

pub fn calculate_total_points_spent(scores: &AbilityScores) -> Option<u32> {
    PointBuyConfig::default().total_spent(scores)
}

pub fn can_increase_score(current_score: i32, total_spent: u32) -> ScoreAdjustment {
    PointBuyConfig::default().can_increase(current_score, total_spent)
}

pub fn can_decrease_score(current_score: i32) -> ScoreAdjustment {
    PointBuyConfig::default().can_decrease(current_score)
}

pub fn points_freed_by_decrease(current_score: i32) -> u32 {
    PointBuyConfig::default().points_freed_by_decrease(current_score)
}

pub fn point_buy_summary(scores: &AbilityScores) -> PointBuySummary {
    PointBuyConfig::default().summary(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> AbilityScores {
        AbilityScores::new(15, 14, 13, 12, 10, 8)
    }

    #[test]
    fn standard_array_spends_the_whole_budget() {
        assert_eq!(calculate_total_points_spent(&standard()), Some(27));
        let result = validate_point_buy_scores(&standard());
        assert!(result.is_valid());
        assert!(!result.has_findings());
    }

    #[test]
    fn overspending_reports_the_excess() {
        let scores = AbilityScores::new(15, 15, 15, 10, 10, 8);
        let result = validate_point_buy_scores(&scores);

        assert_eq!(result.errors().len(), 1);
        let error = &result.errors()[0];
        assert_eq!(error.code, codes::POINT_BUY_EXCEEDED);
        assert_eq!(
            error.message,
            "You've spent 31 points, but only 27 are available. You're 4 points over."
        );
        assert_eq!(error.field.as_deref(), Some("abilityScores"));
    }

    #[test]
    fn one_point_over_is_singular() {
        // 9 + 9 + 5 + 2 + 2 + 1 = 28
        let scores = AbilityScores::new(15, 15, 13, 10, 10, 9);
        let result = validate_point_buy_scores(&scores);
        assert!(result.errors()[0].message.ends_with("You're 1 point over."));
    }

    #[test]
    fn underspending_is_an_info_note() {
        let scores = AbilityScores::uniform(8);
        let result = validate_point_buy_scores(&scores);
        assert!(result.is_valid());
        assert_eq!(result.warnings()[0].code, codes::POINT_BUY_POINTS_REMAINING);
        assert_eq!(result.warnings()[0].message, "You have 27 points left to spend");
    }

    #[test]
    fn out_of_range_scores_skip_the_budget_check() {
        let scores = AbilityScores::new(16, 7, 15, 15, 15, 15);
        let result = validate_point_buy_scores(&scores);

        let codes: Vec<_> = result.errors().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![codes::POINT_BUY_SCORE_TOO_HIGH, codes::POINT_BUY_SCORE_TOO_LOW]
        );
        assert_eq!(calculate_total_points_spent(&scores), None);
    }

    #[test]
    fn increase_is_blocked_at_the_cap_and_by_budget() {
        assert_eq!(
            can_increase_score(15, 0).reason.as_deref(),
            Some("Maximum score of 15 reached")
        );
        // 13 -> 14 costs 2
        let blocked = can_increase_score(13, 26);
        assert!(!blocked.allowed);
        assert_eq!(
            blocked.reason.as_deref(),
            Some("Need 2 points, but only 1 available")
        );
        assert!(can_increase_score(13, 25).allowed);
    }

    #[test]
    fn increase_from_below_the_table_is_invalid() {
        assert_eq!(
            can_increase_score(5, 0).reason.as_deref(),
            Some("Invalid score")
        );
    }

    #[test]
    fn decrease_stops_at_the_floor() {
        assert!(!can_decrease_score(8).allowed);
        assert!(can_decrease_score(9).allowed);
        assert_eq!(points_freed_by_decrease(8), 0);
        assert_eq!(points_freed_by_decrease(15), 2);
        assert_eq!(points_freed_by_decrease(9), 1);
        assert_eq!(points_freed_by_decrease(18), 0);
    }

    #[test]
    fn summary_breaks_down_each_ability() {
        let summary = point_buy_summary(&standard());
        assert_eq!(summary.total_spent, 27);
        assert_eq!(summary.remaining, 0);
        assert_eq!(summary.breakdown[&Ability::Str], 9);
        assert_eq!(summary.breakdown[&Ability::Cha], 0);
        assert!(summary.is_valid);
    }

    #[test]
    fn summary_flags_invalid_scores_and_overspending() {
        let summary = point_buy_summary(&AbilityScores::new(18, 8, 8, 8, 8, 8));
        assert!(!summary.is_valid);
        assert_eq!(summary.breakdown[&Ability::Str], 0);

        let summary = point_buy_summary(&AbilityScores::uniform(15));
        assert_eq!(summary.remaining, -27);
        assert!(!summary.is_valid);
    }

    #[test]
    fn configured_budget_is_respected() {
        let config = PointBuyConfig {
            total_points: 32,
            ..PointBuyConfig::default()
        };
        let scores = AbilityScores::new(15, 15, 13, 10, 10, 9);
        let result = config.validate_scores(&scores);
        assert!(result.is_valid());
        assert_eq!(result.warnings()[0].message, "You have 4 points left to spend");
    }

    #[test]
    fn configured_range_narrows_purchasable_scores() {
        let config = PointBuyConfig {
            max_score: 14,
            ..PointBuyConfig::default()
        };
        assert_eq!(config.cost(15), None);
        let result = config.validate_score(Ability::Dex, 15);
        assert_eq!(result.errors()[0].message, "DEX cannot exceed 14 in point buy");
    }

    #[test]
    fn summary_serializes_camel_case() {
        let json = serde_json::to_value(point_buy_summary(&standard())).unwrap();
        assert_eq!(json["totalSpent"], 27);
        assert_eq!(json["breakdown"]["str"], 9);
    }
}
