//! Point-buy cost table and the standard array.

use crate::types::AbilityScores;

/// SRD point-buy budget.
pub const POINT_BUY_BUDGET: u32 = 27;
/// Lowest purchasable score.
pub const POINT_BUY_MIN_SCORE: i32 = 8;
/// Highest purchasable score (before racial bonuses).
pub const POINT_BUY_MAX_SCORE: i32 = 15;

// Cost of scores 8..=15, index 0 = score 8
const POINT_BUY_COSTS: [u32; 8] = [0, 1, 2, 3, 4, 5, 7, 9];

/// The SRD standard array.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// Cost of a single score, or `None` when the score cannot be bought.
pub fn point_buy_cost(score: i32) -> Option<u32> {
    if !(POINT_BUY_MIN_SCORE..=POINT_BUY_MAX_SCORE).contains(&score) {
        return None;
    }
    let index = usize::try_from(score - POINT_BUY_MIN_SCORE).ok()?;
    POINT_BUY_COSTS.get(index).copied()
}

/// Whether the six scores are a permutation of [`STANDARD_ARRAY`].
pub fn is_standard_array(scores: &AbilityScores) -> bool {
    let mut values: Vec<i32> = scores.iter().map(|(_, score)| score).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values == STANDARD_ARRAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_curve() {
        let costs: Vec<_> = (8..=15).filter_map(point_buy_cost).collect();
        assert_eq!(costs, vec![0, 1, 2, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn out_of_range_scores_have_no_cost() {
        assert_eq!(point_buy_cost(7), None);
        assert_eq!(point_buy_cost(16), None);
        assert_eq!(point_buy_cost(-3), None);
    }

    #[test]
    fn standard_array_in_any_order() {
        assert!(is_standard_array(&AbilityScores::new(8, 10, 12, 13, 14, 15)));
        assert!(!is_standard_array(&AbilityScores::new(15, 15, 13, 12, 10, 8)));
    }
}
