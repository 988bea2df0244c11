//! Rules configuration

use std::env;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use charforge_domain::dnd5e::{POINT_BUY_BUDGET, POINT_BUY_MAX_SCORE, POINT_BUY_MIN_SCORE};

/// Tunable limits applied by the validators.
///
/// Defaults are the SRD values. Hosts can embed this in their own settings
/// (it deserializes from camelCase) or load it with [`RulesConfig::from_env`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    pub point_buy: PointBuyConfig,
    pub ability_scores: AbilityScoreLimits,
}

/// Point-buy budget and purchasable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointBuyConfig {
    pub total_points: u32,
    pub min_score: i32,
    pub max_score: i32,
}

impl Default for PointBuyConfig {
    fn default() -> Self {
        Self {
            total_points: POINT_BUY_BUDGET,
            min_score: POINT_BUY_MIN_SCORE,
            max_score: POINT_BUY_MAX_SCORE,
        }
    }
}

/// Bounds for a single ability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityScoreLimits {
    /// Hard lower bound
    pub minimum: i32,
    /// Above this (up to the absolute maximum) is legal but flagged
    pub normal_maximum: i32,
    /// Hard upper bound
    pub absolute_maximum: i32,
}

impl Default for AbilityScoreLimits {
    fn default() -> Self {
        Self {
            minimum: 1,
            normal_maximum: 20,
            absolute_maximum: 30,
        }
    }
}

/// A configuration the rule tables cannot honor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("point-buy range {min}..={max} must lie within {floor}..={ceiling}")]
    PointBuyOutOfTable {
        min: i32,
        max: i32,
        floor: i32,
        ceiling: i32,
    },

    #[error("{field} minimum {min} exceeds maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

impl RulesConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup; unset keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            point_buy: PointBuyConfig {
                total_points: parse_or(
                    &lookup,
                    "CHARFORGE_POINT_BUY_TOTAL",
                    defaults.point_buy.total_points,
                )?,
                min_score: parse_or(
                    &lookup,
                    "CHARFORGE_POINT_BUY_MIN",
                    defaults.point_buy.min_score,
                )?,
                max_score: parse_or(
                    &lookup,
                    "CHARFORGE_POINT_BUY_MAX",
                    defaults.point_buy.max_score,
                )?,
            },
            ability_scores: AbilityScoreLimits {
                minimum: parse_or(
                    &lookup,
                    "CHARFORGE_ABILITY_MIN",
                    defaults.ability_scores.minimum,
                )?,
                normal_maximum: parse_or(
                    &lookup,
                    "CHARFORGE_ABILITY_NORMAL_MAX",
                    defaults.ability_scores.normal_maximum,
                )?,
                absolute_maximum: parse_or(
                    &lookup,
                    "CHARFORGE_ABILITY_ABSOLUTE_MAX",
                    defaults.ability_scores.absolute_maximum,
                )?,
            },
        };

        config
            .validate()
            .context("Invalid rules configuration")?;

        tracing::info!(
            point_buy_total = config.point_buy.total_points,
            point_buy_min = config.point_buy.min_score,
            point_buy_max = config.point_buy.max_score,
            ability_min = config.ability_scores.minimum,
            ability_normal_max = config.ability_scores.normal_maximum,
            ability_absolute_max = config.ability_scores.absolute_maximum,
            "Loaded rules configuration"
        );

        Ok(config)
    }

    /// Reject limits the cost table cannot price or that contradict each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PointBuyConfig {
            min_score,
            max_score,
            ..
        } = self.point_buy;

        if min_score < POINT_BUY_MIN_SCORE || max_score > POINT_BUY_MAX_SCORE {
            return Err(ConfigError::PointBuyOutOfTable {
                min: min_score,
                max: max_score,
                floor: POINT_BUY_MIN_SCORE,
                ceiling: POINT_BUY_MAX_SCORE,
            });
        }
        if min_score > max_score {
            return Err(ConfigError::InvertedRange {
                field: "point buy score",
                min: min_score,
                max: max_score,
            });
        }

        let limits = self.ability_scores;
        if limits.minimum > limits.normal_maximum {
            return Err(ConfigError::InvertedRange {
                field: "ability score",
                min: limits.minimum,
                max: limits.normal_maximum,
            });
        }
        if limits.normal_maximum > limits.absolute_maximum {
            return Err(ConfigError::InvertedRange {
                field: "ability score normal maximum",
                min: limits.normal_maximum,
                max: limits.absolute_maximum,
            });
        }

        Ok(())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a whole number, got {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_are_srd_values() {
        let config = RulesConfig::default();
        assert_eq!(config.point_buy.total_points, 27);
        assert_eq!(config.point_buy.min_score, 8);
        assert_eq!(config.point_buy.max_score, 15);
        assert_eq!(config.ability_scores.minimum, 1);
        assert_eq!(config.ability_scores.normal_maximum, 20);
        assert_eq!(config.ability_scores.absolute_maximum, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unset_keys_keep_defaults() {
        let config = RulesConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = RulesConfig::from_lookup(lookup_from(&[
            ("CHARFORGE_POINT_BUY_TOTAL", "32"),
            ("CHARFORGE_ABILITY_NORMAL_MAX", " 24 "),
        ]))
        .unwrap();
        assert_eq!(config.point_buy.total_points, 32);
        assert_eq!(config.ability_scores.normal_maximum, 24);
    }

    #[test]
    fn unparsable_value_names_the_key() {
        let err = RulesConfig::from_lookup(lookup_from(&[("CHARFORGE_POINT_BUY_TOTAL", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("CHARFORGE_POINT_BUY_TOTAL"));
    }

    #[test]
    fn point_buy_range_must_fit_cost_table() {
        let err = RulesConfig::from_lookup(lookup_from(&[("CHARFORGE_POINT_BUY_MAX", "16")]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::PointBuyOutOfTable { max: 16, .. })
        ));
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let mut config = RulesConfig::default();
        config.ability_scores.normal_maximum = 31;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));

        let mut config = RulesConfig::default();
        config.point_buy.min_score = 14;
        config.point_buy.max_score = 12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_partial_settings() {
        let config: RulesConfig =
            serde_json::from_str(r#"{"pointBuy": {"totalPoints": 30}}"#).unwrap();
        assert_eq!(config.point_buy.total_points, 30);
        assert_eq!(config.point_buy.max_score, 15);
        assert_eq!(config.ability_scores, AbilityScoreLimits::default());
    }
}
