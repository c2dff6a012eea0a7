use crate::error::NrResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Weight configuration for the uniqueness engine. Component weights
/// nominally sum to 100 but this is not enforced.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === COMPONENT WEIGHTS ===
    #[arg(long, default_value_t = 80.0)]
    pub frequency_weight: f64,
    #[arg(long, default_value_t = 10.0)]
    pub structural_weight: f64,
    #[arg(long, default_value_t = 10.0)]
    pub letter_dist_weight: f64,

    // === UNSEEN NAMES ===
    #[arg(long, default_value_t = 100.0)]
    pub unknown_name_base_score: f64,
    #[arg(long, default_value_t = 15.0)]
    pub bigram_rarity_multiplier: f64,

    // === FREQUENCY TIERS ===
    // Thresholds are ascending relative frequencies; each tier carries a
    // base score plus a bonus that decays linearly toward the threshold.
    #[arg(long, default_value_t = 0.0005)]
    pub very_rare_threshold: f64,
    #[arg(long, default_value_t = 40.0)]
    pub very_rare_base_score: f64,
    #[arg(long, default_value_t = 20.0)]
    pub very_rare_bonus_max: f64,

    #[arg(long, default_value_t = 0.001)]
    pub uncommon_threshold: f64,
    #[arg(long, default_value_t = 20.0)]
    pub uncommon_base_score: f64,
    #[arg(long, default_value_t = 10.0)]
    pub uncommon_bonus_max: f64,

    #[arg(long, default_value_t = 0.005)]
    pub moderate_threshold: f64,
    #[arg(long, default_value_t = 10.0)]
    pub moderate_base_score: f64,
    #[arg(long, default_value_t = 5.0)]
    pub moderate_bonus_max: f64,

    #[arg(long, default_value_t = 0.01)]
    pub common_threshold: f64,
    #[arg(long, default_value_t = 5.0)]
    pub common_base_score: f64,
    #[arg(long, default_value_t = 5.0)]
    pub common_bonus_max: f64,

    #[arg(long, default_value_t = 5.0)]
    pub very_common_max_score: f64,
    #[arg(long, default_value_t = 0.2)]
    pub very_common_scale_factor: f64,

    // === STRUCTURE ===
    #[arg(long, default_value_t = 0.6)]
    pub length_factor_weight: f64,
    #[arg(long, default_value_t = 0.4)]
    pub unusual_chars_weight: f64,
    #[arg(long, default_value_t = 12.0)]
    pub max_name_length: f64,
    #[arg(long, default_value_t = 2.0)]
    pub max_unusual_chars: f64,

    // === COMBINATION ===
    #[arg(long, default_value_t = 0.6)]
    pub first_name_weight: f64,
    #[arg(long, default_value_t = 0.4)]
    pub last_name_weight: f64,
    #[arg(long, default_value_t = 70.0)]
    pub rare_combo_threshold: f64,
    #[arg(long, default_value_t = 20.0)]
    pub rare_combo_bonus: f64,
    #[arg(long, default_value_t = 40.0)]
    pub common_combo_threshold: f64,
    #[arg(long, default_value_t = 20.0)]
    pub common_combo_divisor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            frequency_weight: 80.0,
            structural_weight: 10.0,
            letter_dist_weight: 10.0,

            unknown_name_base_score: 100.0,
            bigram_rarity_multiplier: 15.0,

            very_rare_threshold: 0.0005,
            very_rare_base_score: 40.0,
            very_rare_bonus_max: 20.0,

            uncommon_threshold: 0.001,
            uncommon_base_score: 20.0,
            uncommon_bonus_max: 10.0,

            moderate_threshold: 0.005,
            moderate_base_score: 10.0,
            moderate_bonus_max: 5.0,

            common_threshold: 0.01,
            common_base_score: 5.0,
            common_bonus_max: 5.0,

            very_common_max_score: 5.0,
            very_common_scale_factor: 0.2,

            length_factor_weight: 0.6,
            unusual_chars_weight: 0.4,
            max_name_length: 12.0,
            max_unusual_chars: 2.0,

            first_name_weight: 0.6,
            last_name_weight: 0.4,
            rare_combo_threshold: 70.0,
            rare_combo_bonus: 20.0,
            common_combo_threshold: 40.0,
            common_combo_divisor: 20.0,
        }
    }
}

macro_rules! for_each_weight {
    ($macro:ident!($($args:tt)*)) => {
        $macro!(
            ($($args)*),
            frequency_weight,
            structural_weight,
            letter_dist_weight,
            unknown_name_base_score,
            bigram_rarity_multiplier,
            very_rare_threshold,
            very_rare_base_score,
            very_rare_bonus_max,
            uncommon_threshold,
            uncommon_base_score,
            uncommon_bonus_max,
            moderate_threshold,
            moderate_base_score,
            moderate_bonus_max,
            common_threshold,
            common_base_score,
            common_bonus_max,
            very_common_max_score,
            very_common_scale_factor,
            length_factor_weight,
            unusual_chars_weight,
            max_name_length,
            max_unusual_chars,
            first_name_weight,
            last_name_weight,
            rare_combo_threshold,
            rare_combo_bonus,
            common_combo_threshold,
            common_combo_divisor
        )
    };
}

macro_rules! set_by_name {
    (($self:ident, $key:ident, $value:ident), $($field:ident),*) => {{
        let mut applied = false;
        $(
            if !applied && $key == stringify!($field) {
                $self.$field = $value;
                applied = true;
            }
        )*
        applied
    }};
}

macro_rules! merge_cli {
    (($self:ident, $cli:ident, $matches:ident), $($field:ident),*) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $self.$field = $cli.$field;
            }
        )*
    };
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NrResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply caller overrides by parameter name. Keys that do not name a
    /// known weight are ignored.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, f64>) {
        for (key, &value) in overrides {
            let key = key.as_str();
            if !for_each_weight!(set_by_name!(self, key, value)) {
                debug!("Ignoring unknown weight override '{}'", key);
            }
        }
    }

    /// Overlay weights that were explicitly passed on the command line.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        for_each_weight!(merge_cli!(self, cli_weights, matches));
    }
}
