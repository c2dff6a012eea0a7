pub mod combine;
pub mod engine;
pub mod rank;

pub use self::rank::{NameQuery, RankedName};
use crate::config::ScoringWeights;
use crate::error::NrResult;
use crate::loader;
use crate::table::FrequencyTable;
use crate::types::{NameKind, ScoreComponents};
use crate::util::{normalize_name, round1};
use std::path::Path;

/// The published scoring engine: two immutable frequency tables plus a
/// weight configuration, built once at startup. Scoring calls are pure
/// reads and may run concurrently without locks.
pub struct Scorer {
    pub weights: ScoringWeights,
    first_names: FrequencyTable,
    last_names: FrequencyTable,
}

impl Scorer {
    /// Build from on-disk sources. The given-name directory must be
    /// readable; surname sources degrade per the loader's failure policy.
    pub fn new<P1: AsRef<Path>, P2: AsRef<Path>>(
        first_name_dir: P1,
        last_name_source: Option<P2>,
        weights: Option<ScoringWeights>,
    ) -> NrResult<Self> {
        let first_names = loader::load_given_names(first_name_dir)?;
        let last_names = loader::load_surnames(last_name_source);
        Ok(Self::from_tables(first_names, last_names, weights))
    }

    /// Build from prebuilt tables (tests, embedded data, table refresh).
    pub fn from_tables(
        first_names: FrequencyTable,
        last_names: FrequencyTable,
        weights: Option<ScoringWeights>,
    ) -> Self {
        Self {
            weights: weights.unwrap_or_default(),
            first_names,
            last_names,
        }
    }

    pub fn first_names(&self) -> &FrequencyTable {
        &self.first_names
    }

    pub fn last_names(&self) -> &FrequencyTable {
        &self.last_names
    }

    /// Full-precision component breakdown for a first name.
    pub fn first_name_components(&self, name: &str) -> ScoreComponents {
        engine::score_name(name, &self.first_names, &self.weights)
    }

    /// Full-precision component breakdown for a last name.
    pub fn last_name_components(&self, name: &str) -> ScoreComponents {
        engine::score_name(name, &self.last_names, &self.weights)
    }

    pub fn score_first_name(&self, name: &str) -> f64 {
        round1(self.first_name_components(name).total_score)
    }

    pub fn score_last_name(&self, name: &str) -> f64 {
        round1(self.last_name_components(name).total_score)
    }

    /// Combined first+last score. With only one side supplied the combiner
    /// is bypassed and that side's score is returned directly.
    pub fn score_full_name(&self, first: &str, last: &str) -> f64 {
        if last.trim().is_empty() {
            return self.score_first_name(first);
        }
        if first.trim().is_empty() {
            return self.score_last_name(last);
        }
        let first_total = self.first_name_components(first).total_score;
        let last_total = self.last_name_components(last).total_score;
        combine::combine_scores(first_total, last_total, &self.weights)
    }

    pub fn compare(&self, entries: &[NameQuery]) -> Vec<RankedName> {
        rank::compare(self, entries)
    }

    pub fn name_exists(&self, name: &str, kind: NameKind) -> bool {
        let normalized = normalize_name(name);
        match kind {
            NameKind::First => self.first_names.contains(&normalized),
            NameKind::Last => self.last_names.contains(&normalized),
        }
    }
}
