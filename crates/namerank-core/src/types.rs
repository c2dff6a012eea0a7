use crate::util::round1;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which frequency table a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NameKind {
    First,
    Last,
}

/// Per-component breakdown of a single name's uniqueness score.
///
/// `total_score` is the externally meaningful value; the components are kept
/// for diagnostics and testing. Values are full precision — call
/// [`ScoreComponents::rounded`] at reporting boundaries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponents {
    pub frequency_score: f64,
    pub structural_score: f64,
    pub letter_uniqueness: f64,
    pub total_score: f64,
}

impl ScoreComponents {
    pub fn rounded(&self) -> Self {
        Self {
            frequency_score: round1(self.frequency_score),
            structural_score: round1(self.structural_score),
            letter_uniqueness: round1(self.letter_uniqueness),
            total_score: round1(self.total_score),
        }
    }
}
