// Core scoring engine: frequency tables, weight configuration, the
// per-name score engine, the first+last combiner, and the batch ranker.
pub mod authors;
pub mod config;
pub mod error;
pub mod loader;
pub mod scorer;
pub mod table;
pub mod types;
pub mod util;

pub use config::ScoringWeights;
pub use error::{NameRankError, NrResult};
pub use scorer::{NameQuery, RankedName, Scorer};
pub use table::FrequencyTable;
pub use types::{NameKind, ScoreComponents};
