use crate::scorer::Scorer;
use serde::Serialize;
use std::cmp::Ordering;

/// One entry in a batch scoring request. A blank side of a `Full` query
/// degrades to single-name scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameQuery {
    Full { first: String, last: String },
    First(String),
    Last(String),
}

impl NameQuery {
    pub fn full(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self::Full {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn first(name: impl Into<String>) -> Self {
        Self::First(name.into())
    }

    pub fn last(name: impl Into<String>) -> Self {
        Self::Last(name.into())
    }

    fn label(&self) -> String {
        match self {
            Self::Full { first, last } => {
                if last.trim().is_empty() {
                    first.clone()
                } else {
                    format!("{} {}", first, last)
                }
            }
            Self::First(name) | Self::Last(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedName {
    pub label: String,
    pub score: f64,
}

/// Score every entry and return them sorted by score descending. The sort
/// is stable: equal scores keep their request order.
pub fn compare(scorer: &Scorer, entries: &[NameQuery]) -> Vec<RankedName> {
    let mut ranked: Vec<RankedName> = entries
        .iter()
        .map(|query| {
            let score = match query {
                NameQuery::Full { first, last } => scorer.score_full_name(first, last),
                NameQuery::First(name) => scorer.score_first_name(name),
                NameQuery::Last(name) => scorer.score_last_name(name),
            };
            RankedName {
                label: query.label(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}
