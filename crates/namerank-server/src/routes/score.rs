use axum::{extract::State, http::StatusCode, Json};
use namerank_core::NameQuery;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScoreNameRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreNameResponse {
    pub score: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

pub async fn score_name(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScoreNameRequest>,
) -> Result<Json<ScoreNameResponse>, ApiError> {
    let first = payload.first_name.trim();
    let last = payload.last_name.trim();

    if first.is_empty() && last.is_empty() {
        return Err(bad_request("Please provide at least one name"));
    }

    let response = if !first.is_empty() && !last.is_empty() {
        info!("Scoring full name: {} {}", first, last);
        ScoreNameResponse {
            score: state.scorer.score_full_name(first, last),
            kind: "full".to_string(),
            full_name: Some(format!("{} {}", first, last)),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
        }
    } else if !first.is_empty() {
        info!("Scoring first name: {}", first);
        ScoreNameResponse {
            score: state.scorer.score_first_name(first),
            kind: "first".to_string(),
            full_name: None,
            first_name: Some(first.to_string()),
            last_name: None,
        }
    } else {
        info!("Scoring last name: {}", last);
        ScoreNameResponse {
            score: state.scorer.score_last_name(last),
            kind: "last".to_string(),
            full_name: None,
            first_name: None,
            last_name: Some(last.to_string()),
        }
    };

    Ok(Json(response))
}

/// One entry of a comparison request. Clients send pairs as two-element
/// arrays, labeled objects, or bare strings; mapping them onto the core's
/// query type happens here, not in the engine.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum CompareEntry {
    Pair(Vec<String>),
    Labeled {
        #[serde(default, rename = "firstName")]
        first_name: String,
        #[serde(default, rename = "lastName")]
        last_name: String,
    },
    Single(String),
}

impl CompareEntry {
    fn into_query(self) -> Option<NameQuery> {
        match self {
            CompareEntry::Pair(parts) => {
                let first = parts.first().map(|s| s.trim()).unwrap_or("");
                let last = parts.get(1).map(|s| s.trim()).unwrap_or("");
                pair_to_query(first, last)
            }
            CompareEntry::Labeled {
                first_name,
                last_name,
            } => pair_to_query(first_name.trim(), last_name.trim()),
            CompareEntry::Single(name) => Some(NameQuery::first(name)),
        }
    }
}

fn pair_to_query(first: &str, last: &str) -> Option<NameQuery> {
    match (first.is_empty(), last.is_empty()) {
        (false, false) => Some(NameQuery::full(first, last)),
        (false, true) => Some(NameQuery::first(first)),
        (true, false) => Some(NameQuery::last(last)),
        (true, true) => None,
    }
}

#[derive(Deserialize, Debug)]
pub struct CompareNamesRequest {
    #[serde(default)]
    pub names: Vec<CompareEntry>,
}

#[derive(Serialize)]
pub struct CompareResult {
    pub name: String,
    pub score: f64,
}

#[derive(Serialize)]
pub struct CompareNamesResponse {
    pub results: Vec<CompareResult>,
}

pub async fn compare_names(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CompareNamesRequest>,
) -> Result<Json<CompareNamesResponse>, ApiError> {
    if payload.names.is_empty() {
        return Err(bad_request("Please provide names to compare"));
    }

    let queries: Vec<NameQuery> = payload
        .names
        .into_iter()
        .filter_map(CompareEntry::into_query)
        .collect();

    info!("Comparing {} names", queries.len());

    let results = state
        .scorer
        .compare(&queries)
        .into_iter()
        .map(|entry| CompareResult {
            name: entry.label,
            score: entry.score,
        })
        .collect();

    Ok(Json(CompareNamesResponse { results }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use namerank_core::{FrequencyTable, Scorer};
    use std::collections::HashMap;

    fn test_state() -> State<Arc<AppState>> {
        let first: HashMap<String, u64> =
            [("John".to_string(), 20_000), ("Liam".to_string(), 980_000)]
                .into_iter()
                .collect();
        let last: HashMap<String, u64> = [
            ("Smith".to_string(), 15_000),
            ("Jones".to_string(), 985_000),
        ]
        .into_iter()
        .collect();

        let scorer = Scorer::from_tables(
            FrequencyTable::from_counts(first),
            FrequencyTable::from_counts(last),
            None,
        );
        State(Arc::new(AppState::new(scorer)))
    }

    #[tokio::test]
    async fn scores_a_full_name() {
        let response = score_name(
            test_state(),
            Json(ScoreNameRequest {
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.kind, "full");
        assert_eq!(response.full_name.as_deref(), Some("John Smith"));
        assert_eq!(response.score, 3.3);
    }

    #[tokio::test]
    async fn single_sided_requests_pick_the_right_table() {
        let response = score_name(
            test_state(),
            Json(ScoreNameRequest {
                first_name: String::new(),
                last_name: "Smith".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.kind, "last");
        assert_eq!(response.score, 8.2);
    }

    #[tokio::test]
    async fn empty_request_is_rejected() {
        let result = score_name(
            test_state(),
            Json(ScoreNameRequest {
                first_name: "  ".to_string(),
                last_name: String::new(),
            }),
        )
        .await;

        let (status, _) = result.err().expect("expected a 400");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn compare_accepts_heterogeneous_entries() {
        let payload: CompareNamesRequest = serde_json::from_value(serde_json::json!({
            "names": [
                ["John", "Smith"],
                {"firstName": "Zephyr"},
                "Liam",
                ["", ""]
            ]
        }))
        .unwrap();

        let response = compare_names(test_state(), Json(payload)).await.unwrap();

        // The empty pair is dropped; the unseen name ranks first and the
        // very common pair damps below the single common name.
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].name, "Zephyr");
        assert_eq!(response.results[1].name, "Liam");
        assert_eq!(response.results[2].name, "John Smith");
    }

    #[tokio::test]
    async fn compare_rejects_an_empty_list() {
        let payload = CompareNamesRequest { names: vec![] };
        let result = compare_names(test_state(), Json(payload)).await;
        assert!(result.is_err());
    }
}
