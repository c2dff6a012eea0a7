use serde::Deserialize;
use std::collections::HashMap;

/// Top-level payload of the reviews search endpoint: results are keyed by
/// app id.
#[derive(Debug, Deserialize)]
pub struct ReviewsEnvelope {
    #[serde(default)]
    pub result: HashMap<String, AppReviews>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppReviews {
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRecord {
    pub id: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub body_length: i64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub developer_reply: Option<String>,
    #[serde(default)]
    pub developer_reply_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub profile: String,
}
