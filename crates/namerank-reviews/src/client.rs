use crate::models::{ReviewRecord, ReviewsEnvelope};
use chrono::Utc;
use reqwest::Client;
use tracing::debug;

/// Thin client for the paginated third-party reviews API.
pub struct ReviewsClient {
    http: Client,
    base_url: String,
    api_key: String,
    country: String,
}

impl ReviewsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            country: country.into(),
        }
    }

    /// Fetch one page of an app's reviews, newest first. An empty page
    /// means the listing is exhausted.
    pub async fn fetch_page(
        &self,
        app_id: &str,
        offset: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<ReviewRecord>> {
        let url = format!(
            "{}/api/public/store/apps/reviews/search.json",
            self.base_url
        );
        let end_date = Utc::now().format("%Y-%m-%d").to_string();
        let limit = limit.to_string();
        let offset = offset.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("apps", app_id),
                ("country", self.country.as_str()),
                ("language", "us"),
                ("device", "android"),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
                ("sort", "most_recent"),
                ("start_date", "2016-01-01"),
                ("end_date", end_date.as_str()),
            ])
            .header("accept", "application/json")
            .header("x-apptweak-key", &self.api_key)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ReviewsEnvelope = response.json().await?;
        let reviews = envelope
            .result
            .get(app_id)
            .map(|app| app.reviews.clone())
            .unwrap_or_default();

        debug!(
            "Fetched {} reviews for {} at offset {}",
            reviews.len(),
            app_id,
            offset
        );
        Ok(reviews)
    }
}
