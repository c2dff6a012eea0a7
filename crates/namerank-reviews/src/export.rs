use crate::store::Store;
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const COLUMNS: [&str; 15] = [
    "id",
    "app_id",
    "review_id",
    "rating",
    "date",
    "language",
    "author_name",
    "author_photo",
    "author_profile",
    "title",
    "body",
    "body_length",
    "version",
    "developer_reply",
    "developer_reply_date",
];

/// Dump the reviews table into a timestamped CSV under `out_dir` and
/// return the file path.
pub async fn export_reviews(store: &Store, out_dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = out_dir.join(format!("reviews_export_{}.csv", timestamp));

    let reviews = store.all_reviews().await?;

    let mut wtr = csv::Writer::from_path(&path)?;
    wtr.write_record(COLUMNS)?;

    for review in &reviews {
        wtr.write_record([
            review.id.to_string(),
            review.app_id.clone().unwrap_or_default(),
            review.review_id.clone().unwrap_or_default(),
            review.rating.map(|r| r.to_string()).unwrap_or_default(),
            format_date(review.date.as_deref().unwrap_or("")),
            review.language.clone().unwrap_or_default(),
            review.author_name.clone().unwrap_or_default(),
            review.author_photo.clone().unwrap_or_default(),
            review.author_profile.clone().unwrap_or_default(),
            review.title.clone().unwrap_or_default(),
            review.body.clone().unwrap_or_default(),
            review.body_length.map(|l| l.to_string()).unwrap_or_default(),
            review.version.clone().unwrap_or_default(),
            review.developer_reply.clone().unwrap_or_default(),
            format_date(review.developer_reply_date.as_deref().unwrap_or("")),
        ])?;
    }
    wtr.flush()?;

    info!("Exported {} reviews to {:?}", reviews.len(), path);
    Ok(path)
}

/// ISO-8601 `2025-01-14T00:14:30Z` becomes `2025-01-14 00:14:30`; anything
/// else passes through untouched.
fn format_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}
