use crate::models::ReviewRecord;
use sqlx::{FromRow, Pool, Row, Sqlite};

#[derive(Clone)]
pub struct Store {
    pub db: Pool<Sqlite>,
}

/// A full review row, as exported.
#[derive(Debug, Clone, FromRow)]
pub struct StoredReview {
    pub id: i64,
    pub app_id: Option<String>,
    pub review_id: Option<String>,
    pub rating: Option<i64>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub author_name: Option<String>,
    pub author_photo: Option<String>,
    pub author_profile: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub body_length: Option<i64>,
    pub version: Option<String>,
    pub developer_reply: Option<String>,
    pub developer_reply_date: Option<String>,
}

/// One review's worth of context for an author, used by the scoring
/// pipeline's output.
#[derive(Debug, Clone, FromRow)]
pub struct AuthorReview {
    pub author_name: String,
    pub rating: Option<i64>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub review_id: Option<String>,
    pub app_id: Option<String>,
    pub body: Option<String>,
}

impl Store {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    /// Insert a page of reviews, ignoring ones already stored (the
    /// review_id column is UNIQUE). Returns how many rows were new.
    pub async fn insert_reviews(
        &self,
        app_id: &str,
        reviews: &[ReviewRecord],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for review in reviews {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO reviews (
                    app_id, review_id, rating, date, language,
                    author_name, author_photo, author_profile,
                    title, body, body_length, version,
                    developer_reply, developer_reply_date
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(app_id)
            .bind(&review.id)
            .bind(review.rating)
            .bind(&review.date)
            .bind(&review.language)
            .bind(&review.author.name)
            .bind(&review.author.photo)
            .bind(&review.author.profile)
            .bind(&review.title)
            .bind(&review.body)
            .bind(review.body_length)
            .bind(&review.version)
            .bind(&review.developer_reply)
            .bind(&review.developer_reply_date)
            .execute(&self.db)
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// Last pagination offset fetched for an app; 0 when unseen.
    pub async fn scrape_offset(&self, app_id: &str) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT last_offset FROM scrape_state WHERE app_id = ?")
            .bind(app_id)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.map(|r| r.get::<i64, _>(0)).unwrap_or(0))
    }

    pub async fn set_scrape_offset(&self, app_id: &str, offset: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO scrape_state (app_id, last_offset) VALUES (?, ?)
             ON CONFLICT(app_id) DO UPDATE SET last_offset = excluded.last_offset",
        )
        .bind(app_id)
        .bind(offset)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    pub async fn all_reviews(&self) -> Result<Vec<StoredReview>, sqlx::Error> {
        sqlx::query_as::<_, StoredReview>(
            "SELECT id, app_id, review_id, rating, date, language,
                    author_name, author_photo, author_profile,
                    title, body, body_length, version,
                    developer_reply, developer_reply_date
             FROM reviews ORDER BY date DESC",
        )
        .fetch_all(&self.db)
        .await
    }

    /// Every named author with the details of one of their reviews.
    pub async fn author_reviews(&self) -> Result<Vec<AuthorReview>, sqlx::Error> {
        sqlx::query_as::<_, AuthorReview>(
            "SELECT author_name, rating, title, date, review_id, app_id, body
             FROM reviews
             WHERE author_name IS NOT NULL AND author_name != ''
             GROUP BY author_name",
        )
        .fetch_all(&self.db)
        .await
    }
}
