use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub async fn init_db(db_url: &str) -> anyhow::Result<Pool<Sqlite>> {
    info!("🔌 Opening review database at {}", db_url);

    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    let schema = include_str!("../schema.sql");
    for statement in schema.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(&pool).await?;
    }

    info!("✅ Database ready, schema applied");
    Ok(pool)
}
