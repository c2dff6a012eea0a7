use clap::{Parser, Subcommand};
use namerank_core::Scorer;
use std::path::PathBuf;
use tracing::{info, warn};

mod client;
mod db;
mod export;
mod models;
mod pipeline;
mod store;

use crate::client::ReviewsClient;
use crate::store::Store;

#[derive(Parser)]
#[command(author, version, about = "Harvest app reviews and score their authors' names")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value = "sqlite://reviews.db")]
    db: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Page an app's reviews into the local database, resuming where the
    /// last run stopped.
    Harvest {
        /// App ids to pull reviews for.
        #[arg(long, required = true)]
        apps: Vec<String>,

        #[arg(long, default_value = "https://public-api.apptweak.com")]
        api_url: String,

        #[arg(long)]
        api_key: String,

        #[arg(long, default_value = "us")]
        country: String,

        #[arg(long, default_value_t = 100)]
        page_size: i64,

        /// Stop after this many reviews per app.
        #[arg(long, default_value_t = 500_000)]
        max_reviews: u64,
    },

    /// Export the stored reviews to a timestamped CSV.
    Export {
        #[arg(long, default_value = "exports")]
        out_dir: PathBuf,
    },

    /// Simplify and score every stored author name into a ranked CSV.
    ScoreAuthors {
        #[arg(long, default_value = "data/first_names")]
        first_names: PathBuf,

        #[arg(long)]
        last_names: Option<PathBuf>,

        #[arg(long, default_value = "author_scores.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let pool = db::init_db(&cli.db).await?;
    let store = Store::new(pool);

    match cli.command {
        Commands::Harvest {
            apps,
            api_url,
            api_key,
            country,
            page_size,
            max_reviews,
        } => {
            let client = ReviewsClient::new(api_url, api_key, country);
            for app_id in apps {
                harvest_app(&store, &client, &app_id, page_size, max_reviews).await?;
            }
        }
        Commands::Export { out_dir } => {
            export::export_reviews(&store, &out_dir).await?;
        }
        Commands::ScoreAuthors {
            first_names,
            last_names,
            out,
        } => {
            info!("Initializing name scorer...");
            let scorer = Scorer::new(&first_names, last_names.as_ref(), None)?;
            pipeline::score_authors(&store, &scorer, &out).await?;
        }
    }

    Ok(())
}

async fn harvest_app(
    store: &Store,
    client: &ReviewsClient,
    app_id: &str,
    page_size: i64,
    max_reviews: u64,
) -> anyhow::Result<()> {
    let mut offset = store.scrape_offset(app_id).await?;
    let mut total_fetched = 0u64;

    info!("Harvesting {} from offset {}", app_id, offset);

    loop {
        let page = client.fetch_page(app_id, offset, page_size).await?;
        if page.is_empty() {
            info!("No more reviews for {}. Stopping.", app_id);
            break;
        }

        let inserted = store.insert_reviews(app_id, &page).await?;
        total_fetched += page.len() as u64;
        offset += page_size;

        // Persist the offset per page so an interrupted run resumes here.
        store.set_scrape_offset(app_id, offset).await?;
        info!(
            "Offset {}: {} fetched, {} new for {}",
            offset,
            page.len(),
            inserted,
            app_id
        );

        if total_fetched >= max_reviews {
            warn!(
                "Reached the {}-review cap for {}; stopping early",
                max_reviews, app_id
            );
            break;
        }
    }

    Ok(())
}
