use clap::Parser;
use namerank_core::{Scorer, ScoringWeights};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod routes;
mod state;

use crate::state::AppState;

#[derive(Parser)]
struct Args {
    #[arg(long, short, default_value = "data/first_names")]
    first_names: PathBuf,

    #[arg(long, short)]
    last_names: Option<PathBuf>,

    #[arg(long)]
    weights: Option<PathBuf>,

    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("Initializing name tables from {:?}", args.first_names);

    let weights = match &args.weights {
        Some(path) => Some(ScoringWeights::load_from_file(path)?),
        None => None,
    };

    // Tables are built fully before the listener opens; handlers only ever
    // see the published, immutable scorer.
    let scorer = Scorer::new(&args.first_names, args.last_names.as_ref(), weights)?;
    let state = Arc::new(AppState::new(scorer));

    let app = routes::api_routes()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 namerank API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
