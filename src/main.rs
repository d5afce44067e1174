mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod state;
mod store;

use axum::{Router, routing::get};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Args;
use crate::handlers::{health_handler, metrics_handler, visit_handler};
use crate::state::AppState;
use crate::store::SqliteVisitStore;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // parse cli arguments
    let args = Args::parse();

    // open the counter database - the file (and its directory) are created on first run
    let store = SqliteVisitStore::open(&args.db_path)
        .await
        .expect("failed to open visit database");

    // creating shared state
    let state = Arc::new(AppState {
        store: Arc::new(store),
    });

    // every path that is not /health or /metrics gets counted
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .fallback(visit_handler)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Visit counter running on http://localhost:{}", args.port);
    tracing::info!("Counting visits in {}", args.db_path);
    axum::serve(listener, app).await.unwrap();
}
