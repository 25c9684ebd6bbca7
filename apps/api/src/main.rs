mod config;
mod content;
mod db;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::keywords::SectionKeywords;
use crate::db::create_pool;
use crate::matching::salary::WorkHoursBaseline;
use crate::matching::scorer::{MatchWeights, WeightedMatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize the match scorer with the configured salary baseline
    let scorer = Arc::new(WeightedMatchScorer {
        weights: MatchWeights::default(),
        baseline: WorkHoursBaseline {
            days_per_month: config.work_days_per_month,
            hours_per_day: config.work_hours_per_day,
        },
    });
    info!(
        "Match scorer initialized (notify threshold: {})",
        config.match_notify_threshold
    );

    // Section-header vocabulary (Vietnamese + English defaults)
    let keywords = Arc::new(SectionKeywords::default());

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        scorer,
        keywords,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
