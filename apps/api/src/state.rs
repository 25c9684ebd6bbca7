use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::content::keywords::SectionKeywords;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Section-header vocabulary for the content normalizer. Injectable so a
    /// locale can be added without touching the splitting algorithm.
    pub keywords: Arc<SectionKeywords>,
}
