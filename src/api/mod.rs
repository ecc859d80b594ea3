//! HTTP API handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::impact::ImpactData;
use crate::nav::{Cta, NavItemSpec, NavTree};

/// `Cache-Control` for `/api/impact`: 10 minutes at the edge.
pub const IMPACT_CACHE_CONTROL: &str = "s-maxage=600, stale-while-revalidate=59";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub nav: Arc<NavTree>,
    pub cta: Cta,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(nav: NavTree, cta: Cta) -> Self {
        Self {
            nav: Arc::new(nav),
            cta,
            started_at: Instant::now(),
        }
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub nav_items: usize,
}

/// GET /status
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        service: "zypp-web",
        version: env!("ZYPP_VERSION"),
        git_sha: env!("ZYPP_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        nav_items: state.nav.len(),
    })
}

/// GET /api/impact - placeholder figures.
///
/// Nothing on the site consumes this yet; the impact section animates
/// built-in figures.
pub async fn impact_handler() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, IMPACT_CACHE_CONTROL)],
        Json(ImpactData::placeholder(Utc::now())),
    )
}

/// GET /api/nav - the navigation tree in wire form
pub async fn nav_handler(State(state): State<AppState>) -> Json<Vec<NavItemSpec>> {
    Json(state.nav.to_specs())
}
