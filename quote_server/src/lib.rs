//!
//! Development HTTP endpoint for the Daily Quotes workspace.
//!
//! Serves a quote dataset in the exact record-array shape the provider's
//! remote path expects, so that path can be exercised end to end without
//! relying on an external service.
#![warn(missing_docs)]
use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use quote_provider::QuoteRecord;

/// Builds the server router.
///
/// - `GET /quotes` — the full record array as JSON.
/// - `GET /health` — plain `ok`.
pub fn app_router(records: Vec<QuoteRecord>) -> Router {
    let records = Arc::new(records);
    Router::new()
        .route("/quotes", get(list_quotes))
        .route("/health", get(|| async { "ok" }))
        .with_state(records)
}

async fn list_quotes(State(records): State<Arc<Vec<QuoteRecord>>>) -> Json<Vec<QuoteRecord>> {
    Json(records.as_ref().clone())
}
