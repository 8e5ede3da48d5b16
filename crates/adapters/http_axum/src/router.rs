//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use dinehub_app::ports::{
    AddressRepository, DiningLocationRepository, MealPlanRepository, PersonRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts `/health` and the resource routes at the root. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<PR, AR, MR, DR>(state: AppState<PR, AR, MR, DR>) -> Router
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
