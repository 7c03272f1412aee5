//! lifedash: a personal dashboard service keeping per-user widget records
//! (study resources, playlists, finance entries, ...) in memory behind a
//! uniform JSON CRUD surface.

pub mod api_envelope;
pub mod config;
pub mod routes;
pub mod schema;
pub mod store;


use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: RecordStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: RecordStore::new(),
        }
    }
}

/// Assembles the full service: one generic CRUD router per widget entity,
/// the auth/user routes, a liveness probe, and the request-id + trace
/// middleware stack.
pub fn build_router(state: AppState) -> Router {
    let store = state.store.clone();
    let api = Router::new()
        .merge(routes::auth_router(state))
        .nest(
            "/study-resources",
            routes::entity_router(store.study_resources),
        )
        .nest("/game-scores", routes::entity_router(store.game_scores))
        .nest("/playlists", routes::entity_router(store.playlists))
        .nest("/gym-exercises", routes::entity_router(store.gym_exercises))
        .nest("/health-data", routes::entity_router(store.health_entries))
        .nest(
            "/entertainment",
            routes::entity_router(store.entertainment_items),
        )
        .nest("/wishlist", routes::entity_router(store.wishlist_items))
        .nest("/finance", routes::entity_router(store.finance_entries))
        .nest("/documents", routes::entity_router(store.documents))
        .nest("/ai-tools", routes::entity_router(store.ai_tools))
        .nest("/shortcuts", routes::entity_router(store.shortcuts))
        .nest(
            "/performance",
            routes::entity_router(store.performance_metrics),
        );

    Router::new()
        .route("/healthz", get(routes::healthz))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
