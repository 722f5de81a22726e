pub mod handlers;
pub mod views;

use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::domain::store::SharedStore;

/// Everything a handler needs, handed out through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub delete_delay: Duration,
}

impl AppState {
    pub fn new(store: SharedStore, delete_delay: Duration) -> Self {
        Self {
            store,
            delete_delay,
        }
    }
}

pub fn router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/contacts", post(handlers::create_contact))
        .route("/contacts/:id", delete(handlers::delete_contact))
        .nest_service("/images", ServeDir::new(assets_dir.join("images")))
        .nest_service("/css", ServeDir::new(assets_dir.join("css")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
