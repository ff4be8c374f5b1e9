/// API route modules
pub mod home;
pub mod songs;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// `/static` serves files straight from the library's static directory.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.library.static_dir());

    Router::new()
        .route("/", get(home::home))
        .route("/songs", get(songs::list_songs))
        .nest_service("/static", static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
