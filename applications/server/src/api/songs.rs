/// Song catalog API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use jukebox_core::Track;

/// GET /songs - Every playable file in the library
///
/// The directory is rescanned on each request so new files show up without
/// a restart.
pub async fn list_songs(State(state): State<AppState>) -> Result<Json<Vec<Track>>> {
    let tracks = state.library.scan().await?;
    Ok(Json(tracks))
}
