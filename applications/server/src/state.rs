/// Shared application state
use crate::library::SongLibrary;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<SongLibrary>,
}

impl AppState {
    pub fn new(library: Arc<SongLibrary>) -> Self {
        Self { library }
    }
}
