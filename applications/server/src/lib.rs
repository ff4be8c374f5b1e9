//! Jukebox Server Library
//!
//! Serves the song catalog and the static player assets.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod library;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use library::SongLibrary;
pub use state::AppState;
