//! Jukebox Core
//!
//! Platform-agnostic core types, traits, and error handling for Jukebox.
//!
//! This crate provides the building blocks shared by the playback sequencer,
//! the playlist store, and the catalog server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Catalog`, `Playlist`
//! - **Collaborator Traits**: `KeyValueStore`, `PlaylistLookup`
//! - **Error Handling**: Unified `JukeboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use jukebox_core::{Catalog, Track};
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("intro.mp3", "intro", "/static/songs/intro.mp3", "/static/default.jpg"),
//!     Track::new("outro.mp3", "outro", "/static/songs/outro.mp3", "/static/default.jpg"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.position_of("outro.mp3"), Some(1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{JukeboxError, Result};
pub use traits::{KeyValueStore, PlaylistLookup};
pub use types::{Catalog, Playlist, Track};

/// Key holding the whole playlist store in the key-value collaborator
pub const PLAYLISTS_KEY: &str = "mp_playlists";

/// Image shown when a track has no thumbnail or its thumbnail fails to load
pub const DEFAULT_THUMBNAIL: &str = "/static/default.jpg";
