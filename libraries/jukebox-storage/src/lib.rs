//! Jukebox Storage
//!
//! Named playlists persisted through a string key-value collaborator.
//!
//! # Architecture
//!
//! - **One Document**: the whole store lives under a single key
//!   ([`jukebox_core::PLAYLISTS_KEY`]) as a JSON object mapping playlist
//!   name to an ordered list of track identifiers
//! - **Read Once**: the document is loaded when the store is opened
//! - **Write Through**: every create/delete rewrites the document before
//!   returning
//!
//! # Example
//!
//! ```rust
//! use jukebox_storage::{MemoryStore, PlaylistStore};
//!
//! let mut store = PlaylistStore::open(MemoryStore::new()).unwrap();
//! let count = store
//!     .create("Road trip", vec!["a.mp3".to_string(), "b.mp3".to_string()])
//!     .unwrap();
//!
//! assert_eq!(count, 2);
//! assert_eq!(store.get("Road trip").unwrap().tracks, vec!["a.mp3", "b.mp3"]);
//! ```

mod error;
mod file;
mod memory;
pub mod playlists;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use playlists::PlaylistStore;
