//! Jukebox - Playback Sequencing
//!
//! Platform-agnostic playback sequencing for Jukebox.
//!
//! This crate provides:
//! - Navigation over a fixed catalog (linear, shuffle, single-track repeat)
//! - A manual "play next" queue
//! - Playlist mode driven by a cursor over a saved playlist
//! - Transport helpers (time labels, progress, seek, volume)
//! - Keyboard and control intents, dispatched through a [`Session`]
//!
//! # Architecture
//!
//! `jukebox-playback` never touches a real audio element. Playback goes
//! through the [`PlaybackDevice`] trait and shuffle picks through
//! [`IndexSource`], so the same sequencer runs in the browser (behind the
//! `wasm` feature) and in tests with [`SimulatedDevice`].
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use jukebox_core::{Catalog, Track};
//! use jukebox_playback::{Sequencer, SequencerConfig, SimulatedDevice};
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("a.mp3", "a", "/static/songs/a.mp3", "/static/default.jpg"),
//!     Track::new("b.mp3", "b", "/static/songs/b.mp3", "/static/default.jpg"),
//! ])
//! .unwrap();
//!
//! let mut sequencer = Sequencer::new(catalog, SimulatedDevice::new(), SequencerConfig::default());
//!
//! sequencer.activate(0);
//! sequencer.advance_forward();
//! assert_eq!(sequencer.current_position(), Some(1));
//!
//! // Linear order stops after the last track unless looping
//! sequencer.advance_forward();
//! assert!(!sequencer.is_playing());
//! ```
//!
//! # Example: Manual Queue
//!
//! ```rust
//! # use jukebox_core::{Catalog, Track};
//! # use jukebox_playback::{Sequencer, SequencerConfig, SimulatedDevice};
//! # let catalog = Catalog::new(vec![
//! #     Track::new("a.mp3", "a", "/a.mp3", "/t.jpg"),
//! #     Track::new("b.mp3", "b", "/b.mp3", "/t.jpg"),
//! #     Track::new("c.mp3", "c", "/c.mp3", "/t.jpg"),
//! # ])
//! # .unwrap();
//! let mut sequencer = Sequencer::new(catalog, SimulatedDevice::new(), SequencerConfig::default());
//!
//! sequencer.enqueue(2).unwrap();
//! sequencer.advance_forward();
//! assert_eq!(sequencer.current_position(), Some(2));
//! ```

pub mod cursor;
pub mod device;
pub mod error;
pub mod events;
pub mod intent;
pub mod queue;
pub mod random;
pub mod selection;
pub mod sequencer;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use cursor::PlaylistCursor;
pub use device::{PlaybackDevice, SimulatedDevice};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use intent::Intent;
pub use queue::ManualQueue;
pub use random::{IndexSource, RngIndexSource, SequenceIndexSource};
pub use selection::Selection;
pub use sequencer::Sequencer;
pub use session::Session;
pub use types::{NowPlaying, Progress, SequencerConfig};

#[cfg(feature = "wasm")]
pub use wasm::{HtmlAudioDevice, LocalStorageStore, WasmJukebox};
