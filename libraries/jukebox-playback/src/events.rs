//! Playback Events
//!
//! Everything the presentation layer needs to redraw is reported through
//! these events. The sequencer buffers them; callers drain the buffer after
//! each operation.

use crate::types::Progress;
use serde::{Deserialize, Serialize};

/// Events emitted by the sequencer and session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// A new track became current
    #[serde(rename_all = "camelCase")]
    TrackChanged {
        position: usize,
        identifier: String,
        display_name: String,
        thumbnail_url: String,
    },

    /// Playing flag changed (or was re-asserted)
    #[serde(rename_all = "camelCase")]
    TransportChanged { is_playing: bool },

    /// Time update from the device
    Progress(Progress),

    /// Track added to the manual queue
    #[serde(rename_all = "camelCase")]
    TrackEnqueued { display_name: String, queue_length: usize },

    /// Manual queue emptied on request
    QueueCleared,

    /// Manual queue contents, in play order
    QueueListing { names: Vec<String> },

    /// Manual queue was inspected while empty
    QueueEmpty,

    ShuffleChanged { enabled: bool },

    LoopChanged { enabled: bool },

    VolumeChanged { volume: f32 },

    /// Playlist saved
    PlaylistCreated { name: String, count: usize },

    /// Saved playlist names changed, in creation order
    PlaylistsChanged { names: Vec<String> },

    /// Something the listener should be told about
    Error { message: String },
}
