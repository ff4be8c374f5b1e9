//! Core types for playback sequencing

use serde::{Deserialize, Serialize};

/// Label shown when nothing is current
pub const NO_SONG_SELECTED: &str = "No song selected";

/// Glyph for the play control while paused
pub const PLAY_GLYPH: &str = "▶";

/// Glyph for the play control while playing
pub const PAUSE_GLYPH: &str = "⏸";

/// Initial sequencer settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Initial volume (0.0 - 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Start with shuffle enabled
    #[serde(default)]
    pub shuffle: bool,

    /// Start with single-track repeat enabled
    #[serde(default)]
    pub looping: bool,
}

fn default_volume() -> f32 {
    1.0
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            shuffle: false,
            looping: false,
        }
    }
}

/// Snapshot of a time update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Position as a percentage of duration (0 when unknown)
    pub percent: f64,
    /// Position formatted as `m:ss`
    pub current: String,
    /// Duration formatted as `m:ss`
    pub duration: String,
}

/// What the "now playing" area shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    /// Catalog row to highlight
    pub position: Option<usize>,
    pub title: String,
    pub thumbnail_url: String,
    pub is_playing: bool,
}

impl NowPlaying {
    /// Glyph for the play/pause control
    pub fn glyph(&self) -> &'static str {
        if self.is_playing {
            PAUSE_GLYPH
        } else {
            PLAY_GLYPH
        }
    }
}
