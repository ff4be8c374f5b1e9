//! Platform-agnostic playback device trait
//!
//! Abstracts the single media element the sequencer drives (a browser
//! `<audio>` element, a native player, or a simulation in tests).

use crate::error::{PlaybackError, Result};
use std::time::Duration;

/// A single seekable, volume-controllable playback capability
///
/// Load and play requests are fire-and-forget: the sequencer never waits on
/// them, and a failed `play` only means playback did not start.
pub trait PlaybackDevice {
    /// Replace the current source with the media at `url`
    ///
    /// Loading supersedes any in-flight load of a previous source.
    fn load(&mut self, url: &str);

    /// Start or resume playback of the current source
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Whether the device is paused (true when nothing has played yet)
    fn is_paused(&self) -> bool;

    /// Whether a source has ever been loaded
    fn has_source(&self) -> bool;

    /// Enable or disable native single-track repeat
    fn set_repeat_one(&mut self, enabled: bool);

    /// Whether native single-track repeat is enabled
    fn repeat_one(&self) -> bool;

    /// Current playback position
    fn position(&self) -> Duration;

    /// Duration of the current source, once known
    fn duration(&self) -> Option<Duration>;

    /// Move the playback position
    fn seek(&mut self, position: Duration);

    /// Set output volume in `0.0..=1.0`
    fn set_volume(&mut self, volume: f32);
}

/// Headless playback device
///
/// Keeps the state a media element would report without producing any
/// sound. Time only moves when [`SimulatedDevice::advance`] is called.
#[derive(Debug, Clone)]
pub struct SimulatedDevice {
    source: Option<String>,
    loads: Vec<String>,
    paused: bool,
    repeat_one: bool,
    position: Duration,
    duration: Option<Duration>,
    volume: f32,
    autoplay_blocked: bool,
}

impl SimulatedDevice {
    /// Create a device with nothing loaded
    pub fn new() -> Self {
        Self {
            source: None,
            loads: Vec::new(),
            paused: true,
            repeat_one: false,
            position: Duration::ZERO,
            duration: None,
            volume: 1.0,
            autoplay_blocked: false,
        }
    }

    /// Make every `play` request fail, as a browser blocking autoplay does
    pub fn set_autoplay_blocked(&mut self, blocked: bool) {
        self.autoplay_blocked = blocked;
    }

    /// Report `duration` for the current source (metadata loaded)
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Move time forward while playing
    ///
    /// Returns `true` when the source reached its end without repeating,
    /// which is when a real element fires `ended`.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.paused || self.source.is_none() {
            return false;
        }

        self.position += elapsed;

        let Some(duration) = self.duration else {
            return false;
        };

        if self.position < duration {
            return false;
        }

        if self.repeat_one {
            self.position = Duration::ZERO;
            false
        } else {
            self.position = duration;
            self.paused = true;
            true
        }
    }

    /// URL of the current source
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Every URL loaded so far, oldest first
    pub fn loads(&self) -> &[String] {
        &self.loads
    }

    /// Current output volume
    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackDevice for SimulatedDevice {
    fn load(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.loads.push(url.to_string());
        self.paused = true;
        self.position = Duration::ZERO;
        self.duration = None;
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(PlaybackError::Device("no source loaded".to_string()));
        }
        if self.autoplay_blocked {
            return Err(PlaybackError::Device("play() request was blocked".to_string()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn set_repeat_one(&mut self, enabled: bool) {
        self.repeat_one = enabled;
    }

    fn repeat_one(&self) -> bool {
        self.repeat_one
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn seek(&mut self, position: Duration) {
        self.position = match self.duration {
            Some(duration) => position.min(duration),
            None => Duration::ZERO,
        };
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}
