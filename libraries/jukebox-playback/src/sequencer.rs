//! Sequencer - core playback orchestration
//!
//! Decides which catalog track plays next and drives a single
//! [`PlaybackDevice`]. Forward navigation consults, in order: the manual
//! queue, the playlist cursor, shuffle, then linear catalog order.

use crate::{
    cursor::PlaylistCursor,
    device::PlaybackDevice,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    queue::ManualQueue,
    random::{IndexSource, RngIndexSource},
    transport::{clamp_volume, format_time, progress_percent, seek_position},
    types::{NowPlaying, Progress, SequencerConfig, NO_SONG_SELECTED},
};
use jukebox_core::{Catalog, PlaylistLookup, Track, DEFAULT_THUMBNAIL};

/// Playback sequencer
///
/// Owns the catalog, the device and all navigation state. Every operation
/// runs to completion; state changes are reported through
/// [`Sequencer::drain_events`].
pub struct Sequencer<D: PlaybackDevice> {
    catalog: Catalog,
    device: D,
    random: Box<dyn IndexSource>,

    current: Option<usize>,
    is_playing: bool,
    shuffle: bool,
    looping: bool,
    volume: f32,

    queue: ManualQueue,
    cursor: Option<PlaylistCursor>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl<D: PlaybackDevice> Sequencer<D> {
    /// Create a sequencer with an entropy-seeded shuffle source
    pub fn new(catalog: Catalog, device: D, config: SequencerConfig) -> Self {
        Self::with_index_source(
            catalog,
            device,
            config,
            Box::new(RngIndexSource::from_entropy()),
        )
    }

    /// Create a sequencer with an explicit shuffle source
    pub fn with_index_source(
        catalog: Catalog,
        mut device: D,
        config: SequencerConfig,
        random: Box<dyn IndexSource>,
    ) -> Self {
        let volume = config.volume.clamp(0.0, 1.0);
        device.set_volume(volume);
        device.set_repeat_one(config.looping);

        tracing::debug!("Sequencer ready with {} tracks", catalog.len());

        Self {
            catalog,
            device,
            random,
            current: None,
            is_playing: false,
            shuffle: config.shuffle,
            looping: config.looping,
            volume,
            queue: ManualQueue::new(),
            cursor: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Transport =====

    /// Make the track at `position` current and start playing it
    ///
    /// Leaves playlist mode. Out-of-range positions are ignored and `false`
    /// is returned.
    pub fn activate(&mut self, position: usize) -> bool {
        if position >= self.catalog.len() {
            tracing::debug!("Ignoring activation of position {}", position);
            return false;
        }

        self.cursor = None;
        self.load_and_play(position);
        true
    }

    /// Load `position` into the device and request playback
    ///
    /// Does not touch the playlist cursor, so playlist navigation can use it.
    fn load_and_play(&mut self, position: usize) {
        let Some(track) = self.catalog.get(position) else {
            return;
        };
        let track = track.clone();

        self.current = Some(position);
        self.device.load(&track.media_url);
        self.request_play();
        self.is_playing = true;

        tracing::debug!("Playing {} ({})", track.display_name, position);

        self.emit_track_changed(position, &track);
        self.emit_transport_changed();
    }

    /// Ask the device to play, tolerating refusal
    ///
    /// The playing flag is not rolled back when the device refuses.
    fn request_play(&mut self) {
        if let Err(e) = self.device.play() {
            tracing::debug!("Play request not honoured: {}", e);
        }
    }

    /// Toggle between playing and paused
    ///
    /// With nothing loaded yet, starts the first catalog track.
    pub fn toggle_play_pause(&mut self) {
        if !self.device.has_source() {
            if !self.catalog.is_empty() {
                self.activate(0);
            }
            return;
        }

        if self.device.is_paused() {
            self.request_play();
            self.is_playing = true;
        } else {
            self.device.pause();
            self.is_playing = false;
        }

        self.emit_transport_changed();
    }

    /// Pause and mark stopped; the current track stays current
    fn stop(&mut self) {
        self.device.pause();
        self.is_playing = false;
        tracing::debug!("Reached end of sequence");
        self.emit_transport_changed();
    }

    // ===== Navigation =====

    /// Move to the next track
    pub fn advance_forward(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }

        if let Some(position) = self.queue.pop_front() {
            self.activate(position);
            return;
        }

        if self.cursor.as_ref().is_some_and(|c| !c.is_empty()) {
            self.advance_in_playlist();
            return;
        }

        if self.shuffle {
            let position = self.random.next_index(len);
            self.activate(position);
            return;
        }

        let next = self.current.map_or(0, |current| (current + 1) % len);
        if !self.looping && next == 0 && self.current == Some(len - 1) {
            self.stop();
            return;
        }

        self.activate(next);
    }

    /// Follow the playlist cursor one step
    ///
    /// An identifier the catalog no longer knows leaves state untouched.
    fn advance_in_playlist(&mut self) {
        let step = {
            let Some(cursor) = self.cursor.as_ref() else {
                return;
            };

            let current_id = self
                .current
                .and_then(|position| self.catalog.get(position))
                .map(|track| track.identifier.as_str());

            match cursor.next_after(current_id) {
                Some(id) => Some(self.catalog.position_of(id)),
                None if self.looping => {
                    Some(cursor.first().and_then(|id| self.catalog.position_of(id)))
                }
                None => None,
            }
        };

        match step {
            Some(Some(position)) => self.load_and_play(position),
            Some(None) => tracing::debug!("Next playlist entry is not in the catalog"),
            None => self.stop(),
        }
    }

    /// Move to the previous track
    ///
    /// Takes the most recently queued track first. Ignores the playlist
    /// cursor.
    pub fn advance_backward(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }

        if let Some(position) = self.queue.pop_back() {
            self.activate(position);
            return;
        }

        if self.shuffle {
            let position = self.random.next_index(len);
            self.activate(position);
            return;
        }

        let previous = match self.current {
            Some(current) if current > 0 => current - 1,
            _ => len - 1,
        };
        self.activate(previous);
    }

    /// React to the device reaching the end of the current track
    pub fn on_playback_ended(&mut self) {
        if self.device.repeat_one() {
            return;
        }
        self.advance_forward();
    }

    // ===== Queue =====

    /// Append the track at `position` to the manual queue
    pub fn enqueue(&mut self, position: usize) -> Result<()> {
        let track = self
            .catalog
            .get(position)
            .ok_or(PlaybackError::IndexOutOfBounds(position))?;
        let display_name = track.display_name.clone();

        self.queue.push(position);
        self.pending_events.push(PlaybackEvent::TrackEnqueued {
            display_name,
            queue_length: self.queue.len(),
        });

        Ok(())
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.pending_events.push(PlaybackEvent::QueueCleared);
    }

    /// Display names of queued tracks, in play order
    pub fn peek_queue(&mut self) -> Vec<String> {
        let names = self.queue.display_names(&self.catalog);

        if names.is_empty() {
            self.pending_events.push(PlaybackEvent::QueueEmpty);
        } else {
            self.pending_events.push(PlaybackEvent::QueueListing {
                names: names.clone(),
            });
        }

        names
    }

    // ===== Modes =====

    /// Flip shuffle; returns the new state
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
        self.shuffle
    }

    /// Flip single-track repeat; returns the new state
    pub fn toggle_loop(&mut self) -> bool {
        self.looping = !self.looping;
        self.device.set_repeat_one(self.looping);
        self.pending_events.push(PlaybackEvent::LoopChanged {
            enabled: self.looping,
        });
        self.looping
    }

    // ===== Playlists =====

    /// Start playing the saved playlist `name`
    ///
    /// When its first track is not in the catalog, nothing plays: the cursor
    /// keeps only the tracks that are present and
    /// [`PlaybackError::MissingMedia`] is returned.
    pub fn activate_playlist<L>(&mut self, playlists: &L, name: &str) -> Result<()>
    where
        L: PlaylistLookup + ?Sized,
    {
        let tracks = match playlists.playlist_tracks(name) {
            Some(tracks) if !tracks.is_empty() => tracks.to_vec(),
            _ => return Err(PlaybackError::PlaylistUnavailable(name.to_string())),
        };

        let mut cursor = PlaylistCursor::new(tracks);

        if let Some(position) = cursor.first().and_then(|id| self.catalog.position_of(id)) {
            tracing::info!("Playing playlist {:?} ({} tracks)", name, cursor.len());
            self.cursor = Some(cursor);
            self.load_and_play(position);
            return Ok(());
        }

        let missing = cursor.retain_known(&self.catalog);
        tracing::warn!("Playlist {:?} has {} missing tracks", name, missing);
        self.cursor = Some(cursor);

        let error = PlaybackError::MissingMedia {
            playlist: name.to_string(),
            missing,
        };
        self.pending_events.push(PlaybackEvent::Error {
            message: error.to_string(),
        });

        Err(error)
    }

    // ===== Position & Volume =====

    /// Read position and duration from the device
    pub fn on_time_update(&mut self) -> Progress {
        let position = self.device.position();
        let duration = self.device.duration();

        let progress = Progress {
            percent: progress_percent(position, duration),
            current: format_time(position.as_secs_f64()),
            duration: format_time(duration.map_or(f64::NAN, |d| d.as_secs_f64())),
        };

        self.pending_events
            .push(PlaybackEvent::Progress(progress.clone()));
        progress
    }

    /// Seek to `percent` of the current track's duration
    pub fn seek_to_percent(&mut self, percent: f64) {
        let target = seek_position(percent, self.device.duration());
        self.device.seek(target);
    }

    /// Set volume, clamped to `0.0..=1.0`
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = clamp_volume(volume);
        self.device.set_volume(self.volume);
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            volume: self.volume,
        });
    }

    // ===== State Queries =====

    pub fn now_playing(&self) -> NowPlaying {
        match self.current_track() {
            Some(track) => NowPlaying {
                position: self.current,
                title: track.display_name.clone(),
                thumbnail_url: track.thumbnail_url.clone(),
                is_playing: self.is_playing,
            },
            None => NowPlaying {
                position: None,
                title: NO_SONG_SELECTED.to_string(),
                thumbnail_url: DEFAULT_THUMBNAIL.to_string(),
                is_playing: self.is_playing,
            },
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_position(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|position| self.catalog.get(position))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn queue(&self) -> &ManualQueue {
        &self.queue
    }

    /// Active playlist cursor, if in playlist mode
    pub fn cursor(&self) -> Option<&PlaylistCursor> {
        self.cursor.as_ref()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutable device access, for hosts that forward device notifications
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Queue an event raised outside the sequencer
    pub(crate) fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn emit_track_changed(&mut self, position: usize, track: &Track) {
        self.pending_events.push(PlaybackEvent::TrackChanged {
            position,
            identifier: track.identifier.clone(),
            display_name: track.display_name.clone(),
            thumbnail_url: track.thumbnail_url.clone(),
        });
    }

    fn emit_transport_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::TransportChanged {
            is_playing: self.is_playing,
        });
    }
}

impl<D: PlaybackDevice + std::fmt::Debug> std::fmt::Debug for Sequencer<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("tracks", &self.catalog.len())
            .field("device", &self.device)
            .field("current", &self.current)
            .field("is_playing", &self.is_playing)
            .field("shuffle", &self.shuffle)
            .field("looping", &self.looping)
            .field("queue", &self.queue)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
