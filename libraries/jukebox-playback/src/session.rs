//! Player session
//!
//! Ties the sequencer to the playlist store and the row selection, and turns
//! presentation [`Intent`]s into operations.

use crate::{
    device::PlaybackDevice,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    intent::Intent,
    selection::Selection,
    sequencer::Sequencer,
};
use jukebox_core::KeyValueStore;
use jukebox_storage::PlaylistStore;

/// Everything one page of the player owns
#[derive(Debug)]
pub struct Session<D: PlaybackDevice, S: KeyValueStore> {
    sequencer: Sequencer<D>,
    playlists: PlaylistStore<S>,
    selection: Selection,
}

impl<D: PlaybackDevice, S: KeyValueStore> Session<D, S> {
    pub fn new(sequencer: Sequencer<D>, playlists: PlaylistStore<S>) -> Self {
        Self {
            sequencer,
            playlists,
            selection: Selection::new(),
        }
    }

    /// Apply one intent
    ///
    /// Rows outside the catalog are ignored. Errors are also reported as [`PlaybackEvent::Error`] so a host that
    /// only watches events can surface them.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        let result = self.apply(intent);

        if let Err(e) = &result {
            // activate_playlist reports its own missing-media error
            if !matches!(e, PlaybackError::MissingMedia { .. }) {
                self.sequencer.emit(PlaybackEvent::Error {
                    message: e.to_string(),
                });
            }
        }

        result
    }

    fn apply(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::PlayRow(row) => {
                if let Some(position) = row_position(row) {
                    self.sequencer.activate(position);
                }
            }
            Intent::EnqueueRow(row) => {
                let Some(position) = row_position(row) else {
                    return Ok(());
                };
                match self.sequencer.enqueue(position) {
                    Err(PlaybackError::IndexOutOfBounds(_)) => {
                        tracing::debug!("Ignoring enqueue of row {}", row);
                    }
                    other => other?,
                }
            }
            Intent::TogglePlay => self.sequencer.toggle_play_pause(),
            Intent::Next => self.sequencer.advance_forward(),
            Intent::Previous => self.sequencer.advance_backward(),
            Intent::ToggleShuffle => {
                self.sequencer.toggle_shuffle();
            }
            Intent::ToggleLoop => {
                self.sequencer.toggle_loop();
            }
            Intent::Seek(percent) => self.sequencer.seek_to_percent(percent),
            Intent::Volume(volume) => self.sequencer.set_volume(volume),
            Intent::SelectRow { row, selected } => {
                if let Some(position) = row_position(row) {
                    self.selection.set(position, selected);
                }
            }
            Intent::SelectAll => self.selection.select_all(self.sequencer.catalog()),
            Intent::DeselectAll => self.selection.clear(),
            Intent::ShowQueue => {
                self.sequencer.peek_queue();
            }
            Intent::ClearQueue => self.sequencer.clear_queue(),
            Intent::CreatePlaylist(name) => {
                self.create_playlist(&name)?;
            }
            Intent::PlayPlaylist(name) => self.play_playlist(&name)?,
            Intent::DeletePlaylist(name) => self.delete_playlist(&name)?,
        }

        Ok(())
    }

    /// Save the selected rows, in catalog order, under `name`
    pub fn create_playlist(&mut self, name: &str) -> Result<usize> {
        let tracks = self.selection.identifiers(self.sequencer.catalog());
        let count = self.playlists.create(name, tracks)?;

        self.sequencer.emit(PlaybackEvent::PlaylistCreated {
            name: name.trim().to_string(),
            count,
        });
        self.emit_playlists_changed();

        Ok(count)
    }

    pub fn play_playlist(&mut self, name: &str) -> Result<()> {
        self.sequencer.activate_playlist(&self.playlists, name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists.delete(name)?;
        self.emit_playlists_changed();
        Ok(())
    }

    pub fn sequencer(&self) -> &Sequencer<D> {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer<D> {
        &mut self.sequencer
    }

    pub fn playlists(&self) -> &PlaylistStore<S> {
        &self.playlists
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drain events from the sequencer and session, oldest first
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.sequencer.drain_events()
    }

    fn emit_playlists_changed(&mut self) {
        let names = self.playlists.names().map(str::to_string).collect();
        self.sequencer
            .emit(PlaybackEvent::PlaylistsChanged { names });
    }
}

/// Convert a row index from the page; negative rows have no position
fn row_position(row: i64) -> Option<usize> {
    usize::try_from(row).ok()
}
