//! WASM-compatible player wrapper

use super::{HtmlAudioDevice, LocalStorageStore};
use crate::{Intent, PlaybackError, PlaybackEvent, Sequencer, SequencerConfig, Session};
use jukebox_core::{Catalog, Track};
use jukebox_storage::PlaylistStore;
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlMediaElement;

/// Browser-facing player
///
/// Wraps a [`Session`] with a JavaScript-friendly API. Every state change is
/// delivered to the `onEvent` callback as a plain object with a `type` field.
#[wasm_bindgen]
pub struct WasmJukebox {
    inner: Session<HtmlAudioDevice, LocalStorageStore>,

    // Event callbacks
    on_event: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmJukebox {
    /// Create a player for `audio` over the `/songs` listing in `songs`
    ///
    /// An unreadable listing yields an empty catalog.
    #[wasm_bindgen(constructor)]
    pub fn new(audio: HtmlMediaElement, songs: JsValue) -> Result<WasmJukebox, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let catalog = match serde_wasm_bindgen::from_value::<Vec<Track>>(songs) {
            Ok(tracks) => Catalog::new(tracks).map_err(|e| JsValue::from_str(&e.to_string()))?,
            Err(e) => {
                web_sys::console::error_1(&JsValue::from_str(&format!(
                    "Failed to read song list: {}",
                    e
                )));
                Catalog::default()
            }
        };

        let store = LocalStorageStore::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let playlists = PlaylistStore::open(store).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let sequencer = Sequencer::new(
            catalog,
            HtmlAudioDevice::new(audio),
            SequencerConfig::default(),
        );

        Ok(Self {
            inner: Session::new(sequencer, playlists),
            on_event: None,
            on_error: None,
        })
    }

    /// Apply an intent object such as `{ type: "playRow", value: 3 }`
    pub fn dispatch(&mut self, intent: JsValue) -> Result<(), JsValue> {
        let intent: Intent = serde_wasm_bindgen::from_value(intent)?;
        self.run(intent)
    }

    /// Handle a keyboard `code`; returns whether it was a shortcut
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, code: &str) -> Result<bool, JsValue> {
        match Intent::from_key_code(code) {
            Some(intent) => self.run(intent).map(|()| true),
            None => Ok(false),
        }
    }

    // ===== Playback Control =====

    pub fn play(&mut self, row: i32) -> Result<(), JsValue> {
        self.run(Intent::PlayRow(i64::from(row)))
    }

    pub fn enqueue(&mut self, row: i32) -> Result<(), JsValue> {
        self.run(Intent::EnqueueRow(i64::from(row)))
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) -> Result<(), JsValue> {
        self.run(Intent::TogglePlay)
    }

    pub fn next(&mut self) -> Result<(), JsValue> {
        self.run(Intent::Next)
    }

    pub fn previous(&mut self) -> Result<(), JsValue> {
        self.run(Intent::Previous)
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) -> Result<(), JsValue> {
        self.run(Intent::ToggleShuffle)
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) -> Result<(), JsValue> {
        self.run(Intent::ToggleLoop)
    }

    /// Seek to a percentage (0 - 100) of the current track
    pub fn seek(&mut self, percent: f64) -> Result<(), JsValue> {
        self.run(Intent::Seek(percent))
    }

    /// Set volume (0.0 - 1.0)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, volume: f64) -> Result<(), JsValue> {
        self.run(Intent::Volume(volume))
    }

    // ===== Queue =====

    #[wasm_bindgen(js_name = showQueue)]
    pub fn show_queue(&mut self) -> Result<(), JsValue> {
        self.run(Intent::ShowQueue)
    }

    #[wasm_bindgen(js_name = clearQueue)]
    pub fn clear_queue(&mut self) -> Result<(), JsValue> {
        self.run(Intent::ClearQueue)
    }

    // ===== Playlists =====

    #[wasm_bindgen(js_name = selectRow)]
    pub fn select_row(&mut self, row: i32, selected: bool) -> Result<(), JsValue> {
        self.run(Intent::SelectRow {
            row: i64::from(row),
            selected,
        })
    }

    #[wasm_bindgen(js_name = selectAll)]
    pub fn select_all(&mut self) -> Result<(), JsValue> {
        self.run(Intent::SelectAll)
    }

    #[wasm_bindgen(js_name = deselectAll)]
    pub fn deselect_all(&mut self) -> Result<(), JsValue> {
        self.run(Intent::DeselectAll)
    }

    #[wasm_bindgen(js_name = createPlaylist)]
    pub fn create_playlist(&mut self, name: String) -> Result<(), JsValue> {
        self.run(Intent::CreatePlaylist(name))
    }

    #[wasm_bindgen(js_name = playPlaylist)]
    pub fn play_playlist(&mut self, name: String) -> Result<(), JsValue> {
        self.run(Intent::PlayPlaylist(name))
    }

    #[wasm_bindgen(js_name = deletePlaylist)]
    pub fn delete_playlist(&mut self, name: String) -> Result<(), JsValue> {
        self.run(Intent::DeletePlaylist(name))
    }

    /// Saved playlist names in creation order
    pub fn playlists(&self) -> Vec<String> {
        self.inner.playlists().names().map(str::to_string).collect()
    }

    // ===== Device Notifications =====

    /// Forward the element's `timeupdate` event; returns the progress snapshot
    #[wasm_bindgen(js_name = onTimeUpdate)]
    pub fn on_time_update(&mut self) -> Result<JsValue, JsValue> {
        let progress = self.inner.sequencer_mut().on_time_update();
        self.flush_events();
        to_js(&progress)
    }

    /// Forward the element's `ended` event
    #[wasm_bindgen(js_name = onEnded)]
    pub fn on_ended(&mut self) {
        self.inner.sequencer_mut().on_playback_ended();
        self.flush_events();
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = nowPlaying)]
    pub fn now_playing(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.sequencer().now_playing())
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.sequencer().is_playing()
    }

    #[wasm_bindgen(js_name = isShuffled)]
    pub fn is_shuffled(&self) -> bool {
        self.inner.sequencer().is_shuffled()
    }

    #[wasm_bindgen(js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.inner.sequencer().is_looping()
    }

    // ===== Event Callbacks =====

    /// Register event callback
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.on_event = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal =====

    fn run(&mut self, intent: Intent) -> Result<(), JsValue> {
        let result = self.inner.dispatch(intent);
        self.flush_events();
        result.map_err(|e| self.handle_error(&e))
    }

    fn flush_events(&mut self) {
        let events: Vec<PlaybackEvent> = self.inner.drain_events();
        let Some(ref cb) = self.on_event else {
            return;
        };

        for event in events {
            if let Ok(js_event) = serde_wasm_bindgen::to_value(&event) {
                cb.call1(&JsValue::NULL, &js_event).ok();
            }
        }
    }

    fn handle_error(&self, error: &PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg))
                .ok();
        }

        JsValue::from_str(&err_msg)
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
