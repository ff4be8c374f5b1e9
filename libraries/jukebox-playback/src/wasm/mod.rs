//! WASM bindings for jukebox-playback
//!
//! Drives a page's `<audio>` element and persists playlists in
//! `localStorage`.

pub mod device;
pub mod jukebox;
pub mod storage;

pub use device::HtmlAudioDevice;
pub use jukebox::WasmJukebox;
pub use storage::LocalStorageStore;
