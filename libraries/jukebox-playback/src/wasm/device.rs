//! `<audio>` element playback device

use crate::device::PlaybackDevice;
use crate::error::{PlaybackError, Result};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::HtmlMediaElement;

/// [`PlaybackDevice`] backed by an `HtmlMediaElement`
pub struct HtmlAudioDevice {
    element: HtmlMediaElement,
    // Attached to every play() promise so autoplay refusals stay silent
    ignore_rejection: Closure<dyn FnMut(JsValue)>,
}

impl HtmlAudioDevice {
    pub fn new(element: HtmlMediaElement) -> Self {
        Self {
            element,
            ignore_rejection: Closure::new(|_reason: JsValue| {}),
        }
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.element
    }
}

impl std::fmt::Debug for HtmlAudioDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlAudioDevice")
            .field("src", &self.element.src())
            .field("paused", &self.element.paused())
            .finish_non_exhaustive()
    }
}

/// Convert element seconds, which may be NaN or infinite
fn seconds(value: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(value).ok()
}

impl PlaybackDevice for HtmlAudioDevice {
    fn load(&mut self, url: &str) {
        self.element.set_src(url);
    }

    fn play(&mut self) -> Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlaybackError::Device(format!("{:?}", e)))?;
        let _ = promise.catch(&self.ignore_rejection);
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            web_sys::console::warn_2(&JsValue::from_str("pause() failed"), &e);
        }
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn has_source(&self) -> bool {
        !self.element.src().is_empty()
    }

    fn set_repeat_one(&mut self, enabled: bool) {
        self.element.set_loop(enabled);
    }

    fn repeat_one(&self) -> bool {
        self.element.loop_()
    }

    fn position(&self) -> Duration {
        seconds(self.element.current_time()).unwrap_or_default()
    }

    fn duration(&self) -> Option<Duration> {
        seconds(self.element.duration()).filter(|d| !d.is_zero())
    }

    fn seek(&mut self, position: Duration) {
        self.element.set_current_time(position.as_secs_f64());
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(f64::from(volume.clamp(0.0, 1.0)));
    }
}
