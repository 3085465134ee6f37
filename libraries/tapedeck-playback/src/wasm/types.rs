//! JavaScript-side collaborators
//!
//! The page implements two small adapters:
//!
//! ```js
//! const device = {
//!   load(url) {
//!     // An empty src fires `error`, so clearing removes the attribute
//!     if (url == null) audio.removeAttribute("src");
//!     else audio.src = url;
//!     audio.load();
//!   },
//!   requestPlay(ticket, trackId, autoplay) {
//!     audio.play()
//!       .then(() => player.resolvePlay(ticket, undefined))
//!       .catch((e) => player.resolvePlay(ticket, String(e)));
//!   },
//!   pause() { audio.pause(); },
//!   get paused() { return audio.paused; },
//!   get currentTime() { return audio.currentTime; },
//!   get duration() { return audio.duration; },
//! };
//!
//! player.onChange((snapshot) => render(snapshot));
//!
//! const clipboard = {
//!   writeText(text) { /* true on success */ },
//!   copyViaSelection(text) { /* hidden textarea + execCommand("copy") */ },
//! };
//! ```

use crate::{
    clipboard::ClipboardWriter,
    device::{PlayOrigin, PlayRequest, PlaybackDevice},
    error::{PlaybackError, Result},
};
use serde::Serialize;
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Adapter around the page's audio element
    pub type JsAudioDevice;

    #[wasm_bindgen(method, js_name = load)]
    fn js_load(this: &JsAudioDevice, url: Option<String>);

    #[wasm_bindgen(method, js_name = requestPlay)]
    fn js_request_play(this: &JsAudioDevice, ticket: f64, track_id: &str, autoplay: bool);

    #[wasm_bindgen(method, js_name = pause)]
    fn js_pause(this: &JsAudioDevice);

    #[wasm_bindgen(method, getter, js_name = paused)]
    fn js_paused(this: &JsAudioDevice) -> bool;

    #[wasm_bindgen(method, getter, js_name = currentTime)]
    fn js_current_time(this: &JsAudioDevice) -> f64;

    #[wasm_bindgen(method, getter, js_name = duration)]
    fn js_duration(this: &JsAudioDevice) -> f64;

    /// Adapter around the page's clipboard access
    pub type JsClipboard;

    #[wasm_bindgen(method, js_name = writeText)]
    fn js_write_text(this: &JsClipboard, text: &str) -> bool;

    #[wasm_bindgen(method, js_name = copyViaSelection)]
    fn js_copy_via_selection(this: &JsClipboard, text: &str) -> bool;
}

/// Media element times are NaN or infinite until metadata is known
fn seconds(value: f64) -> Option<Duration> {
    (value.is_finite() && value >= 0.0).then(|| Duration::from_secs_f64(value))
}

/// [`PlaybackDevice`] backed by a [`JsAudioDevice`]
pub struct WebDevice {
    inner: JsAudioDevice,
}

impl WebDevice {
    pub fn new(inner: JsAudioDevice) -> Self {
        Self { inner }
    }
}

impl PlaybackDevice for WebDevice {
    fn load(&mut self, url: Option<&str>) {
        self.inner.js_load(url.map(str::to_string));
    }

    fn play(&mut self, request: &PlayRequest) {
        self.inner.js_request_play(
            request.ticket as f64,
            request.track_id.as_str(),
            request.origin == PlayOrigin::Autoplay,
        );
    }

    fn pause(&mut self) {
        self.inner.js_pause();
    }

    fn is_paused(&self) -> bool {
        self.inner.js_paused()
    }

    fn position(&self) -> Duration {
        seconds(self.inner.js_current_time()).unwrap_or(Duration::ZERO)
    }

    fn duration(&self) -> Option<Duration> {
        seconds(self.inner.js_duration()).filter(|d| !d.is_zero())
    }
}

/// [`ClipboardWriter`] backed by a borrowed [`JsClipboard`]
pub struct WebClipboard<'a> {
    inner: &'a JsClipboard,
}

impl<'a> WebClipboard<'a> {
    pub fn new(inner: &'a JsClipboard) -> Self {
        Self { inner }
    }
}

impl ClipboardWriter for WebClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.inner.js_write_text(text) {
            Ok(())
        } else {
            Err(PlaybackError::Clipboard("writeText failed".to_string()))
        }
    }

    fn copy_via_selection(&mut self, text: &str) -> Result<()> {
        if self.inner.js_copy_via_selection(text) {
            Ok(())
        } else {
            Err(PlaybackError::Clipboard("selection copy failed".to_string()))
        }
    }
}

/// Copy feedback timer handed to the page
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WasmFeedbackTimer {
    pub generation: f64,
    pub after_ms: f64,
}
