//! WASM-compatible PlayerSession wrapper

use super::types::{JsAudioDevice, JsClipboard, WasmFeedbackTimer, WebClipboard, WebDevice};
use crate::{
    clipboard::FeedbackTimer, DeviceEvent, LoadMode, PlaybackError, PlayerConfig, PlayerSession,
};
use js_sys::Function;
use tapedeck_core::TrackId;
use wasm_bindgen::prelude::*;

/// Browser-facing player
///
/// Every command calls the change callback with a fresh snapshot. The
/// callback runs while the player is still borrowed, so it must render from
/// its argument rather than call back into the player.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: PlayerSession<WebDevice>,
    on_change: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player around the page's audio adapter
    ///
    /// `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(device: JsAudioDevice, config: JsValue) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let config = if config.is_undefined() || config.is_null() {
            PlayerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        Ok(Self {
            inner: PlayerSession::new(WebDevice::new(device), config),
            on_change: None,
        })
    }

    // ===== Import =====

    /// Build or extend the playlist from pasted text
    #[wasm_bindgen(js_name = loadFromText)]
    pub fn load_from_text(&mut self, raw: &str, append: bool) -> Result<usize, JsValue> {
        let mode = if append {
            LoadMode::Append
        } else {
            LoadMode::Replace
        };
        let result = self.inner.load_from_text(raw, mode);
        self.emit_change();
        result.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Quick-insert a single stream
    #[wasm_bindgen(js_name = insertLink)]
    pub fn insert_link(&mut self, title: Option<String>, url: &str) -> Result<String, JsValue> {
        let result = self.inner.insert_link(title.as_deref(), url);
        self.emit_change();
        result.map(|id| id.to_string()).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = resetSample)]
    pub fn reset_sample(&mut self) -> String {
        let sample = self.inner.reset_sample();
        self.emit_change();
        sample.to_string()
    }

    // ===== Queue =====

    #[wasm_bindgen(js_name = clearQueue)]
    pub fn clear_queue(&mut self) {
        self.inner.clear_queue();
        self.emit_change();
    }

    #[wasm_bindgen(js_name = removeTrack)]
    pub fn remove_track(&mut self, id: &str) -> Result<(), JsValue> {
        let result = self.inner.remove_track(&TrackId::new(id));
        self.emit_change();
        result.map(|_| ()).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = selectTrack)]
    pub fn select_track(&mut self, index: usize) -> Result<(), JsValue> {
        let result = self.inner.select_track(index);
        self.emit_change();
        result.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.inner.play_next();
        self.emit_change();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.inner.play_previous();
        self.emit_change();
    }

    // ===== Playback =====

    #[wasm_bindgen(js_name = togglePlayback)]
    pub fn toggle_playback(&mut self) {
        self.inner.toggle_playback();
        self.emit_change();
    }

    /// Forward a media element event by its DOM name
    ///
    /// `detail` is only read for `error`.
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, name: &str, detail: Option<String>) {
        match name {
            "timeupdate" => self.inner.handle_time_update(),
            "error" => self.inner.handle_device_event(DeviceEvent::Error { detail }),
            _ => match DeviceEvent::from_dom_name(name) {
                Some(event) => self.inner.handle_device_event(event),
                None => return,
            },
        }
        self.emit_change();
    }

    /// Report how a `requestPlay` call ended; `error` is absent on success
    #[wasm_bindgen(js_name = resolvePlay)]
    pub fn resolve_play(&mut self, ticket: f64, error: Option<String>) -> bool {
        let outcome = match error {
            None => Ok(()),
            Some(reason) => Err(PlaybackError::PlaybackRejected(reason)),
        };
        let applied = self.inner.resolve_play(ticket as u64, outcome);
        self.emit_change();
        applied
    }

    // ===== Export =====

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.inner.export_json().map_err(to_js_error)
    }

    /// Copy the export JSON; returns `{ generation, afterMs }` or `undefined`
    #[wasm_bindgen(js_name = copyExportedPlaylist)]
    pub fn copy_exported_playlist(&mut self, clipboard: &JsClipboard) -> Result<JsValue, JsValue> {
        let timer = self
            .inner
            .copy_exported_playlist(&mut WebClipboard::new(clipboard));
        self.emit_change();

        match timer {
            Some(timer) => Ok(serde_wasm_bindgen::to_value(&WasmFeedbackTimer {
                generation: timer.generation as f64,
                after_ms: timer.after.as_millis() as f64,
            })?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Call once the copy timer has elapsed
    #[wasm_bindgen(js_name = expireCopyFeedback)]
    pub fn expire_copy_feedback(&mut self, generation: f64) {
        let timer = FeedbackTimer {
            generation: generation as u64,
            after: self.inner.config().copy_feedback(),
        };
        self.inner.expire_copy_feedback(timer);
        self.emit_change();
    }

    // ===== State Queries =====

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.snapshot())?)
    }

    pub fn summary(&self) -> String {
        self.inner.summary()
    }

    // ===== Event Callbacks =====

    /// Register the change callback, called as `callback(snapshot)`
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    fn emit_change(&self) {
        if let Some(ref cb) = self.on_change {
            let delivered = serde_wasm_bindgen::to_value(&self.inner.snapshot())
                .map_err(JsValue::from)
                .and_then(|snapshot| cb.call1(&JsValue::NULL, &snapshot));
            if let Err(e) = delivered {
                tracing::warn!(error = ?e, "Change callback failed");
            }
        }
    }
}

fn to_js_error(error: PlaybackError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
