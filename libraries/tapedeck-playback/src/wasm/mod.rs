//! WASM bindings for tapedeck-playback
//!
//! Exposes the player session to a browser page. The page supplies an
//! adapter around its `<audio>` element and a clipboard adapter; the session
//! drives both through the same traits the headless driver uses.

pub mod player;
pub mod types;

pub use player::WasmPlayer;
pub use types::{JsAudioDevice, JsClipboard, WebClipboard, WebDevice};
