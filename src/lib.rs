//! Whack Round core crate.
//!
//! A countdown round during which a single target pops up at one of several
//! fixed holes for a short random interval; clicking it while it is up scores a
//! point. Round logic (`round`) is runtime-agnostic and driven through the
//! `TimerHost` / `Presenter` seams; `web` binds those seams to `setTimeout` and
//! the DOM. Native builds drive rounds headlessly with `VirtualTimers`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod format;
pub mod presenter;
pub mod random;
pub mod round;
pub mod summary;
pub mod timer;
pub mod web;

pub use config::RoundConfig;
pub use error::ConfigError;
pub use format::format_time;
pub use presenter::{NullPresenter, Presenter};
pub use round::{Phase, RoundController, RoundState};
pub use summary::{RoundSummary, SummaryTier};
pub use timer::{Timer, TimerHost, TimerKind, VirtualTimers};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) fails harmlessly; keep the first logger.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Browser entrypoints
// -----------------------------------------------------------------------------

/// Build the board with the default configuration and wait for the Start button.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start_web_mode(RoundConfig::default())
}

/// Like `start_game`, with a (partial) JSON `RoundConfig`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = RoundConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    web::start_web_mode(config)
}

#[wasm_bindgen]
pub fn start_round() {
    web::start_round();
}

#[wasm_bindgen]
pub fn stop_round() {
    web::stop_round();
}

/// Programmatic equivalent of clicking hole `position`.
#[wasm_bindgen]
pub fn activate(position: usize) {
    web::activate(position);
}

/// `mm:ss` rendering exposed for host pages that draw their own timer.
#[wasm_bindgen]
pub fn format_remaining(remaining_ms: u32) -> String {
    format_time(remaining_ms)
}
