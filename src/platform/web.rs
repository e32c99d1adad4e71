//! Browser boundary
//!
//! JS owns the canvas, DOM buttons and requestAnimationFrame; it forwards taps
//! and timestamps here and draws the returned snapshot JSON.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::driver::{FrameDriver, FrameSink};
use crate::sim::Snapshot;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Ox Bloxx (web) starting...");
}

/// Keeps the latest snapshot as JSON for JS to pick up
#[derive(Default)]
struct JsonSink {
    json: String,
}

impl FrameSink for JsonSink {
    fn present(&mut self, snapshot: &Snapshot) {
        match serde_json::to_string(snapshot) {
            Ok(json) => self.json = json,
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}

#[wasm_bindgen]
pub struct WebGame {
    driver: FrameDriver,
    sink: JsonSink,
}

#[wasm_bindgen]
impl WebGame {
    /// `config_json` may be omitted for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, seed: u32) -> Result<WebGame, JsValue> {
        let driver = match config_json {
            Some(json) => GameConfig::from_json(&json),
            None => Ok(GameConfig::default()),
        }
        .and_then(|config| FrameDriver::new(config, seed as u64));

        match driver {
            Ok(driver) => Ok(WebGame {
                driver,
                sink: JsonSink::default(),
            }),
            Err(e) => {
                log::warn!("Rejected config: {}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    /// Canvas tap / click
    pub fn release_tap(&mut self) {
        self.driver.queue_release();
    }

    /// Start / restart button
    pub fn start_or_restart(&mut self) {
        self.driver.queue_start();
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.driver.set_autopilot(enabled);
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.driver
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Tab hidden: don't count the gap as one giant frame
    pub fn pause_clock(&mut self) {
        self.driver.pause_clock();
    }

    /// Advance one animation frame and return the snapshot as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        self.driver.frame(now_ms, &mut self.sink);
        self.sink.json.clone()
    }
}
