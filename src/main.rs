//! Ox Bloxx entry point
//!
//! Native builds run a headless autopilot demo of the simulation; the browser
//! build is driven from JS through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use ox_bloxx::consts::REFERENCE_FRAME_MS;
    use ox_bloxx::sim::{GameEvent, GamePhase, Snapshot};
    use ox_bloxx::{FrameDriver, FrameSink, GameConfig};

    /// Give up after ten minutes of simulated play
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    /// Logs gameplay events as frames come in
    struct LogSink {
        frames: u32,
    }

    impl FrameSink for LogSink {
        fn present(&mut self, snapshot: &Snapshot) {
            self.frames += 1;
            for event in &snapshot.events {
                match event {
                    GameEvent::BlockLanded { index, overlap } => log::info!(
                        "Block {}/{} landed ({:.0}% overlap), camera at {:.1}",
                        index + 1,
                        snapshot.target_blocks,
                        overlap * 100.0,
                        snapshot.camera_y
                    ),
                    GameEvent::GameOver(cause) => log::warn!("{}", cause.message()),
                    _ => log::debug!("{:?}", event),
                }
            }
        }
    }

    fn load_config() -> GameConfig {
        let Some(path) = std::env::args().nth(1) else {
            return GameConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match GameConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Rejected config {}: {} (using defaults)", path, e);
                    GameConfig::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {} (using defaults)", path, e);
                GameConfig::default()
            }
        }
    }

    pub fn run() {
        let config = load_config();
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut driver = match FrameDriver::new(config, seed) {
            Ok(driver) => driver,
            Err(e) => {
                log::error!("Invalid configuration: {}", e);
                std::process::exit(1);
            }
        };

        let mut sink = LogSink { frames: 0 };
        driver.set_autopilot(true);
        driver.queue_start();

        let mut now = 0.0;
        while sink.frames < MAX_FRAMES {
            driver.frame(now, &mut sink);
            now += REFERENCE_FRAME_MS;
            if driver.state().phase.is_terminal() {
                break;
            }
        }

        let state = driver.state();
        match state.phase {
            GamePhase::Victory | GamePhase::GameOver => println!(
                "{} ({} blocks, {} frames)",
                state.status_message().unwrap_or_default(),
                state.tower.len(),
                sink.frames
            ),
            _ => println!(
                "Stopped after {} frames with {} blocks",
                sink.frames,
                state.tower.len()
            ),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ox Bloxx (native) starting headless demo...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
