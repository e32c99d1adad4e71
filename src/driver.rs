//! Frame driver
//!
//! One `frame()` per display refresh: consume queued input once, run one
//! simulation tick with a clamped dt, hand the result to the renderer.

use crate::config::GameConfig;
use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{GameState, Snapshot, TickInput, tick};

/// Renderer / UI collaborator that consumes a frame's state
pub trait FrameSink {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Converts wall-clock timestamps into a dt multiplier
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// dt for a frame at `now_ms`, relative to a 60 Hz reference frame and
    /// clamped to [0, MAX_DT_MULTIPLIER]. The first frame counts as nominal.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / REFERENCE_FRAME_MS) as f32,
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, MAX_DT_MULTIPLIER)
    }

    /// Forget the last timestamp (e.g. after the tab was hidden)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Owns the session and paces it
#[derive(Debug, Clone)]
pub struct FrameDriver {
    state: GameState,
    clock: FrameClock,
    /// Edge flags waiting for the next frame
    pending: TickInput,
}

impl FrameDriver {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config, seed)?,
            clock: FrameClock::new(),
            pending: TickInput::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Queue a release tap for the next frame
    pub fn queue_release(&mut self) {
        self.pending.release = true;
    }

    /// Queue a start/restart for the next frame
    pub fn queue_start(&mut self) {
        self.pending.start = true;
    }

    /// Let the autopilot play (persists across frames)
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.pending.autopilot = enabled;
    }

    /// Viewport size changed
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.state.resize(width, height)
    }

    /// Skip the time spent while the page was hidden
    pub fn pause_clock(&mut self) {
        self.clock.reset();
    }

    /// Run one frame at wall-clock `now_ms` and present it
    pub fn frame(&mut self, now_ms: f64, sink: &mut dyn FrameSink) {
        let dt = self.clock.advance(now_ms);

        let input = self.pending.clone();
        self.pending.release = false;
        self.pending.start = false;

        tick(&mut self.state, &input, dt);
        sink.present(&self.state.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameEvent, GamePhase};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Snapshot>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    #[test]
    fn test_clock_clamps() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), 1.0);
        assert!((clock.advance(1000.0 + REFERENCE_FRAME_MS) - 1.0).abs() < 1e-4);
        assert!((clock.advance(1000.0 + REFERENCE_FRAME_MS * 1.5) - 0.5).abs() < 1e-4);
        // Hitch: capped
        assert_eq!(clock.advance(5000.0), MAX_DT_MULTIPLIER);
        // Clock went backwards
        assert_eq!(clock.advance(4000.0), 0.0);

        clock.reset();
        assert_eq!(clock.advance(90_000.0), 1.0);
    }

    #[test]
    fn test_inputs_consumed_once() {
        let mut driver = FrameDriver::new(GameConfig::default(), 3).unwrap();
        let mut sink = Recorder::default();

        driver.queue_start();
        driver.frame(0.0, &mut sink);
        assert_eq!(driver.state().phase, GamePhase::Playing);

        driver.queue_release();
        driver.frame(16.7, &mut sink);
        driver.frame(33.4, &mut sink);

        assert_eq!(sink.frames.len(), 3);
        assert_eq!(sink.frames[0].events, vec![GameEvent::Started]);
        assert_eq!(sink.frames[1].events, vec![GameEvent::BlockReleased]);
        assert!(sink.frames[2].events.is_empty());
        assert!(driver.state().block.is_falling());
    }

    #[test]
    fn test_autopilot_session() {
        let config = GameConfig {
            target_blocks: 4,
            ..Default::default()
        };
        let mut driver = FrameDriver::new(config, 11).unwrap();
        let mut sink = Recorder::default();
        driver.set_autopilot(true);
        driver.queue_start();

        let mut now = 0.0;
        for _ in 0..5_000 {
            driver.frame(now, &mut sink);
            now += REFERENCE_FRAME_MS;
            if driver.state().phase.is_terminal() {
                break;
            }
        }
        let last = sink.frames.last().unwrap();
        assert_eq!(last.phase, GamePhase::Victory);
        assert_eq!(last.tower_len, 4);
        assert!(last.block.is_none());
        assert_eq!(last.message, Some("The tower is complete!"));
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = GameConfig {
            pendulum_length: -1.0,
            ..Default::default()
        };
        assert!(FrameDriver::new(config, 0).is_err());
    }
}
