//! Game session state
//!
//! All simulation state for a run lives in one owned `GameState`. It is only
//! mutated by [`super::tick`] and the two input methods below.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::block::{Block, BlockColor};
use super::camera::Camera;
use super::particles::Particle;
use super::pendulum::Pendulum;
use super::tower::{Foundation, Tower};
use crate::config::{GameConfig, PivotMode};
use crate::consts::MIN_HANG_CLEARANCE;
use crate::error::ConfigError;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; the crane swings for show
    Menu,
    /// Active gameplay
    Playing,
    /// Run lost (terminal until restart)
    GameOver,
    /// Tower reached the target (terminal until restart)
    Victory,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// Why a run was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Block reached the tower with too little overlap
    MissedLanding,
    /// Block fell far below the view without ever landing
    FellOffscreen,
}

impl GameOverCause {
    pub fn message(&self) -> &'static str {
        match self {
            GameOverCause::MissedLanding => "The block missed the tower!",
            GameOverCause::FellOffscreen => "The block fell off the screen!",
        }
    }
}

/// Things that happened during a tick (for audio/UI collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    BlockReleased,
    BlockLanded { index: usize, overlap: f32 },
    GameOver(GameOverCause),
    Victory,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed every run restarts from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Reference ticks spent in Playing this run
    pub elapsed: f32,
    /// Simulation tick counter (all phases)
    pub time_ticks: u64,
    pub pendulum: Pendulum,
    pub block: Block,
    pub tower: Tower,
    pub foundation: Foundation,
    pub camera: Camera,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub game_over: Option<GameOverCause>,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the menu. Rejects unusable configs.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let foundation = Foundation::for_viewport(
            config.viewport_width,
            config.viewport_height,
            config.foundation_width,
            config.foundation_height,
        );
        let pendulum = Pendulum::new(
            Vec2::new(config.viewport_width / 2.0, config.pivot_screen_y),
            config.pendulum_length,
            config.pendulum_gravity,
            config.pendulum_damping,
            config.initial_angle,
        );
        let block = Block::on_hook(
            pendulum.hook(),
            config.block_width,
            config.block_height,
            BlockColor::default(),
        );

        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            elapsed: 0.0,
            time_ticks: 0,
            pendulum,
            block,
            tower: Tower::new(),
            foundation,
            camera: Camera::new(),
            particles: Vec::new(),
            game_over: None,
            events: Vec::new(),
        };
        state.reset();
        state.phase = GamePhase::Menu;
        Ok(state)
    }

    /// Wipe the run back to its starting layout (phase untouched)
    pub fn reset(&mut self) {
        let config = &self.config;
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.elapsed = 0.0;
        self.tower.clear();
        self.foundation = Foundation::for_viewport(
            config.viewport_width,
            config.viewport_height,
            config.foundation_width,
            config.foundation_height,
        );
        // Camera starts at rest for the empty tower
        let resting = Camera::target(
            config.camera_policy,
            None,
            self.foundation.rect.top(),
            config.viewport_height,
        );
        self.camera = Camera {
            offset_y: resting.unwrap_or(0.0),
            ..Camera::new()
        };
        self.particles.clear();
        self.game_over = None;
        self.pendulum.reset(config.initial_angle);
        self.spawn_block();
    }

    /// Full reset and enter Playing. Valid from any phase.
    pub fn start_or_restart(&mut self) {
        let restarted = self.phase != GamePhase::Menu;
        self.reset();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!(
            "{} run (seed {}, target {} blocks)",
            if restarted { "Restarted" } else { "Started" },
            self.seed,
            self.config.target_blocks
        );
    }

    /// Drop the block. Only while Playing with the block still on the hook;
    /// returns whether anything happened.
    pub fn release_tap(&mut self) -> bool {
        if self.phase != GamePhase::Playing || !self.block.release() {
            return false;
        }
        self.events.push(GameEvent::BlockReleased);
        log::debug!(
            "Released block at x={:.1} y={:.1}",
            self.block.rect.pos.x,
            self.block.rect.pos.y
        );
        true
    }

    /// Hang a fresh block from the hook
    pub fn spawn_block(&mut self) {
        self.sync_pivot();
        let color = BlockColor::random(&mut self.rng);
        self.block = Block::on_hook(
            self.pendulum.hook(),
            self.config.block_width,
            self.config.block_height,
            color,
        );
    }

    /// Re-derive the pivot from the viewport (and camera, if linked).
    /// A camera lagging behind the tower never lets the hanging block dip
    /// into it: the pivot is held at least one rope and block above the top.
    pub fn sync_pivot(&mut self) {
        let config = &self.config;
        let y = match config.pivot_mode {
            PivotMode::WorldFixed => config.pivot_screen_y,
            PivotMode::CameraLinked => self.camera.offset_y + config.pivot_screen_y,
        };
        let lowest = self.tower.top_surface_y(&self.foundation)
            - config.pendulum_length
            - config.block_height
            - MIN_HANG_CLEARANCE;
        self.pendulum.pivot = Vec2::new(config.viewport_width / 2.0, y.min(lowest));
    }

    /// Viewport changed size. The pivot moves now; the foundation follows on
    /// the next reset so an in-flight tower isn't pulled out from under itself.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.viewport_width = width;
        config.viewport_height = height;
        config.validate()?;
        self.config = config;
        self.sync_pivot();
        let hook = self.pendulum.hook();
        self.block.follow_hook(hook);
        Ok(())
    }

    /// End the run with a loss
    pub fn end_run(&mut self, cause: GameOverCause) {
        self.phase = GamePhase::GameOver;
        self.game_over = Some(cause);
        self.events.push(GameEvent::GameOver(cause));
        log::info!(
            "Game over after {} blocks: {}",
            self.tower.len(),
            cause.message()
        );
    }

    /// Human-readable outcome for terminal screens
    pub fn status_message(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::GameOver => self.game_over.map(|c| c.message()),
            GamePhase::Victory => Some("The tower is complete!"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraPolicy;
    use crate::sim::block::{Attachment, PlacedBlock, Rect};
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_new_starts_in_menu() {
        let state = GameState::new(GameConfig::default(), 42).unwrap();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.tower.is_empty());
        assert!(state.block.is_attached());
        assert_eq!(state.status_message(), None);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig {
            block_height: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn test_release_only_while_playing() {
        let mut state = GameState::new(GameConfig::default(), 42).unwrap();
        assert!(!state.release_tap());
        assert!(state.block.is_attached());

        state.start_or_restart();
        assert!(state.release_tap());
        assert_eq!(state.block.state, Attachment::Falling);
        assert!(!state.release_tap());
    }

    #[test]
    fn test_restart_clears_run() {
        let mut state = GameState::new(GameConfig::default(), 42).unwrap();
        state.start_or_restart();
        state.tower.push(PlacedBlock {
            rect: Rect::new(210.0, 720.0, 60.0, 40.0),
            color: BlockColor::Amber,
        });
        state.pendulum.angle = -0.3;
        state.pendulum.angular_vel = 0.02;
        state.camera.offset_y = 77.0;
        state.end_run(GameOverCause::MissedLanding);
        assert_eq!(state.status_message(), Some("The block missed the tower!"));

        state.start_or_restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.tower.is_empty());
        assert_eq!(state.pendulum.angle, 0.8);
        assert_eq!(state.pendulum.angular_vel, 0.0);
        // Fixed margin camera back at rest over the foundation
        assert_eq!(state.camera.offset_y, 280.0);
        assert_eq!(state.camera.shake_ticks, 0);
        assert_eq!(state.game_over, None);
    }

    #[test]
    fn test_camera_starts_at_rest() {
        let mut state = GameState::new(GameConfig::default(), 42).unwrap();
        state.start_or_restart();
        assert_eq!(state.camera.offset_y, 760.0 - 480.0);
        assert_eq!(state.pendulum.pivot.y, 320.0);

        // Nothing drags the crane around before the first landing
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), 1.0);
            assert_eq!(state.camera.offset_y, 280.0);
            assert_eq!(state.pendulum.pivot.y, 320.0);
        }

        // Centering has no target until a block lands
        let config = GameConfig {
            camera_policy: CameraPolicy::Centering {
                visual_offset: -80.0,
            },
            ..Default::default()
        };
        let state = GameState::new(config, 42).unwrap();
        assert_eq!(state.camera.offset_y, 0.0);
    }

    #[test]
    fn test_resize_moves_pivot() {
        let mut state = GameState::new(GameConfig::default(), 42).unwrap();
        state.resize(1000.0, 700.0).unwrap();
        assert_eq!(state.pendulum.pivot.x, 500.0);
        let hook = state.pendulum.hook();
        assert_eq!(state.block.rect.pos.x, hook.x - 30.0);

        // Foundation stays until the next reset
        assert_eq!(state.foundation.rect.pos.y, 760.0);
        state.start_or_restart();
        assert_eq!(state.foundation.rect.pos, Vec2::new(400.0, 660.0));

        assert!(state.resize(100.0, 700.0).is_err());
        assert_eq!(state.config.viewport_width, 1000.0);
    }
}
