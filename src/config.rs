//! Game configuration
//!
//! Supplied once at session start. Everything is validated up front so the
//! simulation never has to deal with a degenerate setup mid-tick.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tuning variants seen across revisions of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TuningPreset {
    /// Half overlap required, perpetual swing
    #[default]
    Classic,
    /// 30% overlap required, swing slowly dies down
    Relaxed,
}

impl TuningPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuningPreset::Classic => "Classic",
            TuningPreset::Relaxed => "Relaxed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(TuningPreset::Classic),
            "relaxed" | "easy" => Some(TuningPreset::Relaxed),
            _ => None,
        }
    }

    /// Minimum overlap fraction for this preset
    pub fn min_overlap(&self) -> f32 {
        match self {
            TuningPreset::Classic => 0.5,
            TuningPreset::Relaxed => 0.3,
        }
    }

    /// Per-tick pendulum damping for this preset (1.0 = none)
    pub fn pendulum_damping(&self) -> f32 {
        match self {
            TuningPreset::Classic => 1.0,
            TuningPreset::Relaxed => 0.998,
        }
    }
}

/// Where the pendulum pivot lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PivotMode {
    /// Pivot is pinned in world space at its screen position for camera offset 0;
    /// the crane scrolls out of view as the camera climbs
    WorldFixed,
    /// Pivot is re-derived from the camera offset every tick, so the crane
    /// always hangs at the same place on screen
    #[default]
    CameraLinked,
}

/// How the camera follows the tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraPolicy {
    /// Keep the highest block around mid-screen, shifted by `visual_offset`.
    /// The offset is clamped so it never passes its own target.
    Centering { visual_offset: f32 },
    /// Keep the highest surface `top_margin` below the top of the viewport
    FixedMargin { top_margin: f32 },
}

impl Default for CameraPolicy {
    fn default() -> Self {
        CameraPolicy::FixedMargin { top_margin: 480.0 }
    }
}

/// Full session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Pendulum ===
    /// Rope length from pivot to hook
    pub pendulum_length: f32,
    /// Restoring acceleration coefficient (g in g/L)
    pub pendulum_gravity: f32,
    /// Multiplicative angular velocity loss per tick, in (0, 1]
    pub pendulum_damping: f32,
    /// Release angle at reset (radians, 0 = hanging straight down)
    pub initial_angle: f32,
    /// Pivot height below the top of the viewport
    pub pivot_screen_y: f32,
    pub pivot_mode: PivotMode,

    // === Blocks ===
    /// Downward acceleration of a released block (units/tick²)
    pub block_gravity: f32,
    pub block_width: f32,
    pub block_height: f32,
    pub foundation_width: f32,
    pub foundation_height: f32,

    // === Rules ===
    /// Overlap fraction (relative to the falling block) required to land
    pub min_overlap: f32,
    /// Tower height that wins the run
    pub target_blocks: u32,
    /// Distance below the viewport at which a falling block is lost
    pub offscreen_margin: f32,

    // === Camera ===
    pub camera_policy: CameraPolicy,
    /// Fraction of the remaining distance covered per tick, in (0, 1)
    pub camera_lerp: f32,

    // === Effects ===
    pub shake_enabled: bool,
    pub shake_intensity: f32,
    pub shake_duration_ticks: u32,
    pub particles_enabled: bool,
    pub particles_per_landing: usize,
    pub parallax_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 480.0,
            viewport_height: 800.0,

            pendulum_length: 200.0,
            pendulum_gravity: 0.5,
            pendulum_damping: 1.0,
            initial_angle: 0.8,
            pivot_screen_y: 40.0,
            pivot_mode: PivotMode::CameraLinked,

            block_gravity: 0.6,
            block_width: 60.0,
            block_height: 40.0,
            foundation_width: 200.0,
            foundation_height: 40.0,

            min_overlap: 0.5,
            target_blocks: 20,
            offscreen_margin: OFFSCREEN_MARGIN,

            camera_policy: CameraPolicy::default(),
            camera_lerp: 0.1,

            shake_enabled: true,
            shake_intensity: 5.0,
            shake_duration_ticks: SHAKE_DURATION_TICKS,
            particles_enabled: true,
            particles_per_landing: PARTICLES_PER_LANDING,
            parallax_enabled: true,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this check too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl GameConfig {
    /// Create a config from a tuning preset (other fields default)
    pub fn from_preset(preset: TuningPreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a tuning preset on top of the current values
    pub fn apply_preset(&mut self, preset: TuningPreset) {
        self.min_overlap = preset.min_overlap();
        self.pendulum_damping = preset.pendulum_damping();
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that can't produce a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;
        positive("pendulum_length", self.pendulum_length)?;
        positive("pendulum_gravity", self.pendulum_gravity)?;
        positive("block_gravity", self.block_gravity)?;
        positive("block_width", self.block_width)?;
        positive("block_height", self.block_height)?;
        positive("foundation_width", self.foundation_width)?;
        positive("foundation_height", self.foundation_height)?;
        positive("offscreen_margin", self.offscreen_margin)?;

        // Damping of exactly 0 would freeze the hook on the first tick
        in_range(
            "pendulum_damping",
            self.pendulum_damping,
            f32::MIN_POSITIVE,
            1.0,
        )?;
        in_range("min_overlap", self.min_overlap, f32::MIN_POSITIVE, 1.0)?;
        in_range(
            "initial_angle",
            self.initial_angle,
            -std::f32::consts::FRAC_PI_2,
            std::f32::consts::FRAC_PI_2,
        )?;
        in_range("pivot_screen_y", self.pivot_screen_y, 0.0, self.viewport_height)?;
        in_range("shake_intensity", self.shake_intensity, 0.0, f32::MAX)?;

        // Lerp must actually move and must never overshoot
        if !(self.camera_lerp > 0.0 && self.camera_lerp < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "camera_lerp",
                value: self.camera_lerp,
                min: 0.0,
                max: 1.0,
            });
        }

        if self.target_blocks == 0 {
            return Err(ConfigError::ZeroTarget);
        }

        if self.foundation_width > self.viewport_width {
            return Err(ConfigError::FoundationTooWide {
                foundation: self.foundation_width,
                viewport: self.viewport_width,
            });
        }

        self.check_hang_clearance()
    }

    /// The block hanging at the bottom of its swing must clear the highest
    /// surface it can be carried over, including the moment a landing raises
    /// the top by one block before the camera has moved.
    fn check_hang_clearance(&self) -> Result<(), ConfigError> {
        let reach = self.pivot_screen_y + self.pendulum_length + self.block_height;
        let foundation_top = self.viewport_height - self.foundation_height;

        let limit = match (self.pivot_mode, self.camera_policy) {
            (PivotMode::WorldFixed, _) => {
                foundation_top - (self.target_blocks - 1) as f32 * self.block_height
            }
            // The camera never climbs past its centering target, and stays
            // put while the tower is empty
            (PivotMode::CameraLinked, CameraPolicy::Centering { visual_offset }) => {
                (self.viewport_height / 2.0 - visual_offset).min(foundation_top)
                    - self.block_height
            }
            (PivotMode::CameraLinked, CameraPolicy::FixedMargin { top_margin }) => {
                top_margin - self.block_height
            }
        };

        if reach + MIN_HANG_CLEARANCE > limit {
            return Err(ConfigError::HookBelowTower { reach, limit });
        }
        Ok(())
    }
}
