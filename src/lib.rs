//! Ox Bloxx - A pendulum crane tower-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pendulum, free fall, landing, camera, game state)
//! - `config`: Typed, validated game configuration
//! - `driver`: Frame pacing and input queueing around the simulation tick
//! - `demo`: Autopilot used for the headless demo and attract mode
//! - `platform`: Browser boundary (wasm only)

pub mod config;
pub mod demo;
pub mod driver;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::{CameraPolicy, GameConfig, PivotMode, TuningPreset};
pub use driver::{FrameClock, FrameDriver, FrameSink};
pub use error::ConfigError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference frame length the dt multiplier is measured against (60 Hz)
    pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest dt multiplier a single tick may integrate (frame hitch guard)
    pub const MAX_DT_MULTIPLIER: f32 = 2.0;

    /// Ticks the camera keeps shaking after a landing
    pub const SHAKE_DURATION_TICKS: u32 = 10;
    /// Extra distance below the viewport before a falling block counts as lost
    pub const OFFSCREEN_MARGIN: f32 = 500.0;

    /// Dust particles
    pub const PARTICLES_PER_LANDING: usize = 8;
    pub const PARTICLE_LIFE_TICKS: f32 = 30.0;
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    /// Hard cap on live particles
    pub const MAX_PARTICLES: usize = 256;

    /// Minimum gap between a hanging block's lowest point and the tower top
    pub const MIN_HANG_CLEARANCE: f32 = 1.0;
    /// Ulp steps `rest_on` may take to correct the subtraction's rounding
    pub const MAX_SNAP_ULPS: u32 = 8;
}

/// Horizontal extent shared by two spans, or 0 if they don't touch
#[inline]
pub fn span_overlap(a_left: f32, a_right: f32, b_left: f32, b_right: f32) -> f32 {
    (a_right.min(b_right) - a_left.max(b_left)).max(0.0)
}

/// Point at the end of a rope of `length` hanging from `pivot` at `angle`
/// (0 = straight down, positive swings toward +x, y grows downward)
#[inline]
pub fn rope_end(pivot: Vec2, length: f32, angle: f32) -> Vec2 {
    pivot + Vec2::new(length * angle.sin(), length * angle.cos())
}

/// Top coordinate that rests a box of `height` on `surface`.
///
/// `surface - height` does not always add back to `surface` in f32, so the
/// result is nudged by single ulps. The box bottom equals `surface` whenever
/// some f32 top gives that; otherwise it sits less than one ulp above it.
/// It never ends up below the surface.
pub fn rest_on(surface: f32, height: f32) -> f32 {
    let mut top = surface - height;

    for _ in 0..consts::MAX_SNAP_ULPS {
        if top + height <= surface {
            break;
        }
        top = step_ulp(top, false);
    }
    for _ in 0..consts::MAX_SNAP_ULPS {
        if top + height == surface {
            break;
        }
        let lower = step_ulp(top, true);
        if lower + height > surface {
            break;
        }
        top = lower;
    }
    top
}

/// Neighbouring f32 toward +inf (`up`) or -inf
fn step_ulp(x: f32, up: bool) -> f32 {
    if !x.is_finite() {
        return x;
    }
    if x == 0.0 {
        let tiny = f32::from_bits(1);
        return if up { tiny } else { -tiny };
    }
    let bits = x.to_bits();
    if (x > 0.0) == up {
        f32::from_bits(bits + 1)
    } else {
        f32::from_bits(bits - 1)
    }
}
