//! Camera follow and screen shake
//!
//! The camera only translates rendering. Pendulum, fall and landing math all
//! run in world space regardless of where the camera is.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CameraPolicy;

/// Horizontal drift of background layers per unit of camera travel
const PARALLAX_DRIFT: f32 = 0.1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Camera {
    /// World y shown at the top of the viewport
    pub offset_y: f32,
    /// Current jitter (render only)
    pub shake: Vec2,
    pub shake_ticks: u32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset the policy wants, or None if there is nothing to track yet
    pub fn target(
        policy: CameraPolicy,
        highest_block_y: Option<f32>,
        top_surface_y: f32,
        viewport_height: f32,
    ) -> Option<f32> {
        match policy {
            CameraPolicy::Centering { visual_offset } => {
                highest_block_y.map(|y| y - viewport_height / 2.0 + visual_offset)
            }
            CameraPolicy::FixedMargin { top_margin } => Some(top_surface_y - top_margin),
        }
    }

    /// Ease toward the policy target
    pub fn follow(
        &mut self,
        policy: CameraPolicy,
        highest_block_y: Option<f32>,
        top_surface_y: f32,
        viewport_height: f32,
        lerp: f32,
    ) {
        let Some(target) = Self::target(policy, highest_block_y, top_surface_y, viewport_height)
        else {
            return;
        };

        self.offset_y += (target - self.offset_y) * lerp;
        if let CameraPolicy::Centering { .. } = policy {
            // Approach from below only, never past the centered position
            self.offset_y = self.offset_y.min(target);
        }
    }

    /// Arm the shake countdown
    pub fn trigger_shake(&mut self, ticks: u32) {
        self.shake_ticks = ticks;
    }

    /// One tick of shake: fresh jitter while armed, zero once expired
    pub fn update_shake<R: Rng>(&mut self, rng: &mut R, intensity: f32) {
        if self.shake_ticks > 0 {
            self.shake = Vec2::new(
                (rng.random::<f32>() - 0.5) * intensity,
                (rng.random::<f32>() - 0.5) * intensity,
            );
            self.shake_ticks -= 1;
        } else {
            self.shake = Vec2::ZERO;
        }
    }

    /// Translation the renderer applies to world coordinates
    pub fn render_translation(&self) -> Vec2 {
        Vec2::new(self.shake.x, self.shake.y - self.offset_y)
    }

    /// Shift for a background layer at `depth` (0 = pinned to screen, 1 = world)
    pub fn parallax_shift(&self, depth: f32, enabled: bool) -> Vec2 {
        if !enabled {
            return Vec2::ZERO;
        }
        Vec2::new(
            self.offset_y * PARALLAX_DRIFT * depth,
            -self.offset_y * depth,
        )
    }
}
