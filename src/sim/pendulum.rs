//! Crane pendulum
//!
//! A simple pendulum integrated with semi-implicit Euler using the exact
//! restoring torque (`-g/L * sin(angle)`), not the small-angle form. The hook
//! position is derived from the angle, never integrated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rope_end;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pendulum {
    /// Current angle (radians, 0 = hanging straight down)
    pub angle: f32,
    /// Angular velocity (radians per reference tick)
    pub angular_vel: f32,
    /// Rope anchor in world space
    pub pivot: Vec2,
    pub length: f32,
    /// Restoring acceleration coefficient
    pub gravity: f32,
    /// Per-tick multiplicative velocity loss (1.0 = none)
    pub damping: f32,
}

impl Pendulum {
    pub fn new(pivot: Vec2, length: f32, gravity: f32, damping: f32, angle: f32) -> Self {
        Self {
            angle,
            angular_vel: 0.0,
            pivot,
            length,
            gravity,
            damping,
        }
    }

    /// Angular acceleration at the current angle
    #[inline]
    pub fn angular_accel(&self) -> f32 {
        -(self.gravity / self.length) * self.angle.sin()
    }

    /// Advance by `dt` reference ticks
    pub fn advance(&mut self, dt: f32) {
        self.angular_vel += self.angular_accel() * dt;
        if self.damping < 1.0 {
            self.angular_vel *= self.damping;
        }
        self.angle += self.angular_vel * dt;
    }

    /// Hook position at the end of the rope
    #[inline]
    pub fn hook(&self) -> Vec2 {
        rope_end(self.pivot, self.length, self.angle)
    }

    /// Put the pendulum back at rest at `angle`
    pub fn reset(&mut self, angle: f32) {
        self.angle = angle;
        self.angular_vel = 0.0;
    }
}
