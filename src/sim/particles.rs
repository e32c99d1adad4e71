//! Landing dust (visual only, never affects gameplay)

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in reference ticks
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
}

impl Particle {
    /// Remaining life as 0-1, for fading
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Puff `count` particles out of `origin` (capped at MAX_PARTICLES live)
pub fn spawn_dust<R: Rng>(particles: &mut Vec<Particle>, rng: &mut R, origin: Vec2, count: usize) {
    for _ in 0..count {
        if particles.len() >= MAX_PARTICLES {
            break;
        }
        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 4.0,
                (rng.random::<f32>() - 0.5) * 4.0 - 2.0,
            ),
            life: PARTICLE_LIFE_TICKS,
            max_life: PARTICLE_LIFE_TICKS,
            size: rng.random::<f32>() * 4.0 + 2.0,
        });
    }
}

/// Ballistic step, then drop expired particles
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for p in particles.iter_mut() {
        p.pos += p.vel * dt;
        p.vel.y += PARTICLE_GRAVITY * dt;
        p.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}
