//! Simulation tick
//!
//! One call advances the session by `dt` reference ticks (1.0 = one 60 Hz frame).
//! Phase order: inputs, pendulum, falling block, landing, camera, shake, dust.

use super::block::PlacedBlock;
use super::collision::{LandingCheck, check_landing, fell_offscreen};
use super::particles::{spawn_dust, update_particles};
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};

/// Edge-triggered inputs consumed by a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the block (tap/click/space)
    pub release: bool,
    /// Start from the menu or restart after a finished run
    pub start: bool,
    /// Idle/demo mode - autopilot drops the block when lined up
    pub autopilot: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // A start tap never doubles as a release
    if input.start {
        state.start_or_restart();
    } else if input.release
        || (input.autopilot && crate::demo::autopilot_release(state))
    {
        state.release_tap();
    }

    // Terminal phases are frozen until restart
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => {
            // Swing for show, nothing else moves
            state.sync_pivot();
            state.pendulum.advance(dt);
            let hook = state.pendulum.hook();
            state.block.follow_hook(hook);
        }
        GamePhase::Playing => tick_playing(state, dt),
        GamePhase::GameOver | GamePhase::Victory => {}
    }
}

fn tick_playing(state: &mut GameState, dt: f32) {
    state.elapsed += dt;

    // Pendulum
    state.sync_pivot();
    state.pendulum.advance(dt);
    let hook = state.pendulum.hook();
    state.block.follow_hook(hook);

    // Falling block
    if state.block.is_falling() {
        state.block.fall(state.config.block_gravity, dt);
        resolve_fall(state);
        if state.phase != GamePhase::Playing {
            return;
        }
    }

    // Camera
    let config = &state.config;
    state.camera.follow(
        config.camera_policy,
        state.tower.top().map(|b| b.rect.top()),
        state.tower.top_surface_y(&state.foundation),
        config.viewport_height,
        config.camera_lerp,
    );
    state
        .camera
        .update_shake(&mut state.rng, state.config.shake_intensity);

    update_particles(&mut state.particles, dt);
}

/// Landing check for the falling block against the top of the tower
fn resolve_fall(state: &mut GameState) {
    let target = state.tower.landing_target(&state.foundation);

    match check_landing(&state.block.rect, &target, state.config.min_overlap) {
        LandingCheck::Airborne => {
            if fell_offscreen(
                &state.block.rect,
                state.camera.offset_y,
                state.config.viewport_height,
                state.config.offscreen_margin,
            ) {
                state.end_run(GameOverCause::FellOffscreen);
            }
        }
        LandingCheck::Missed { overlap } => {
            log::debug!(
                "Missed: overlap {:.2} < {:.2}",
                overlap,
                state.config.min_overlap
            );
            state.end_run(GameOverCause::MissedLanding);
        }
        LandingCheck::Landed { surface_y, overlap } => land_block(state, surface_y, overlap),
    }
}

fn land_block(state: &mut GameState, surface_y: f32, overlap: f32) {
    state.block.land_on(surface_y);
    let index = state.tower.push(PlacedBlock::from(&state.block));
    state.events.push(GameEvent::BlockLanded { index, overlap });
    log::debug!(
        "Landed block {} at y={:.1} (overlap {:.2})",
        index + 1,
        state.block.rect.top(),
        overlap
    );

    if state.config.shake_enabled {
        state.camera.trigger_shake(state.config.shake_duration_ticks);
    }
    if state.config.particles_enabled {
        spawn_dust(
            &mut state.particles,
            &mut state.rng,
            state.block.rect.bottom_center(),
            state.config.particles_per_landing,
        );
    }

    if state.tower.len() >= state.config.target_blocks as usize {
        state.phase = GamePhase::Victory;
        state.events.push(GameEvent::Victory);
        log::info!(
            "Victory! Tower of {} blocks in {:.0} ticks",
            state.tower.len(),
            state.elapsed
        );
        return;
    }

    state.spawn_block();
}
