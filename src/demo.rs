//! Autopilot for the headless demo and attract mode

use crate::sim::{GamePhase, GameState};

/// Fraction of the block width the autopilot accepts as "lined up"
const AIM_TOLERANCE: f32 = 0.15;

/// Whether the autopilot would drop the block right now: playing, block still
/// on the hook, and the block centered over its landing target.
pub fn autopilot_release(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing || !state.block.is_attached() {
        return false;
    }

    let target = state.tower.landing_target(&state.foundation);
    let block_center = state.block.rect.bottom_center().x;
    let target_center = target.bottom_center().x;

    (block_center - target_center).abs() <= state.block.rect.width() * AIM_TOLERANCE
}
