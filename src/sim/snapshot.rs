//! Read-only view handed to the renderer each frame

use glam::Vec2;
use serde::Serialize;

use super::block::{Attachment, BlockColor, PlacedBlock, Rect};
use super::particles::Particle;
use super::state::{GameEvent, GamePhase, GameState};

/// The block on the hook or in the air
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentBlock {
    pub rect: Rect,
    pub color: BlockColor,
    pub hex: &'static str,
    pub state: Attachment,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub pivot: Vec2,
    pub hook: Vec2,
    /// None once the final block has landed
    pub block: Option<CurrentBlock>,
    pub tower: Vec<PlacedBlock>,
    pub foundation: Rect,
    pub camera_y: f32,
    pub shake: Vec2,
    pub particles: Vec<Particle>,
    pub tower_len: usize,
    pub target_blocks: u32,
    pub message: Option<&'static str>,
    pub parallax_enabled: bool,
    pub elapsed: f32,
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let block = (self.block.state != Attachment::Landed).then(|| CurrentBlock {
            rect: self.block.rect,
            color: self.block.color,
            hex: self.block.color.hex(),
            state: self.block.state,
        });

        Snapshot {
            phase: self.phase,
            pivot: self.pendulum.pivot,
            hook: self.pendulum.hook(),
            block,
            tower: self.tower.blocks().to_vec(),
            foundation: self.foundation.rect,
            camera_y: self.camera.offset_y,
            shake: self.camera.shake,
            particles: self.particles.clone(),
            tower_len: self.tower.len(),
            target_blocks: self.config.target_blocks,
            message: self.status_message(),
            parallax_enabled: self.config.parallax_enabled,
            elapsed: self.elapsed,
            events: self.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(GameConfig::default(), 9).unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Menu);
        assert_eq!(snap.tower_len, 0);
        assert_eq!(snap.target_blocks, 20);
        assert_eq!(snap.message, None);
        let block = snap.block.unwrap();
        assert_eq!(block.state, Attachment::AttachedToHook);
        assert_eq!(block.hex, block.color.hex());
        assert_eq!(block.rect.pos.y, snap.hook.y);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, 1.0);
        assert_eq!(state.snapshot().phase, GamePhase::Playing);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(GameConfig::default(), 9).unwrap();
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
        assert!(json.contains("\"tower_len\":0"));
    }
}
