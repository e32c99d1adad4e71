//! Tower and foundation
//!
//! The tower is append-only: index 0 sits on the foundation, the last entry is
//! the landing target for the next block.

use serde::{Deserialize, Serialize};

use super::block::{PlacedBlock, Rect};

/// Static platform the first block lands on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Foundation {
    pub rect: Rect,
}

impl Foundation {
    /// Centered horizontally, resting on the bottom of the viewport
    pub fn for_viewport(viewport_width: f32, viewport_height: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(
                viewport_width / 2.0 - width / 2.0,
                viewport_height - height,
                width,
                height,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tower {
    blocks: Vec<PlacedBlock>,
}

impl Tower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.blocks
    }

    pub fn top(&self) -> Option<&PlacedBlock> {
        self.blocks.last()
    }

    /// Box the next block must land on: the top block, or the foundation
    pub fn landing_target(&self, foundation: &Foundation) -> Rect {
        self.top().map(|b| b.rect).unwrap_or(foundation.rect)
    }

    /// Y of the highest surface (top block or foundation)
    pub fn top_surface_y(&self, foundation: &Foundation) -> f32 {
        self.landing_target(foundation).top()
    }

    /// Append a landed block; returns its index
    pub fn push(&mut self, block: PlacedBlock) -> usize {
        debug_assert!(
            self.top().is_none_or(|top| block.rect.top() < top.rect.top()),
            "tower must grow upward"
        );
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}
