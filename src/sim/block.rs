//! Block entity and free fall
//!
//! Exactly one block is "current" at a time: hanging from the hook, or falling.
//! Once it lands a [`PlacedBlock`] copy goes into the tower.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, y grows downward (`pos` is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Middle of the bottom edge
    #[inline]
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }
}

/// Block paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockColor {
    #[default]
    Orange,
    Amber,
    Concrete,
    Brick,
    Sand,
}

impl BlockColor {
    pub const ALL: [BlockColor; 5] = [
        BlockColor::Orange,
        BlockColor::Amber,
        BlockColor::Concrete,
        BlockColor::Brick,
        BlockColor::Sand,
    ];

    /// CSS hex color for the renderer
    pub fn hex(&self) -> &'static str {
        match self {
            BlockColor::Orange => "#ff6b35",
            BlockColor::Amber => "#f7931e",
            BlockColor::Concrete => "#c4c4c4",
            BlockColor::Brick => "#8b4513",
            BlockColor::Sand => "#cd853f",
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Where the current block is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attachment {
    /// Slaved to the hook
    AttachedToHook,
    /// Released, under gravity
    Falling,
    /// Resting on the tower (copied into it)
    Landed,
}

/// The block currently on the hook or in the air
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Vertical velocity (units per reference tick, positive = down)
    pub vel_y: f32,
    pub color: BlockColor,
    pub state: Attachment,
}

impl Block {
    /// New block hanging from `hook`
    pub fn on_hook(hook: Vec2, width: f32, height: f32, color: BlockColor) -> Self {
        let mut block = Self {
            rect: Rect::new(0.0, 0.0, width, height),
            vel_y: 0.0,
            color,
            state: Attachment::AttachedToHook,
        };
        block.follow_hook(hook);
        block
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.state == Attachment::AttachedToHook
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.state == Attachment::Falling
    }

    /// Snap to the hook (no-op unless attached)
    pub fn follow_hook(&mut self, hook: Vec2) {
        if self.is_attached() {
            self.rect.pos = Vec2::new(hook.x - self.rect.width() / 2.0, hook.y);
        }
    }

    /// Let go of the hook. Returns false if the block wasn't attached.
    pub fn release(&mut self) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.state = Attachment::Falling;
        self.vel_y = 0.0;
        true
    }

    /// Integrate gravity. No horizontal drift once released.
    pub fn fall(&mut self, gravity: f32, dt: f32) {
        if self.is_falling() {
            self.vel_y += gravity * dt;
            self.rect.pos.y += self.vel_y * dt;
        }
    }

    /// Rest the block's bottom on `surface_y`. Exact when f32 allows it,
    /// otherwise a sub-ulp gap above the surface (see [`crate::rest_on`]).
    pub fn land_on(&mut self, surface_y: f32) {
        self.rect.pos.y = crate::rest_on(surface_y, self.rect.size.y);
        self.vel_y = 0.0;
        self.state = Attachment::Landed;
    }
}

/// Immutable record of a landed block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub rect: Rect,
    pub color: BlockColor,
}

impl From<&Block> for PlacedBlock {
    fn from(block: &Block) -> Self {
        Self {
            rect: block.rect,
            color: block.color,
        }
    }
}
