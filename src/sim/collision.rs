//! Landing detection for falling blocks
//!
//! A falling block is tested against exactly one target: the top of the tower,
//! or the foundation while the tower is empty. Overlap is always measured
//! relative to the falling block's width.

use super::block::Rect;
use crate::span_overlap;

/// Result of a landing check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingCheck {
    /// Bottom edge hasn't reached the target surface yet
    Airborne,
    /// Enough overlap: rest the block on `surface_y`
    Landed { surface_y: f32, overlap: f32 },
    /// Reached the surface but hung too far off the edge
    Missed { overlap: f32 },
}

/// Fraction of `block`'s width that sits over `target`, in [0, 1]
pub fn overlap_fraction(block: &Rect, target: &Rect) -> f32 {
    span_overlap(block.left(), block.right(), target.left(), target.right()) / block.width()
}

/// Check a falling block against its landing target
pub fn check_landing(block: &Rect, target: &Rect, min_overlap: f32) -> LandingCheck {
    if block.bottom() < target.top() {
        return LandingCheck::Airborne;
    }

    let overlap = overlap_fraction(block, target);
    if overlap < min_overlap {
        LandingCheck::Missed { overlap }
    } else {
        LandingCheck::Landed {
            surface_y: target.top(),
            overlap,
        }
    }
}

/// Safety net: block dropped well past the bottom of the view without landing
pub fn fell_offscreen(block: &Rect, camera_y: f32, viewport_height: f32, margin: f32) -> bool {
    block.top() > camera_y + viewport_height + margin
}
