//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod block;
pub mod camera;
pub mod collision;
pub mod particles;
pub mod pendulum;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod tower;

pub use block::{Attachment, Block, BlockColor, PlacedBlock, Rect};
pub use camera::Camera;
pub use collision::{LandingCheck, check_landing, fell_offscreen, overlap_fraction};
pub use particles::Particle;
pub use pendulum::Pendulum;
pub use snapshot::{CurrentBlock, Snapshot};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use tower::{Foundation, Tower};
