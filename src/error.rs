//! Setup errors
//!
//! Gameplay outcomes (missed landing, block lost off-screen) are game states,
//! see [`crate::sim::GameOverCause`]. Only configuration can fail.

use core::fmt;

/// A configuration value that cannot produce a playable session
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length, size or rate that must be strictly positive
    NotPositive { field: &'static str, value: f32 },
    /// A value outside its allowed range
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// Target block count of zero
    ZeroTarget,
    /// Foundation does not fit inside the viewport
    FoundationTooWide { foundation: f32, viewport: f32 },
    /// The hanging block would reach down to the tower top. `reach` is the
    /// distance from the top of the view to the hanging block's lowest point,
    /// `limit` the screen height the tower top can climb to.
    HookBelowTower { reach: f32, limit: f32 },
    /// Config text could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} must be in [{}, {}] (got {})", field, min, max, value),
            ConfigError::ZeroTarget => write!(f, "target_blocks must be at least 1"),
            ConfigError::FoundationTooWide {
                foundation,
                viewport,
            } => write!(
                f,
                "foundation width {} exceeds viewport width {}",
                foundation, viewport
            ),
            ConfigError::HookBelowTower { reach, limit } => write!(
                f,
                "hanging block reaches {} but the tower top can rise to {}",
                reach, limit
            ),
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
