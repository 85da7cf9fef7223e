//! Load-time configuration errors
//!
//! The per-tick simulation never fails; everything that can be wrong is
//! caught here before a world exists.

use thiserror::Error;

/// Errors raised while validating tuning or loading a level.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Level length is zero, negative, or not a number.
    #[error("level length must be positive and finite, got {0}")]
    InvalidLevelLength(f32),
    /// Maximum gap is smaller than the generator's minimum gap.
    #[error("max gap {max_gap} is below the minimum gap {min_gap}")]
    MaxGapTooSmall { max_gap: f32, min_gap: f32 },
    /// A tuning value is out of its usable range.
    #[error("invalid value for {field}: {value}")]
    InvalidTuning { field: &'static str, value: f64 },
    /// Raised platforms would reach down into the ground lane.
    #[error("platform bottom {platform_bottom} intrudes into the ground lane (player top {lane_top})")]
    BlockedGroundLane { platform_bottom: f32, lane_top: f32 },
    /// Config JSON could not be parsed.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
