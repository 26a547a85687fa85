// integrity_core/src/tolerance.rs

//! Per-quantity thresholds used by every tolerance comparison.

use serde::{Deserialize, Serialize};

/// Absolute thresholds, one per spatial quantity.
///
/// Any field left out of a configuration table falls back to its default, so
/// `[tolerances]` with only `location = 0.01` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// World location, metres.
    pub location: f64,
    /// Orientation angles, radians.
    pub orientation: f32,
    /// Linear velocity, metres per second.
    pub velocity: f32,
    /// Linear acceleration, metres per second squared.
    pub acceleration: f32,
    /// Angular velocity, radians per second.
    pub angular_velocity: f32,
}

impl Tolerances {
    pub const DEFAULT_LOCATION: f64 = 1e-3;
    /// 10^-4 rad, roughly 0.0057 degrees.
    pub const DEFAULT_ORIENTATION: f32 = 1e-4;
    pub const DEFAULT_VELOCITY: f32 = 1e-3;
    pub const DEFAULT_ACCELERATION: f32 = 1e-3;
    pub const DEFAULT_ANGULAR_VELOCITY: f32 = 1e-4;
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            location: Self::DEFAULT_LOCATION,
            orientation: Self::DEFAULT_ORIENTATION,
            velocity: Self::DEFAULT_VELOCITY,
            acceleration: Self::DEFAULT_ACCELERATION,
            angular_velocity: Self::DEFAULT_ANGULAR_VELOCITY,
        }
    }
}
