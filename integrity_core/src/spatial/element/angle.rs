// integrity_core/src/spatial/element/angle.rs

use std::f32::consts::PI;
use std::f64::consts::{PI as PI_F64, TAU as TAU_F64};

/// Wraps an angle into the canonical range `(-PI, PI]`.
///
/// Follows `((angle + PI) mod 2PI) - PI`, with the wrap done in double precision
/// so large inputs keep their fractional turn. Values already in range are
/// returned untouched, which makes the function idempotent bit for bit.
pub fn normalize_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = ((f64::from(angle) + PI_F64).rem_euclid(TAU_F64) - PI_F64) as f32;
    // Rounding to single precision can land exactly on either boundary.
    if wrapped <= -PI || wrapped > PI {
        PI
    } else {
        wrapped
    }
}

/// The signed shortest rotation taking `from` to `to`, in `(-PI, PI]`.
pub fn angle_delta(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}
