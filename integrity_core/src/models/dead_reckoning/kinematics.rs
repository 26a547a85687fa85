// integrity_core/src/models/dead_reckoning/kinematics.rs

//! Closed-form displacement terms of the standard dead-reckoning models.

use crate::spatial::{AccelerationVector, AngularVelocityVector, Orientation, VelocityVector};
use crate::types::Seconds;
use nalgebra::{Matrix3, Vector3};

/// Below this turn angle (rad) over the interval the closed forms lose their
/// precision to cancellation, so the series expansions are used instead.
const SMALL_TURN_ANGLE: f64 = 1e-3;

/// `v*t + 0.5*a*t^2`, all in one frame.
pub fn linear_displacement(
    velocity: &VelocityVector,
    acceleration: Option<&AccelerationVector>,
    dt: Seconds,
) -> Vector3<f64> {
    let mut displacement = velocity.as_vector() * dt;
    if let Some(a) = acceleration {
        displacement += a.as_vector() * (0.5 * dt * dt);
    }
    displacement
}

/// `v + a*t`, the velocity at the end of the interval.
pub fn advanced_velocity(
    velocity: &VelocityVector,
    acceleration: &AccelerationVector,
    dt: Seconds,
) -> VelocityVector {
    VelocityVector::from_vector(&(velocity.as_vector() + acceleration.as_vector() * dt))
}

/// The `R1` and `R2` integrals for an entity turning at constant body rate `w`.
///
/// `R1 * v` and `R2 * a` give the body-frame displacement over `dt` when the
/// body-frame velocity `v` and acceleration `a` rotate with the entity.
fn rotating_integrals(w: &Vector3<f64>, dt: Seconds) -> (Matrix3<f64>, Matrix3<f64>) {
    if w.norm() * dt < SMALL_TURN_ANGLE {
        rotating_integrals_series(w, dt)
    } else {
        rotating_integrals_closed(w, dt)
    }
}

fn rotating_integrals_closed(w: &Vector3<f64>, dt: Seconds) -> (Matrix3<f64>, Matrix3<f64>) {
    let rate = w.norm();
    let wt = rate * dt;
    let (sin_wt, cos_wt) = wt.sin_cos();
    let outer = w * w.transpose();
    let skew = w.cross_matrix();
    let identity = Matrix3::identity();

    let r1 = outer * ((wt - sin_wt) / rate.powi(3))
        + identity * (sin_wt / rate)
        + skew * ((1.0 - cos_wt) / rate.powi(2));

    let r2 = outer * ((0.5 * wt * wt - cos_wt - wt * sin_wt + 1.0) / rate.powi(4))
        + identity * ((cos_wt + wt * sin_wt - 1.0) / rate.powi(2))
        + skew * ((sin_wt - wt * cos_wt) / rate.powi(3));

    (r1, r2)
}

/// Leading terms of the closed forms in powers of `|w|*dt`. Exact for `w = 0`.
fn rotating_integrals_series(w: &Vector3<f64>, dt: Seconds) -> (Matrix3<f64>, Matrix3<f64>) {
    let rate_sq = w.norm_squared();
    let dt2 = dt * dt;
    let dt3 = dt2 * dt;
    let dt4 = dt3 * dt;
    let outer = w * w.transpose();
    let skew = w.cross_matrix();
    let identity = Matrix3::identity();

    let r1 = identity * (dt - rate_sq * dt3 / 6.0) + skew * (0.5 * dt2) + outer * (dt3 / 6.0);
    let r2 = identity * (0.5 * dt2 - rate_sq * dt4 / 8.0) + skew * (dt3 / 3.0) + outer * (dt4 / 8.0);

    (r1, r2)
}

/// World-frame displacement of a body-axis entity.
///
/// The body-frame motion is integrated (rotating with `angular_velocity` when
/// given) and then carried into the world frame by the starting attitude.
pub fn body_displacement(
    orientation: &Orientation,
    velocity: &VelocityVector,
    acceleration: Option<&AccelerationVector>,
    angular_velocity: Option<&AngularVelocityVector>,
    dt: Seconds,
) -> Vector3<f64> {
    let body = match angular_velocity {
        Some(w) => {
            let (r1, r2) = rotating_integrals(&w.as_vector(), dt);
            let mut body = r1 * velocity.as_vector();
            if let Some(a) = acceleration {
                body += r2 * a.as_vector();
            }
            body
        }
        None => linear_displacement(velocity, acceleration, dt),
    };
    orientation.body_to_world() * body
}
