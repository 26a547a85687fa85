// integrity_core/src/models/dead_reckoning/mod.rs

use crate::error::{IntegrityError, IntegrityResult};
use crate::spatial::{
    SpatialFp, SpatialFv, SpatialRepresentation, SpatialRp, SpatialRv, SpatialStatic,
};
use crate::types::Seconds;
use log::debug;

pub mod kinematics;

use kinematics::{advanced_velocity, body_displacement, linear_displacement};

/// The kinematic model behind one family of dead-reckoning algorithms.
///
/// Implementations are pure: they read a snapshot and return a new one. They
/// do not look at the frozen flag or validate `dt`; [`predict`] does both.
pub trait DeadReckoning: Sized {
    /// The state this snapshot predicts `dt` seconds after it was issued.
    fn extrapolate(&self, dt: Seconds) -> Self;
}

impl DeadReckoning for SpatialStatic {
    fn extrapolate(&self, _dt: Seconds) -> Self {
        *self
    }
}

impl DeadReckoning for SpatialFp {
    fn extrapolate(&self, dt: Seconds) -> Self {
        let displacement = if self.algorithm.is_body_axis() {
            body_displacement(&self.orientation, &self.velocity, None, None, dt)
        } else {
            linear_displacement(&self.velocity, None, dt)
        };
        Self {
            world_location: self.world_location.translated(&displacement),
            ..*self
        }
    }
}

impl DeadReckoning for SpatialRp {
    fn extrapolate(&self, dt: Seconds) -> Self {
        let displacement = if self.algorithm.is_body_axis() {
            body_displacement(
                &self.orientation,
                &self.velocity,
                None,
                Some(&self.angular_velocity),
                dt,
            )
        } else {
            linear_displacement(&self.velocity, None, dt)
        };
        Self {
            world_location: self.world_location.translated(&displacement),
            orientation: self.orientation.advanced(&self.angular_velocity, dt),
            ..*self
        }
    }
}

impl DeadReckoning for SpatialRv {
    fn extrapolate(&self, dt: Seconds) -> Self {
        let displacement = if self.algorithm.is_body_axis() {
            body_displacement(
                &self.orientation,
                &self.velocity,
                Some(&self.acceleration),
                Some(&self.angular_velocity),
                dt,
            )
        } else {
            linear_displacement(&self.velocity, Some(&self.acceleration), dt)
        };
        Self {
            world_location: self.world_location.translated(&displacement),
            orientation: self.orientation.advanced(&self.angular_velocity, dt),
            velocity: advanced_velocity(&self.velocity, &self.acceleration, dt),
            ..*self
        }
    }
}

impl DeadReckoning for SpatialFv {
    fn extrapolate(&self, dt: Seconds) -> Self {
        let displacement = if self.algorithm.is_body_axis() {
            body_displacement(
                &self.orientation,
                &self.velocity,
                Some(&self.acceleration),
                None,
                dt,
            )
        } else {
            linear_displacement(&self.velocity, Some(&self.acceleration), dt)
        };
        Self {
            world_location: self.world_location.translated(&displacement),
            velocity: advanced_velocity(&self.velocity, &self.acceleration, dt),
            ..*self
        }
    }
}

impl DeadReckoning for SpatialRepresentation {
    fn extrapolate(&self, dt: Seconds) -> Self {
        match self {
            Self::Static(s) => Self::Static(s.extrapolate(dt)),
            Self::Fp(s) => Self::Fp(s.extrapolate(dt)),
            Self::Rp(s) => Self::Rp(s.extrapolate(dt)),
            Self::Rv(s) => Self::Rv(s.extrapolate(dt)),
            Self::Fv(s) => Self::Fv(s.extrapolate(dt)),
        }
    }
}

/// Predicts where `representation` places its entity `elapsed` seconds later.
///
/// A frozen snapshot is returned unchanged whatever the elapsed time. The
/// result is always the same variant as the input.
///
/// # Errors
/// `InvalidInput` if `elapsed` is negative or not finite; extrapolation only
/// runs forward in time.
pub fn predict(
    representation: &SpatialRepresentation,
    elapsed: Seconds,
) -> IntegrityResult<SpatialRepresentation> {
    if !elapsed.is_finite() || elapsed < 0.0 {
        return Err(IntegrityError::InvalidInput(format!(
            "elapsed time must be a finite, non-negative number of seconds, got {}",
            elapsed
        )));
    }

    if representation.is_frozen() {
        debug!(
            "{} is frozen; holding its state for {}s",
            representation.algorithm(),
            elapsed
        );
        return Ok(*representation);
    }

    let predicted = representation.extrapolate(elapsed);
    debug!(
        "{} extrapolated {}s: {} -> {}",
        representation.algorithm(),
        elapsed,
        representation.world_location(),
        predicted.world_location()
    );
    Ok(predicted)
}
