// integrity_core/src/spatial/variants.rs

//! One payload struct per family of dead-reckoning algorithms.
//!
//! Each struct carries exactly the elements its algorithms need, so an absent
//! element is a type-level fact rather than a runtime `None`. Constructors that
//! take an algorithm tag reject tags from another family.

use super::algorithm::DeadReckoningAlgorithm;
use super::element::{
    AccelerationVector, AngularVelocityVector, Orientation, VelocityVector, WorldLocation,
};
use crate::error::{IntegrityError, IntegrityResult};

fn check_family(
    algorithm: DeadReckoningAlgorithm,
    allowed: &[DeadReckoningAlgorithm],
    family: &str,
) -> IntegrityResult<()> {
    if allowed.contains(&algorithm) {
        Ok(())
    } else {
        Err(IntegrityError::InvalidCombination {
            algorithm,
            reason: format!("the {} layout only serves {:?}", family, allowed),
        })
    }
}

// =========================================================================
// == Static ==
// =========================================================================

/// An entity that does not move: location and attitude only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpatialStatic {
    pub(crate) world_location: WorldLocation,
    pub(crate) frozen: bool,
    pub(crate) orientation: Orientation,
}

impl SpatialStatic {
    pub fn new(world_location: WorldLocation, frozen: bool, orientation: Orientation) -> Self {
        Self {
            world_location,
            frozen,
            orientation,
        }
    }

    pub fn algorithm(&self) -> DeadReckoningAlgorithm {
        DeadReckoningAlgorithm::Static
    }

    pub fn world_location(&self) -> &WorldLocation {
        &self.world_location
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }
}

// =========================================================================
// == Fixed orientation, constant velocity (FPW / FPB) ==
// =========================================================================

/// Constant velocity with a fixed attitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpatialFp {
    pub(crate) algorithm: DeadReckoningAlgorithm,
    pub(crate) world_location: WorldLocation,
    pub(crate) frozen: bool,
    pub(crate) orientation: Orientation,
    pub(crate) velocity: VelocityVector,
}

impl SpatialFp {
    pub const ALGORITHMS: [DeadReckoningAlgorithm; 2] =
        [DeadReckoningAlgorithm::Fpw, DeadReckoningAlgorithm::Fpb];

    pub fn new(
        algorithm: DeadReckoningAlgorithm,
        world_location: WorldLocation,
        frozen: bool,
        orientation: Orientation,
        velocity: VelocityVector,
    ) -> IntegrityResult<Self> {
        check_family(algorithm, &Self::ALGORITHMS, "SpatialFp")?;
        Ok(Self {
            algorithm,
            world_location,
            frozen,
            orientation,
            velocity,
        })
    }

    pub fn algorithm(&self) -> DeadReckoningAlgorithm {
        self.algorithm
    }

    pub fn world_location(&self) -> &WorldLocation {
        &self.world_location
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn velocity(&self) -> &VelocityVector {
        &self.velocity
    }
}

// =========================================================================
// == Rotating, constant velocity (RPW / RPB) ==
// =========================================================================

/// Constant velocity with a constant rate of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpatialRp {
    pub(crate) algorithm: DeadReckoningAlgorithm,
    pub(crate) world_location: WorldLocation,
    pub(crate) frozen: bool,
    pub(crate) orientation: Orientation,
    pub(crate) velocity: VelocityVector,
    pub(crate) angular_velocity: AngularVelocityVector,
}

impl SpatialRp {
    pub const ALGORITHMS: [DeadReckoningAlgorithm; 2] =
        [DeadReckoningAlgorithm::Rpw, DeadReckoningAlgorithm::Rpb];

    pub fn new(
        algorithm: DeadReckoningAlgorithm,
        world_location: WorldLocation,
        frozen: bool,
        orientation: Orientation,
        velocity: VelocityVector,
        angular_velocity: AngularVelocityVector,
    ) -> IntegrityResult<Self> {
        check_family(algorithm, &Self::ALGORITHMS, "SpatialRp")?;
        Ok(Self {
            algorithm,
            world_location,
            frozen,
            orientation,
            velocity,
            angular_velocity,
        })
    }

    pub fn algorithm(&self) -> DeadReckoningAlgorithm {
        self.algorithm
    }

    pub fn world_location(&self) -> &WorldLocation {
        &self.world_location
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn velocity(&self) -> &VelocityVector {
        &self.velocity
    }

    pub fn angular_velocity(&self) -> &AngularVelocityVector {
        &self.angular_velocity
    }
}

// =========================================================================
// == Rotating, accelerating (RVW / RVB) ==
// =========================================================================

/// High speed or manoeuvring entities, with rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpatialRv {
    pub(crate) algorithm: DeadReckoningAlgorithm,
    pub(crate) world_location: WorldLocation,
    pub(crate) frozen: bool,
    pub(crate) orientation: Orientation,
    pub(crate) velocity: VelocityVector,
    pub(crate) acceleration: AccelerationVector,
    pub(crate) angular_velocity: AngularVelocityVector,
}

impl SpatialRv {
    pub const ALGORITHMS: [DeadReckoningAlgorithm; 2] =
        [DeadReckoningAlgorithm::Rvw, DeadReckoningAlgorithm::Rvb];

    pub fn new(
        algorithm: DeadReckoningAlgorithm,
        world_location: WorldLocation,
        frozen: bool,
        orientation: Orientation,
        velocity: VelocityVector,
        acceleration: AccelerationVector,
        angular_velocity: AngularVelocityVector,
    ) -> IntegrityResult<Self> {
        check_family(algorithm, &Self::ALGORITHMS, "SpatialRv")?;
        Ok(Self {
            algorithm,
            world_location,
            frozen,
            orientation,
            velocity,
            acceleration,
            angular_velocity,
        })
    }

    pub fn algorithm(&self) -> DeadReckoningAlgorithm {
        self.algorithm
    }

    pub fn world_location(&self) -> &WorldLocation {
        &self.world_location
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn velocity(&self) -> &VelocityVector {
        &self.velocity
    }

    pub fn acceleration(&self) -> &AccelerationVector {
        &self.acceleration
    }

    pub fn angular_velocity(&self) -> &AngularVelocityVector {
        &self.angular_velocity
    }
}

// =========================================================================
// == Fixed orientation, accelerating (FVW / FVB) ==
// =========================================================================

/// High speed or manoeuvring entities whose attitude is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpatialFv {
    pub(crate) algorithm: DeadReckoningAlgorithm,
    pub(crate) world_location: WorldLocation,
    pub(crate) frozen: bool,
    pub(crate) orientation: Orientation,
    pub(crate) velocity: VelocityVector,
    pub(crate) acceleration: AccelerationVector,
}

impl SpatialFv {
    pub const ALGORITHMS: [DeadReckoningAlgorithm; 2] =
        [DeadReckoningAlgorithm::Fvw, DeadReckoningAlgorithm::Fvb];

    pub fn new(
        algorithm: DeadReckoningAlgorithm,
        world_location: WorldLocation,
        frozen: bool,
        orientation: Orientation,
        velocity: VelocityVector,
        acceleration: AccelerationVector,
    ) -> IntegrityResult<Self> {
        check_family(algorithm, &Self::ALGORITHMS, "SpatialFv")?;
        Ok(Self {
            algorithm,
            world_location,
            frozen,
            orientation,
            velocity,
            acceleration,
        })
    }

    pub fn algorithm(&self) -> DeadReckoningAlgorithm {
        self.algorithm
    }

    pub fn world_location(&self) -> &WorldLocation {
        &self.world_location
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn velocity(&self) -> &VelocityVector {
        &self.velocity
    }

    pub fn acceleration(&self) -> &AccelerationVector {
        &self.acceleration
    }
}
