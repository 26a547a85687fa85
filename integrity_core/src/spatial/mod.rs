// integrity_core/src/spatial/mod.rs

//! The spatial state of an entity: the element library, the algorithm tags,
//! and the closed family of representations that combine them.

pub mod algorithm;
pub mod element;
pub mod variants;

pub use algorithm::DeadReckoningAlgorithm;
pub use element::{
    AccelerationVector, AngularVelocityVector, Orientation, VelocityVector, WorldLocation,
};
pub use variants::{SpatialFp, SpatialFv, SpatialRp, SpatialRv, SpatialStatic};

use crate::error::{IntegrityError, IntegrityResult};
use crate::tolerance::Tolerances;
use approx::AbsDiffEq;
use std::fmt;

/// Loosely-typed elements as they come off a decoded record, before the
/// algorithm tag has been checked against them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialParts {
    pub world_location: WorldLocation,
    pub frozen: bool,
    pub orientation: Option<Orientation>,
    pub velocity: Option<VelocityVector>,
    pub acceleration: Option<AccelerationVector>,
    pub angular_velocity: Option<AngularVelocityVector>,
}

/// An immutable snapshot of an entity's spatial state, one variant per
/// family of dead-reckoning algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialRepresentation {
    Static(SpatialStatic),
    Fp(SpatialFp),
    Rp(SpatialRp),
    Rv(SpatialRv),
    Fv(SpatialFv),
}

fn no_layout(algorithm: DeadReckoningAlgorithm) -> IntegrityError {
    IntegrityError::InvalidCombination {
        algorithm,
        reason: "no spatial layout is defined for this algorithm".to_string(),
    }
}

/// Takes an element the algorithm mandates, or explains why it cannot.
fn required<T>(
    algorithm: DeadReckoningAlgorithm,
    element: Option<T>,
    name: &str,
) -> IntegrityResult<T> {
    element.ok_or_else(|| IntegrityError::InvalidCombination {
        algorithm,
        reason: format!("missing {}", name),
    })
}

/// Rejects an element the algorithm does not carry.
fn forbidden<T>(
    algorithm: DeadReckoningAlgorithm,
    element: &Option<T>,
    name: &str,
) -> IntegrityResult<()> {
    match element {
        Some(_) => Err(IntegrityError::InvalidCombination {
            algorithm,
            reason: format!("unexpected {}", name),
        }),
        None => Ok(()),
    }
}

impl SpatialRepresentation {
    /// Assembles the variant for `algorithm`, failing if the supplied elements
    /// are not exactly the ones that algorithm mandates.
    pub fn from_parts(
        algorithm: DeadReckoningAlgorithm,
        parts: SpatialParts,
    ) -> IntegrityResult<Self> {
        use DeadReckoningAlgorithm as Dr;

        if algorithm == Dr::Other {
            return Err(no_layout(algorithm));
        }

        let orientation = required(algorithm, parts.orientation, "orientation")?;

        if !algorithm.carries_velocity() {
            forbidden(algorithm, &parts.velocity, "velocity")?;
        }
        if !algorithm.carries_acceleration() {
            forbidden(algorithm, &parts.acceleration, "acceleration")?;
        }
        if !algorithm.carries_rotation() {
            forbidden(algorithm, &parts.angular_velocity, "angular velocity")?;
        }

        let location = parts.world_location;
        let frozen = parts.frozen;
        let representation = match algorithm {
            Dr::Static => Self::Static(SpatialStatic::new(location, frozen, orientation)),
            Dr::Fpw | Dr::Fpb => Self::Fp(SpatialFp::new(
                algorithm,
                location,
                frozen,
                orientation,
                required(algorithm, parts.velocity, "velocity")?,
            )?),
            Dr::Rpw | Dr::Rpb => Self::Rp(SpatialRp::new(
                algorithm,
                location,
                frozen,
                orientation,
                required(algorithm, parts.velocity, "velocity")?,
                required(algorithm, parts.angular_velocity, "angular velocity")?,
            )?),
            Dr::Rvw | Dr::Rvb => Self::Rv(SpatialRv::new(
                algorithm,
                location,
                frozen,
                orientation,
                required(algorithm, parts.velocity, "velocity")?,
                required(algorithm, parts.acceleration, "acceleration")?,
                required(algorithm, parts.angular_velocity, "angular velocity")?,
            )?),
            Dr::Fvw | Dr::Fvb => Self::Fv(SpatialFv::new(
                algorithm,
                location,
                frozen,
                orientation,
                required(algorithm, parts.velocity, "velocity")?,
                required(algorithm, parts.acceleration, "acceleration")?,
            )?),
            Dr::Other => return Err(no_layout(algorithm)),
        };
        Ok(representation)
    }

    pub fn algorithm(&self) -> DeadReckoningAlgorithm {
        match self {
            Self::Static(s) => s.algorithm(),
            Self::Fp(s) => s.algorithm(),
            Self::Rp(s) => s.algorithm(),
            Self::Rv(s) => s.algorithm(),
            Self::Fv(s) => s.algorithm(),
        }
    }

    pub fn world_location(&self) -> &WorldLocation {
        match self {
            Self::Static(s) => s.world_location(),
            Self::Fp(s) => s.world_location(),
            Self::Rp(s) => s.world_location(),
            Self::Rv(s) => s.world_location(),
            Self::Fv(s) => s.world_location(),
        }
    }

    pub fn is_frozen(&self) -> bool {
        match self {
            Self::Static(s) => s.is_frozen(),
            Self::Fp(s) => s.is_frozen(),
            Self::Rp(s) => s.is_frozen(),
            Self::Rv(s) => s.is_frozen(),
            Self::Fv(s) => s.is_frozen(),
        }
    }

    pub fn orientation(&self) -> &Orientation {
        match self {
            Self::Static(s) => s.orientation(),
            Self::Fp(s) => s.orientation(),
            Self::Rp(s) => s.orientation(),
            Self::Rv(s) => s.orientation(),
            Self::Fv(s) => s.orientation(),
        }
    }

    pub fn velocity(&self) -> Option<&VelocityVector> {
        match self {
            Self::Static(_) => None,
            Self::Fp(s) => Some(s.velocity()),
            Self::Rp(s) => Some(s.velocity()),
            Self::Rv(s) => Some(s.velocity()),
            Self::Fv(s) => Some(s.velocity()),
        }
    }

    pub fn acceleration(&self) -> Option<&AccelerationVector> {
        match self {
            Self::Rv(s) => Some(s.acceleration()),
            Self::Fv(s) => Some(s.acceleration()),
            Self::Static(_) | Self::Fp(_) | Self::Rp(_) => None,
        }
    }

    pub fn angular_velocity(&self) -> Option<&AngularVelocityVector> {
        match self {
            Self::Rp(s) => Some(s.angular_velocity()),
            Self::Rv(s) => Some(s.angular_velocity()),
            Self::Static(_) | Self::Fp(_) | Self::Fv(_) => None,
        }
    }

    /// The loose element view of this snapshot.
    pub fn parts(&self) -> SpatialParts {
        SpatialParts {
            world_location: *self.world_location(),
            frozen: self.is_frozen(),
            orientation: Some(*self.orientation()),
            velocity: self.velocity().copied(),
            acceleration: self.acceleration().copied(),
            angular_velocity: self.angular_velocity().copied(),
        }
    }
}

impl From<SpatialStatic> for SpatialRepresentation {
    fn from(s: SpatialStatic) -> Self {
        Self::Static(s)
    }
}

impl From<SpatialFp> for SpatialRepresentation {
    fn from(s: SpatialFp) -> Self {
        Self::Fp(s)
    }
}

impl From<SpatialRp> for SpatialRepresentation {
    fn from(s: SpatialRp) -> Self {
        Self::Rp(s)
    }
}

impl From<SpatialRv> for SpatialRepresentation {
    fn from(s: SpatialRv) -> Self {
        Self::Rv(s)
    }
}

impl From<SpatialFv> for SpatialRepresentation {
    fn from(s: SpatialFv) -> Self {
        Self::Fv(s)
    }
}

/// Both absent, or both present and within `epsilon`.
fn optional_eq<T: AbsDiffEq>(a: Option<&T>, b: Option<&T>, epsilon: T::Epsilon) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.abs_diff_eq(b, epsilon),
        _ => false,
    }
}

/// Tolerance comparison of whole snapshots: the algorithm tag and frozen flag
/// must match exactly, every present element must agree within its tolerance.
///
/// `PartialEq`/`Hash` stay exact, so near-equal snapshots may hash apart.
impl AbsDiffEq for SpatialRepresentation {
    type Epsilon = Tolerances;

    fn default_epsilon() -> Tolerances {
        Tolerances::default()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Tolerances) -> bool {
        self.algorithm() == other.algorithm()
            && self.is_frozen() == other.is_frozen()
            && self
                .world_location()
                .abs_diff_eq(other.world_location(), epsilon.location)
            && self
                .orientation()
                .abs_diff_eq(other.orientation(), epsilon.orientation)
            && optional_eq(self.velocity(), other.velocity(), epsilon.velocity)
            && optional_eq(self.acceleration(), other.acceleration(), epsilon.acceleration)
            && optional_eq(
                self.angular_velocity(),
                other.angular_velocity(),
                epsilon.angular_velocity,
            )
    }
}

impl fmt::Display for SpatialRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spatial [deadReckoningAlgorithm={}, {}, frozen={}, {}",
            self.algorithm(),
            self.world_location(),
            self.is_frozen(),
            self.orientation()
        )?;
        if let Some(v) = self.velocity() {
            write!(f, ", {}", v)?;
        }
        if let Some(a) = self.acceleration() {
            write!(f, ", {}", a)?;
        }
        if let Some(w) = self.angular_velocity() {
            write!(f, ", {}", w)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

    fn moving_parts() -> SpatialParts {
        SpatialParts {
            world_location: WorldLocation::new(1.0, 2.0, 3.0),
            frozen: false,
            orientation: Some(Orientation::new(0.1, 0.2, 0.3)),
            velocity: Some(VelocityVector::new(1.0, 0.0, 0.0)),
            acceleration: Some(AccelerationVector::new(0.0, 1.0, 0.0)),
            angular_velocity: Some(AngularVelocityVector::new(0.0, 0.0, 0.1)),
        }
    }

    #[test]
    fn test_from_parts_builds_the_matching_variant() {
        let rv = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Rvb, moving_parts())
            .unwrap();
        assert!(matches!(rv, SpatialRepresentation::Rv(_)));
        assert_eq!(rv.algorithm(), DeadReckoningAlgorithm::Rvb);
        assert_eq!(rv.parts().acceleration, moving_parts().acceleration);

        let fp_parts = SpatialParts {
            acceleration: None,
            angular_velocity: None,
            ..moving_parts()
        };
        let fp = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Fpw, fp_parts).unwrap();
        assert!(matches!(fp, SpatialRepresentation::Fp(_)));
        assert!(fp.acceleration().is_none());
        assert!(fp.angular_velocity().is_none());
    }

    #[test]
    fn test_from_parts_rejects_missing_elements() {
        let parts = SpatialParts {
            angular_velocity: None,
            ..moving_parts()
        };
        let err = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Rvw, parts).unwrap_err();
        assert!(matches!(err, IntegrityError::InvalidCombination { .. }));

        let no_orientation = SpatialParts {
            orientation: None,
            ..Default::default()
        };
        assert!(SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Static, no_orientation)
            .is_err());
    }

    #[test]
    fn test_from_parts_rejects_extra_elements() {
        // A static entity must not carry velocity.
        let parts = SpatialParts {
            acceleration: None,
            angular_velocity: None,
            ..moving_parts()
        };
        let err =
            SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Static, parts).unwrap_err();
        assert!(matches!(
            err,
            IntegrityError::InvalidCombination { algorithm: DeadReckoningAlgorithm::Static, .. }
        ));

        // FVW has no rotation.
        let err = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Fvw, moving_parts())
            .unwrap_err();
        assert!(matches!(err, IntegrityError::InvalidCombination { .. }));
    }

    #[test]
    fn test_from_parts_rejects_other() {
        let err = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Other, moving_parts())
            .unwrap_err();
        assert!(matches!(err, IntegrityError::InvalidCombination { .. }));
    }

    #[test]
    fn test_variant_constructor_rejects_foreign_tag() {
        let err = SpatialFp::new(
            DeadReckoningAlgorithm::Rvw,
            WorldLocation::default(),
            false,
            Orientation::default(),
            VelocityVector::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IntegrityError::InvalidCombination { .. }));
    }

    #[test]
    fn test_tolerance_equality_of_snapshots() {
        let a = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Rvw, moving_parts())
            .unwrap();
        let nudged = SpatialParts {
            world_location: WorldLocation::new(1.0 + 1e-5, 2.0, 3.0),
            velocity: Some(VelocityVector::new(1.0 + 1e-4, 0.0, 0.0)),
            ..moving_parts()
        };
        let b = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Rvw, nudged).unwrap();
        assert_ne!(a, b);
        assert_abs_diff_eq!(a, b);

        let frozen = SpatialParts {
            frozen: true,
            ..moving_parts()
        };
        let c = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Rvw, frozen).unwrap();
        assert_abs_diff_ne!(a, c);

        let body = SpatialRepresentation::from_parts(DeadReckoningAlgorithm::Rvb, moving_parts())
            .unwrap();
        assert_abs_diff_ne!(a, body);
    }

    #[test]
    fn test_display_lists_present_elements_only() {
        let fixed = SpatialRepresentation::Static(SpatialStatic::new(
            WorldLocation::new(0.0, 0.0, 0.0),
            true,
            Orientation::default(),
        ));
        let text = fixed.to_string();
        assert!(text.contains("deadReckoningAlgorithm=Static"));
        assert!(text.contains("frozen=true"));
        assert!(!text.contains("VelocityVector"));
    }
}
