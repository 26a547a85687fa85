// integrity_core/src/verdict.rs

//! Conformance verdicts: a predicted snapshot checked against the next
//! reported one, field by field.

use crate::error::{IntegrityError, IntegrityResult};
use crate::spatial::{DeadReckoningAlgorithm, SpatialRepresentation};
use crate::tolerance::Tolerances;
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Every scalar a spatial representation can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SpatialField {
    // --- World Location ---
    #[serde(rename = "world_location.x")]
    LocationX,
    #[serde(rename = "world_location.y")]
    LocationY,
    #[serde(rename = "world_location.z")]
    LocationZ,
    // --- Orientation ---
    #[serde(rename = "orientation.psi")]
    Psi,
    #[serde(rename = "orientation.theta")]
    Theta,
    #[serde(rename = "orientation.phi")]
    Phi,
    // --- Velocity ---
    #[serde(rename = "velocity.x")]
    VelocityX,
    #[serde(rename = "velocity.y")]
    VelocityY,
    #[serde(rename = "velocity.z")]
    VelocityZ,
    // --- Acceleration ---
    #[serde(rename = "acceleration.x")]
    AccelerationX,
    #[serde(rename = "acceleration.y")]
    AccelerationY,
    #[serde(rename = "acceleration.z")]
    AccelerationZ,
    // --- Angular Velocity ---
    #[serde(rename = "angular_velocity.x")]
    AngularVelocityX,
    #[serde(rename = "angular_velocity.y")]
    AngularVelocityY,
    #[serde(rename = "angular_velocity.z")]
    AngularVelocityZ,
}

impl SpatialField {
    pub fn name(self) -> &'static str {
        match self {
            Self::LocationX => "world_location.x",
            Self::LocationY => "world_location.y",
            Self::LocationZ => "world_location.z",
            Self::Psi => "orientation.psi",
            Self::Theta => "orientation.theta",
            Self::Phi => "orientation.phi",
            Self::VelocityX => "velocity.x",
            Self::VelocityY => "velocity.y",
            Self::VelocityZ => "velocity.z",
            Self::AccelerationX => "acceleration.x",
            Self::AccelerationY => "acceleration.y",
            Self::AccelerationZ => "acceleration.z",
            Self::AngularVelocityX => "angular_velocity.x",
            Self::AngularVelocityY => "angular_velocity.y",
            Self::AngularVelocityZ => "angular_velocity.z",
        }
    }

    /// The configured threshold that applies to this field.
    pub fn tolerance(self, tolerances: &Tolerances) -> f64 {
        match self {
            Self::LocationX | Self::LocationY | Self::LocationZ => tolerances.location,
            Self::Psi | Self::Theta | Self::Phi => f64::from(tolerances.orientation),
            Self::VelocityX | Self::VelocityY | Self::VelocityZ => f64::from(tolerances.velocity),
            Self::AccelerationX | Self::AccelerationY | Self::AccelerationZ => {
                f64::from(tolerances.acceleration)
            }
            Self::AngularVelocityX | Self::AngularVelocityY | Self::AngularVelocityZ => {
                f64::from(tolerances.angular_velocity)
            }
        }
    }
}

impl fmt::Display for SpatialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of one prediction-versus-report comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub algorithm: DeadReckoningAlgorithm,
    /// True iff the frozen flags agree and every delta is within tolerance.
    pub matched: bool,
    pub frozen_consistent: bool,
    /// Signed `reported - predicted` for every field the variant carries.
    /// Angles are measured the short way round.
    pub field_deltas: BTreeMap<SpatialField, f64>,
    /// Fields whose delta exceeded their tolerance, in field order.
    pub failing_fields: Vec<SpatialField>,
}

impl Verdict {
    pub fn delta(&self, field: SpatialField) -> Option<f64> {
        self.field_deltas.get(&field).copied()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.algorithm,
            if self.matched { "MATCHED" } else { "MISMATCHED" }
        )?;
        if !self.frozen_consistent {
            write!(f, " | frozen flag differs")?;
        }
        for field in &self.failing_fields {
            match self.field_deltas.get(field) {
                Some(delta) => write!(f, " | {} off by {:.6}", field, delta)?,
                None => write!(f, " | {} failed", field)?,
            }
        }
        Ok(())
    }
}

/// Collects signed deltas for the fields of one snapshot pair.
fn field_deltas(
    predicted: &SpatialRepresentation,
    reported: &SpatialRepresentation,
) -> BTreeMap<SpatialField, f64> {
    use SpatialField::*;

    let mut deltas = BTreeMap::new();
    let (p, r) = (predicted.world_location(), reported.world_location());
    deltas.insert(LocationX, r.x() - p.x());
    deltas.insert(LocationY, r.y() - p.y());
    deltas.insert(LocationZ, r.z() - p.z());

    let [psi, theta, phi] = predicted.orientation().deltas_to(reported.orientation());
    deltas.insert(Psi, f64::from(psi));
    deltas.insert(Theta, f64::from(theta));
    deltas.insert(Phi, f64::from(phi));

    let mut insert_triplet = |fields: [SpatialField; 3], values: [f32; 3]| {
        for (field, value) in fields.into_iter().zip(values) {
            deltas.insert(field, f64::from(value));
        }
    };
    if let (Some(p), Some(r)) = (predicted.velocity(), reported.velocity()) {
        insert_triplet([VelocityX, VelocityY, VelocityZ], p.deltas_to(r));
    }
    if let (Some(p), Some(r)) = (predicted.acceleration(), reported.acceleration()) {
        insert_triplet(
            [AccelerationX, AccelerationY, AccelerationZ],
            p.deltas_to(r),
        );
    }
    if let (Some(p), Some(r)) = (predicted.angular_velocity(), reported.angular_velocity()) {
        insert_triplet(
            [AngularVelocityX, AngularVelocityY, AngularVelocityZ],
            p.deltas_to(r),
        );
    }
    deltas
}

/// Checks a predicted snapshot against the one the entity later reported.
///
/// Every field is measured, not only the first that fails. Stateless; pairs
/// may be compared concurrently.
///
/// # Errors
/// `InvalidComparison` if the two snapshots carry different algorithm tags.
pub fn compare(
    predicted: &SpatialRepresentation,
    reported: &SpatialRepresentation,
    tolerances: &Tolerances,
) -> IntegrityResult<Verdict> {
    if predicted.algorithm() != reported.algorithm() {
        return Err(IntegrityError::InvalidComparison {
            predicted: predicted.algorithm(),
            reported: reported.algorithm(),
        });
    }

    let field_deltas = field_deltas(predicted, reported);
    let failing_fields: Vec<SpatialField> = field_deltas
        .iter()
        // A NaN delta is never within tolerance.
        .filter(|(field, delta)| !(delta.abs() <= field.tolerance(tolerances)))
        .map(|(field, _)| *field)
        .collect();
    let frozen_consistent = predicted.is_frozen() == reported.is_frozen();

    let verdict = Verdict {
        algorithm: predicted.algorithm(),
        matched: frozen_consistent && failing_fields.is_empty(),
        frozen_consistent,
        field_deltas,
        failing_fields,
    };

    if verdict.matched {
        debug!("{}", verdict);
    } else {
        warn!("{}", verdict);
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{
        AccelerationVector, AngularVelocityVector, Orientation, SpatialParts, VelocityVector,
        WorldLocation,
    };
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    fn fpw_at(x: f64, frozen: bool) -> SpatialRepresentation {
        SpatialRepresentation::from_parts(
            DeadReckoningAlgorithm::Fpw,
            SpatialParts {
                world_location: WorldLocation::new(x, 0.0, 0.0),
                frozen,
                orientation: Some(Orientation::default()),
                velocity: Some(VelocityVector::new(1.0, 0.0, 0.0)),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_small_location_delta_matches() {
        let tolerances = Tolerances {
            location: 0.001,
            ..Default::default()
        };
        let verdict = compare(&fpw_at(10.0, false), &fpw_at(10.000_05, false), &tolerances).unwrap();
        assert!(verdict.matched);
        assert!(verdict.failing_fields.is_empty());
        assert_abs_diff_eq!(
            verdict.delta(SpatialField::LocationX).unwrap(),
            0.000_05,
            epsilon = 1e-9
        );
        // FPW carries location, orientation and velocity: nine fields.
        assert_eq!(verdict.field_deltas.len(), 9);
        assert!(verdict.delta(SpatialField::AccelerationX).is_none());
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let predicted = SpatialRepresentation::from_parts(
            DeadReckoningAlgorithm::Rvw,
            SpatialParts {
                world_location: WorldLocation::new(0.0, 0.0, 0.0),
                orientation: Some(Orientation::new(0.0, 0.0, 0.0)),
                velocity: Some(VelocityVector::new(1.0, 0.0, 0.0)),
                acceleration: Some(AccelerationVector::new(0.0, 0.0, 0.0)),
                angular_velocity: Some(AngularVelocityVector::new(0.0, 0.0, 0.0)),
                ..Default::default()
            },
        )
        .unwrap();
        let reported = SpatialRepresentation::from_parts(
            DeadReckoningAlgorithm::Rvw,
            SpatialParts {
                world_location: WorldLocation::new(0.0, -2.0, 0.0),
                orientation: Some(Orientation::new(0.0, 0.0, 0.01)),
                angular_velocity: Some(AngularVelocityVector::new(0.0, 0.0, 0.5)),
                ..predicted.parts()
            },
        )
        .unwrap();

        let verdict = compare(&predicted, &reported, &Tolerances::default()).unwrap();
        assert!(!verdict.matched);
        assert_eq!(
            verdict.failing_fields,
            vec![
                SpatialField::LocationY,
                SpatialField::Phi,
                SpatialField::AngularVelocityZ
            ]
        );
        assert_eq!(verdict.delta(SpatialField::LocationY), Some(-2.0));
        assert_eq!(verdict.field_deltas.len(), 15);
    }

    #[test]
    fn test_orientation_delta_is_measured_across_the_seam() {
        let near_pi = |psi: f32| {
            SpatialRepresentation::from_parts(
                DeadReckoningAlgorithm::Static,
                SpatialParts {
                    orientation: Some(Orientation::new(psi, 0.0, 0.0)),
                    ..Default::default()
                },
            )
            .unwrap()
        };
        let verdict = compare(
            &near_pi(PI - 0.00002),
            &near_pi(-PI + 0.00002),
            &Tolerances::default(),
        )
        .unwrap();
        assert!(verdict.matched);
        assert_abs_diff_eq!(verdict.delta(SpatialField::Psi).unwrap(), 4e-5, epsilon = 1e-5);
    }

    #[test]
    fn test_frozen_flag_mismatch_fails_the_verdict() {
        let verdict = compare(&fpw_at(1.0, false), &fpw_at(1.0, true), &Tolerances::default())
            .unwrap();
        assert!(!verdict.frozen_consistent);
        assert!(!verdict.matched);
        assert!(verdict.failing_fields.is_empty());
    }

    #[test]
    fn test_tag_mismatch_is_an_error_not_a_mismatch() {
        let fpb = SpatialRepresentation::from_parts(
            DeadReckoningAlgorithm::Fpb,
            fpw_at(0.0, false).parts(),
        )
        .unwrap();
        let err = compare(&fpw_at(0.0, false), &fpb, &Tolerances::default()).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::InvalidComparison {
                predicted: DeadReckoningAlgorithm::Fpw,
                reported: DeadReckoningAlgorithm::Fpb,
            }
        );
    }

    #[test]
    fn test_nan_delta_never_matches() {
        let verdict = compare(
            &fpw_at(0.0, false),
            &fpw_at(f64::NAN, false),
            &Tolerances::default(),
        )
        .unwrap();
        assert!(!verdict.matched);
        assert_eq!(verdict.failing_fields, vec![SpatialField::LocationX]);
    }

    #[test]
    fn test_display_names_failing_fields() {
        let verdict = compare(&fpw_at(0.0, false), &fpw_at(5.0, false), &Tolerances::default())
            .unwrap();
        let text = verdict.to_string();
        assert!(text.starts_with("DRM_FPW MISMATCHED"));
        assert!(text.contains("world_location.x off by 5.000000"));
    }

    #[test]
    fn test_display_tolerates_a_failing_field_without_a_delta() {
        let mut verdict =
            compare(&fpw_at(0.0, false), &fpw_at(5.0, false), &Tolerances::default()).unwrap();
        verdict.failing_fields.push(SpatialField::VelocityZ);
        verdict.field_deltas.remove(&SpatialField::VelocityZ);
        let text = verdict.to_string();
        assert!(text.contains("world_location.x off by 5.000000"));
        assert!(text.ends_with("velocity.z failed"));
    }
}
