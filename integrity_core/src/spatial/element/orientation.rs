// integrity_core/src/spatial/element/orientation.rs

use super::angle::{angle_delta, normalize_angle};
use super::vectors::AngularVelocityVector;
use crate::error::IntegrityError;
use approx::AbsDiffEq;
use nalgebra::Rotation3;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The attitude of an entity as Tait-Bryan angles from the world frame to the
/// entity frame (IEEE 1278.1 section 1.3.2), radians.
///
/// Every angle is held in `(-PI, PI]`. The constructor and each `with_*`
/// replacement wrap their input, so no accessor can observe an unwrapped value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orientation {
    /// Rotation about the Z axis.
    psi: f32,
    /// Rotation about the Y axis.
    theta: f32,
    /// Rotation about the X axis.
    phi: f32,
}

impl Orientation {
    /// 10^-4 rad (about 0.0057 degrees).
    pub const DEFAULT_THRESHOLD: f32 = 1e-4;

    pub fn new(psi: f32, theta: f32, phi: f32) -> Self {
        Self {
            psi: normalize_angle(psi),
            theta: normalize_angle(theta),
            phi: normalize_angle(phi),
        }
    }

    pub fn psi(&self) -> f32 {
        self.psi
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    pub fn with_psi(self, psi: f32) -> Self {
        Self {
            psi: normalize_angle(psi),
            ..self
        }
    }

    pub fn with_theta(self, theta: f32) -> Self {
        Self {
            theta: normalize_angle(theta),
            ..self
        }
    }

    pub fn with_phi(self, phi: f32) -> Self {
        Self {
            phi: normalize_angle(phi),
            ..self
        }
    }

    /// Advances each angle by its rate over `dt` seconds (constant-rate, per axis).
    ///
    /// The rates map onto the angles as x -> phi, y -> theta, z -> psi.
    pub fn advanced(&self, rates: &AngularVelocityVector, dt: f64) -> Self {
        let step = |angle: f32, rate: f32| (f64::from(angle) + f64::from(rate) * dt) as f32;
        Self::new(
            step(self.psi, rates.z()),
            step(self.theta, rates.y()),
            step(self.phi, rates.x()),
        )
    }

    /// Signed per-axis differences `(psi, theta, phi)` taking `self` to `other`,
    /// each measured across the `+-PI` seam.
    pub fn deltas_to(&self, other: &Self) -> [f32; 3] {
        [
            angle_delta(self.psi, other.psi),
            angle_delta(self.theta, other.theta),
            angle_delta(self.phi, other.phi),
        ]
    }

    /// The rotation taking entity-frame vectors into the world frame.
    pub fn body_to_world(&self) -> Rotation3<f64> {
        // nalgebra applies roll, then pitch, then yaw: Rz(psi) * Ry(theta) * Rx(phi).
        Rotation3::from_euler_angles(
            f64::from(self.phi),
            f64::from(self.theta),
            f64::from(self.psi),
        )
    }
}

/// Parses the fixture form `"<psi>;<theta>;<phi>"`.
///
/// Up to three tokens are read in order and anything after the third is
/// ignored. Missing trailing tokens leave their angle at zero. Empty tokens
/// between separators are skipped. NaN and infinite angles are rejected.
impl FromStr for Orientation {
    type Err = IntegrityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut angles = [0.0_f32; 3];
        for (slot, token) in angles
            .iter_mut()
            .zip(s.split(';').filter(|token| !token.is_empty()))
        {
            let value = token
                .trim()
                .parse::<f32>()
                .map_err(|e| IntegrityError::MalformedInput {
                    token: token.to_string(),
                    reason: e.to_string(),
                })?;
            if !value.is_finite() {
                return Err(IntegrityError::MalformedInput {
                    token: token.to_string(),
                    reason: "angle must be finite".to_string(),
                });
            }
            *slot = value;
        }
        let [psi, theta, phi] = angles;
        Ok(Self::new(psi, theta, phi))
    }
}

impl PartialEq for Orientation {
    fn eq(&self, other: &Self) -> bool {
        self.psi.to_bits() == other.psi.to_bits()
            && self.theta.to_bits() == other.theta.to_bits()
            && self.phi.to_bits() == other.phi.to_bits()
    }
}

impl Eq for Orientation {}

impl Hash for Orientation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.psi.to_bits().hash(state);
        self.theta.to_bits().hash(state);
        self.phi.to_bits().hash(state);
    }
}

impl AbsDiffEq for Orientation {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        Self::DEFAULT_THRESHOLD
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.deltas_to(other)
            .iter()
            .all(|delta| delta.abs() <= epsilon)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orientation [psi={}, theta={}, phi={}]",
            self.psi, self.theta, self.phi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};
    use nalgebra::Vector3;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_parse_full_fixture_normalizes_each_angle() {
        let orientation: Orientation = "1.0;2.0;3.0".parse().unwrap();
        assert_eq!(orientation.psi(), normalize_angle(1.0));
        assert_eq!(orientation.theta(), normalize_angle(2.0));
        assert_eq!(orientation.phi(), normalize_angle(3.0));

        let wrapped: Orientation = "4.0;-4.0;7.0".parse().unwrap();
        assert_abs_diff_eq!(wrapped.psi(), 4.0 - 2.0 * PI, epsilon = EPS);
        assert_abs_diff_eq!(wrapped.theta(), -4.0 + 2.0 * PI, epsilon = EPS);
        assert_abs_diff_eq!(wrapped.phi(), 7.0 - 2.0 * PI, epsilon = EPS);
    }

    #[test]
    fn test_parse_partial_fixture_sets_leading_fields_only() {
        let one: Orientation = "0.5".parse().unwrap();
        assert_eq!((one.psi(), one.theta(), one.phi()), (0.5, 0.0, 0.0));

        let two: Orientation = "0.5;0.25".parse().unwrap();
        assert_eq!((two.psi(), two.theta(), two.phi()), (0.5, 0.25, 0.0));

        let empty: Orientation = "".parse().unwrap();
        assert_eq!(empty, Orientation::default());
    }

    #[test]
    fn test_parse_ignores_trailing_tokens_and_blank_separators() {
        let extra: Orientation = "0.1;0.2;0.3;not-a-number".parse().unwrap();
        assert_eq!((extra.psi(), extra.theta(), extra.phi()), (0.1, 0.2, 0.3));

        let gaps: Orientation = ";0.1;;0.2; 0.3 ".parse().unwrap();
        assert_eq!((gaps.psi(), gaps.theta(), gaps.phi()), (0.1, 0.2, 0.3));
    }

    #[test]
    fn test_parse_rejects_non_numeric_token() {
        let err = "0.1;abc;0.3".parse::<Orientation>().unwrap_err();
        assert!(matches!(err, IntegrityError::MalformedInput { ref token, .. } if token == "abc"));
    }

    #[test]
    fn test_parse_rejects_non_finite_token() {
        for (fixture, bad) in [("NaN;0;0", "NaN"), ("inf;0;0", "inf"), ("-infinity", "-infinity")] {
            let err = fixture.parse::<Orientation>().unwrap_err();
            assert!(
                matches!(err, IntegrityError::MalformedInput { ref token, .. } if token == bad),
                "{fixture} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_replacement_renormalizes() {
        let orientation = Orientation::default().with_psi(3.0 * PI).with_phi(-7.0);
        assert!(orientation.psi() > -PI && orientation.psi() <= PI);
        assert_abs_diff_eq!(orientation.phi(), -7.0 + 2.0 * PI, epsilon = EPS);
    }

    #[test]
    fn test_tolerance_equality_is_seam_aware_and_symmetric() {
        let a = Orientation::new(PI - 0.00002, 0.0, 0.0);
        let b = Orientation::new(-PI + 0.00002, 0.0, 0.0);
        assert_abs_diff_eq!(a, b);
        assert_abs_diff_eq!(b, a);
        assert_abs_diff_eq!(a, a);
        assert_abs_diff_ne!(a, Orientation::new(PI - 0.001, 0.0, 0.0));
    }

    #[test]
    fn test_tolerance_equality_is_not_transitive_at_the_boundary() {
        // a ~ b and b ~ c, yet a and c are further apart than the threshold.
        let a = Orientation::new(0.0, 0.0, 0.0);
        let b = Orientation::new(0.00008, 0.0, 0.0);
        let c = Orientation::new(0.00016, 0.0, 0.0);
        assert!(a.abs_diff_eq(&b, Orientation::DEFAULT_THRESHOLD));
        assert!(b.abs_diff_eq(&c, Orientation::DEFAULT_THRESHOLD));
        assert!(!a.abs_diff_eq(&c, Orientation::DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_advanced_integrates_each_axis() {
        let start = Orientation::new(3.0, 0.0, -1.0);
        let rates = AngularVelocityVector::new(0.5, 0.1, 0.2);
        let next = start.advanced(&rates, 2.0);
        assert_abs_diff_eq!(next.psi(), 3.4 - 2.0 * PI, epsilon = 1e-5);
        assert_abs_diff_eq!(next.theta(), 0.2, epsilon = 1e-6);
        assert_abs_diff_eq!(next.phi(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_body_to_world_yaw_turns_x_into_y() {
        let heading_north = Orientation::new(PI / 2.0, 0.0, 0.0);
        let world = heading_north.body_to_world() * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(world, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }
}
