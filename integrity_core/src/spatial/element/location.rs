// integrity_core/src/spatial/element/location.rs

use approx::AbsDiffEq;
use nalgebra::Vector3;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A position in the geocentric (earth-centred, earth-fixed) world frame, metres.
///
/// Coordinates are not normalized. Equality through `PartialEq`/`Hash` is exact
/// on the bit pattern; use [`AbsDiffEq`] for the tolerance comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldLocation {
    x: f64,
    y: f64,
    z: f64,
}

impl WorldLocation {
    /// Absorbs floating round-off only; conformance checks pass their own tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-9;

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// The location displaced by `offset` (world frame, metres).
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self::from_vector(&(self.as_vector() + offset))
    }
}

impl PartialEq for WorldLocation {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
    }
}

impl Eq for WorldLocation {}

impl Hash for WorldLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
    }
}

impl AbsDiffEq for WorldLocation {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Self::DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl fmt::Display for WorldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorldLocation [x={}, y={}, z={}]", self.x, self.y, self.z)
    }
}
