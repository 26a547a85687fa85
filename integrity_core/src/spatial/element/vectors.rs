// integrity_core/src/spatial/element/vectors.rs

//! The three single-precision derivative vectors carried by moving entities.
//!
//! They share one shape, so they are generated from a single template. None of
//! them normalize; each compares with a caller-supplied tolerance.

use approx::AbsDiffEq;
use nalgebra::Vector3;
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! spatial_vector {
    ($(#[$doc:meta])* $name:ident, $label:literal, $default_epsilon:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            x: f32,
            y: f32,
            z: f32,
        }

        impl $name {
            pub const DEFAULT_EPSILON: f32 = $default_epsilon;

            pub fn new(x: f32, y: f32, z: f32) -> Self {
                Self { x, y, z }
            }

            /// Narrows a double-precision vector to the wire precision.
            pub fn from_vector(v: &Vector3<f64>) -> Self {
                Self::new(v.x as f32, v.y as f32, v.z as f32)
            }

            pub fn x(&self) -> f32 {
                self.x
            }

            pub fn y(&self) -> f32 {
                self.y
            }

            pub fn z(&self) -> f32 {
                self.z
            }

            /// Widened to double precision for kinematic arithmetic.
            pub fn as_vector(&self) -> Vector3<f64> {
                Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
            }

            /// Signed component differences `other - self`.
            pub fn deltas_to(&self, other: &Self) -> [f32; 3] {
                [other.x - self.x, other.y - self.y, other.z - self.z]
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.x.to_bits() == other.x.to_bits()
                    && self.y.to_bits() == other.y.to_bits()
                    && self.z.to_bits() == other.z.to_bits()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.x.to_bits().hash(state);
                self.y.to_bits().hash(state);
                self.z.to_bits().hash(state);
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                Self::DEFAULT_EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.x.abs_diff_eq(&other.x, epsilon)
                    && self.y.abs_diff_eq(&other.y, epsilon)
                    && self.z.abs_diff_eq(&other.z, epsilon)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} [x={}, y={}, z={}]", $label, self.x, self.y, self.z)
            }
        }
    };
}

spatial_vector!(
    /// The rate at which an entity's position changes, metres per second.
    /// World frame for world-axis algorithms, entity frame for body-axis ones.
    VelocityVector,
    "VelocityVector",
    1e-3
);

spatial_vector!(
    /// The change in linear velocity over time, metres per second squared.
    AccelerationVector,
    "AccelerationVector",
    1e-3
);

spatial_vector!(
    /// The rate at which an entity's orientation changes, radians per second,
    /// about the entity's x, y and z axes.
    AngularVelocityVector,
    "AngularVelocityVector",
    1e-4
);
