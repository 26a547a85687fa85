// integrity_core/src/spatial/element/mod.rs

//! Value types that make up a spatial representation.

mod angle;
mod location;
mod orientation;
mod vectors;

pub use angle::{angle_delta, normalize_angle};
pub use location::WorldLocation;
pub use orientation::Orientation;
pub use vectors::{AccelerationVector, AngularVelocityVector, VelocityVector};
