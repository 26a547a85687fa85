// integrity_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::error::{IntegrityError, IntegrityResult};
pub use crate::models::dead_reckoning::{predict, DeadReckoning};
pub use crate::tolerance::Tolerances;
pub use crate::types::{EntityIdentifier, Seconds};

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::spatial::{
    AccelerationVector, AngularVelocityVector, DeadReckoningAlgorithm, Orientation, SpatialParts,
    SpatialRepresentation, VelocityVector, WorldLocation,
};

// --- Wire decoding ---
pub use crate::coders::{widen_unsigned16, widen_unsigned32};

// --- Verdicts ---
pub use crate::verdict::{compare, SpatialField, Verdict};
