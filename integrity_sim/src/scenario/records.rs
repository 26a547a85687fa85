// integrity_sim/src/scenario/records.rs

use integrity_core::prelude::*;
use serde::Deserialize;

// =========================================================================
// == Top-Level Scenario ==
// =========================================================================

/// # ScenarioConfig
/// The root of the data parsed from a scenario `.toml` file: one entity and
/// the ordered state updates it published.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    /// Human-readable name; the file stem is used when absent.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)] // Use default thresholds if [tolerances] is missing
    pub tolerances: Tolerances,

    #[serde(default)]
    pub entity: EntityRecord,

    // The TOML has `[[updates]]`, which becomes a Vec of UpdateRecord structs.
    #[serde(default)]
    pub updates: Vec<UpdateRecord>,
}

// =========================================================================
// == Record Sub-Structs ==
// These hold field values exactly as a decoder hands them over.
// =========================================================================

/// The raw 16-bit patterns of the entity identifier.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct EntityRecord {
    pub site: i16,
    pub application: i16,
    pub entity: i16,
}

impl EntityRecord {
    pub fn identifier(&self) -> EntityIdentifier {
        EntityIdentifier::from_raw(self.site, self.application, self.entity)
    }
}

/// One state update as published by the entity.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpdateRecord {
    /// Simulation time of the update, seconds.
    pub time: Seconds,
    /// Dead-reckoning algorithm wire code.
    pub algorithm: u8,
    pub location: [f64; 3],
    #[serde(default)]
    pub frozen: bool,
    /// `"<psi>;<theta>;<phi>"` in radians.
    pub orientation: Option<String>,
    pub velocity: Option<[f32; 3]>,
    pub acceleration: Option<[f32; 3]>,
    pub angular_velocity: Option<[f32; 3]>,
}

impl UpdateRecord {
    /// Decodes and validates this record into a spatial snapshot.
    pub fn to_representation(&self) -> IntegrityResult<SpatialRepresentation> {
        let algorithm = DeadReckoningAlgorithm::try_from(self.algorithm)?;
        let orientation = self
            .orientation
            .as_deref()
            .map(str::parse::<Orientation>)
            .transpose()?;
        let [x, y, z] = self.location;

        let parts = SpatialParts {
            world_location: WorldLocation::new(x, y, z),
            frozen: self.frozen,
            orientation,
            velocity: self.velocity.map(|[x, y, z]| VelocityVector::new(x, y, z)),
            acceleration: self
                .acceleration
                .map(|[x, y, z]| AccelerationVector::new(x, y, z)),
            angular_velocity: self
                .angular_velocity
                .map(|[x, y, z]| AngularVelocityVector::new(x, y, z)),
        };
        SpatialRepresentation::from_parts(algorithm, parts)
    }
}
