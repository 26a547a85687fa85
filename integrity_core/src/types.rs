// integrity_core/src/types.rs

use crate::coders::widen_unsigned16;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Core Type Aliases ---
/// Elapsed or absolute simulation time, in seconds.
pub type Seconds = f64;

// --- Core Identifier ---
/// The (site, application, entity) triplet naming one simulated entity.
///
/// Each part is an unsigned 16-bit number on the wire. It is stored widened so
/// that values above `i16::MAX` survive producers that only speak signed types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityIdentifier {
    pub site: i32,
    pub application: i32,
    pub entity: i32,
}

impl EntityIdentifier {
    /// Builds an identifier from the raw 16-bit patterns of a decoded record.
    pub fn from_raw(site: i16, application: i16, entity: i16) -> Self {
        Self {
            site: widen_unsigned16(site),
            application: widen_unsigned16(application),
            entity: widen_unsigned16(entity),
        }
    }
}

impl fmt::Display for EntityIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.site, self.application, self.entity)
    }
}
