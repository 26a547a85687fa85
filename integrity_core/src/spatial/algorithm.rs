// integrity_core/src/spatial/algorithm.rs

use crate::error::IntegrityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The standardized dead-reckoning algorithm codes (IEEE 1278.1 annex B).
///
/// The naming follows the usual `D-R-X` pattern: F(ixed) or R(otating) for
/// whether orientation evolves, P(osition) or V(elocity) for whether the
/// acceleration term is used, and W(orld) or B(ody) for the axes the linear
/// motion is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum DeadReckoningAlgorithm {
    Other = 0,
    Static = 1,
    Fpw = 2,
    Rpw = 3,
    Rvw = 4,
    Fvw = 5,
    Fpb = 6,
    Rpb = 7,
    Rvb = 8,
    Fvb = 9,
}

impl DeadReckoningAlgorithm {
    /// The wire code of this algorithm.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Linear motion is expressed in the entity's own axes.
    pub fn is_body_axis(self) -> bool {
        matches!(self, Self::Fpb | Self::Rpb | Self::Rvb | Self::Fvb)
    }

    /// The algorithm carries an angular velocity and advances orientation.
    pub fn carries_rotation(self) -> bool {
        matches!(self, Self::Rpw | Self::Rvw | Self::Rpb | Self::Rvb)
    }

    /// The algorithm carries a linear acceleration term.
    pub fn carries_acceleration(self) -> bool {
        matches!(self, Self::Rvw | Self::Fvw | Self::Rvb | Self::Fvb)
    }

    /// The algorithm carries a linear velocity (every moving algorithm does).
    pub fn carries_velocity(self) -> bool {
        !matches!(self, Self::Other | Self::Static)
    }
}

impl TryFrom<u8> for DeadReckoningAlgorithm {
    type Error = IntegrityError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Other,
            1 => Self::Static,
            2 => Self::Fpw,
            3 => Self::Rpw,
            4 => Self::Rvw,
            5 => Self::Fvw,
            6 => Self::Fpb,
            7 => Self::Rpb,
            8 => Self::Rvb,
            9 => Self::Fvb,
            other => {
                return Err(IntegrityError::InvalidInput(format!(
                    "unknown dead-reckoning algorithm code {}",
                    other
                )))
            }
        })
    }
}

impl fmt::Display for DeadReckoningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Other => "Other",
            Self::Static => "Static",
            Self::Fpw => "DRM_FPW",
            Self::Rpw => "DRM_RPW",
            Self::Rvw => "DRM_RVW",
            Self::Fvw => "DRM_FVW",
            Self::Fpb => "DRM_FPB",
            Self::Rpb => "DRM_RPB",
            Self::Rvb => "DRM_RVB",
            Self::Fvb => "DRM_FVB",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_the_wire_octet() {
        for code in 0..=9u8 {
            let algorithm = DeadReckoningAlgorithm::try_from(code).unwrap();
            assert_eq!(algorithm.code(), code);
        }
        assert!(matches!(
            DeadReckoningAlgorithm::try_from(10),
            Err(IntegrityError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_capability_flags() {
        use DeadReckoningAlgorithm::*;
        assert!(!Static.carries_velocity());
        assert!(Fpw.carries_velocity() && !Fpw.carries_rotation() && !Fpw.carries_acceleration());
        assert!(Rvb.is_body_axis() && Rvb.carries_rotation() && Rvb.carries_acceleration());
        assert!(Fvw.carries_acceleration() && !Fvw.is_body_axis());
        assert!(Rpw.carries_rotation() && !Rpw.carries_acceleration());
    }
}
