//! Joint enumeration and display helpers.
//!
//! Defines the [`Joint`] enum for identifying each joint of a leg (coxa,
//! femur, tibia), and provides display formatting for debugging and logging.
use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    /// J1, hip yaw.
    Coxa = 0,
    /// J2, upper segment.
    Femur = 1,
    /// J3, lower segment.
    Tibia = 2,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Coxa, Joint::Femur, Joint::Tibia];
}

impl Display for Joint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Joint::Coxa => f.write_str("coxa"),
            Joint::Femur => f.write_str("femur"),
            Joint::Tibia => f.write_str("tibia"),
        }
    }
}

impl From<usize> for Joint {
    fn from(value: usize) -> Self {
        match value {
            0 => Joint::Coxa,
            1 => Joint::Femur,
            2 => Joint::Tibia,
            _ => unreachable!(),
        }
    }
}
