use std::fmt::Display;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// What is plugged into a controller port, as shown on the character select screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ControllerStatus {
    Human = 0,
    Cpu = 1,
    #[num_enum(default)]
    Unplugged = 3,
}

impl Default for ControllerStatus {
    fn default() -> Self {
        Self::Unplugged
    }
}

impl Display for ControllerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Human => write!(f, "Human"),
            Self::Cpu => write!(f, "CPU"),
            Self::Unplugged => write!(f, "Unplugged"),
        }
    }
}
