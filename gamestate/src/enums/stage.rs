use std::fmt::Display;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A stage, keyed by the game's internal id.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive, IntoPrimitive, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Stage {
    #[num_enum(default)]
    NoStage = 0x00,
    YoshisStory = 0x06,
    FountainOfDreams = 0x08,
    PokemonStadium = 0x12,
    Battlefield = 0x18,
    FinalDestination = 0x19,
    Dreamland = 0x1A,
    RandomStage = 0x1D,
}

impl Stage {
    /// Translates the stage id used in game start data into the internal id.
    pub fn from_external(external_id: u16) -> Self {
        match external_id {
            0x02 => Self::FountainOfDreams,
            0x03 => Self::PokemonStadium,
            0x08 => Self::YoshisStory,
            0x1C => Self::Dreamland,
            0x1F => Self::Battlefield,
            0x20 => Self::FinalDestination,
            _ => Self::NoStage,
        }
    }

    /// The x coordinate (in either direction) of the edge of the main platform.
    pub fn edge_ground_position(&self) -> Option<f32> {
        match *self {
            Self::Battlefield => Some(68.4),
            Self::FinalDestination => Some(85.5657),
            Self::Dreamland => Some(77.2713),
            Self::FountainOfDreams => Some(63.35),
            Self::PokemonStadium => Some(87.75),
            Self::YoshisStory => Some(56.0),
            Self::NoStage | Self::RandomStage => None,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::FinalDestination
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NoStage => write!(f, "No stage"),
            Self::YoshisStory => write!(f, "Yoshi's Story"),
            Self::FountainOfDreams => write!(f, "Fountain of Dreams"),
            Self::PokemonStadium => write!(f, "Pokemon Stadium"),
            Self::Battlefield => write!(f, "Battlefield"),
            Self::FinalDestination => write!(f, "Final Destination"),
            Self::Dreamland => write!(f, "Dream Land"),
            Self::RandomStage => write!(f, "Random stage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stage() {
        assert_eq!(Stage::default(), Stage::FinalDestination);
        assert_eq!(Stage::from(0x42u8), Stage::NoStage);
    }

    #[test]
    fn test_external_ids() {
        assert_eq!(Stage::from_external(0x1F), Stage::Battlefield);
        assert_eq!(Stage::from_external(0x20), Stage::FinalDestination);
        assert_eq!(Stage::from_external(0x0D), Stage::NoStage);
    }

    #[test]
    fn test_edge_positions_only_for_real_stages() {
        assert_eq!(Stage::Battlefield.edge_ground_position(), Some(68.4));
        assert_eq!(Stage::RandomStage.edge_ground_position(), None);
    }
}
