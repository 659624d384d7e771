use std::fmt::Display;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A character, keyed by the game's in-match ("internal") id.
///
/// Note that this numbering differs from the character select screen; use `from_external`
/// for values read off that screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Character {
    Mario = 0x00,
    Fox = 0x01,
    CaptainFalcon = 0x02,
    DonkeyKong = 0x03,
    Kirby = 0x04,
    Bowser = 0x05,
    Link = 0x06,
    Sheik = 0x07,
    Ness = 0x08,
    Peach = 0x09,
    Popo = 0x0A,
    Nana = 0x0B,
    Pikachu = 0x0C,
    Samus = 0x0D,
    Yoshi = 0x0E,
    Jigglypuff = 0x0F,
    Mewtwo = 0x10,
    Luigi = 0x11,
    Marth = 0x12,
    Zelda = 0x13,
    YoungLink = 0x14,
    DrMario = 0x15,
    Falco = 0x16,
    Pichu = 0x17,
    MrGameAndWatch = 0x18,
    Ganondorf = 0x19,
    Roy = 0x1A,
    MasterHand = 0x1B,
    CrazyHand = 0x1C,
    WireframeMale = 0x1D,
    WireframeFemale = 0x1E,
    GigaBowser = 0x1F,
    Sandbag = 0x20,
    #[num_enum(default)]
    UnknownCharacter = 0xFF,
}

impl Character {
    /// Translates a character select screen id into the in-match id.
    ///
    /// Ice Climbers are selected as a pair but play as Popo (with Nana tracked separately).
    pub fn from_external(css_id: u8) -> Self {
        match css_id {
            0x00 => Self::CaptainFalcon,
            0x01 => Self::DonkeyKong,
            0x02 => Self::Fox,
            0x03 => Self::MrGameAndWatch,
            0x04 => Self::Kirby,
            0x05 => Self::Bowser,
            0x06 => Self::Link,
            0x07 => Self::Luigi,
            0x08 => Self::Mario,
            0x09 => Self::Marth,
            0x0A => Self::Mewtwo,
            0x0B => Self::Ness,
            0x0C => Self::Peach,
            0x0D => Self::Pikachu,
            0x0E => Self::Popo,
            0x0F => Self::Jigglypuff,
            0x10 => Self::Samus,
            0x11 => Self::Yoshi,
            0x12 => Self::Zelda,
            0x13 => Self::Sheik,
            0x14 => Self::Falco,
            0x15 => Self::YoungLink,
            0x16 => Self::DrMario,
            0x17 => Self::Roy,
            0x18 => Self::Pichu,
            0x19 => Self::Ganondorf,
            _ => Self::UnknownCharacter,
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::UnknownCharacter
    }
}

impl Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::DrMario => write!(f, "Dr. Mario"),
            Self::Mario => write!(f, "Mario"),
            Self::Luigi => write!(f, "Luigi"),
            Self::Bowser => write!(f, "Bowser"),
            Self::Peach => write!(f, "Peach"),
            Self::Yoshi => write!(f, "Yoshi"),
            Self::DonkeyKong => write!(f, "Donkey Kong"),
            Self::CaptainFalcon => write!(f, "Captain Falcon"),
            Self::Ganondorf => write!(f, "Ganondorf"),
            Self::Falco => write!(f, "Falco"),
            Self::Fox => write!(f, "Fox"),
            Self::Ness => write!(f, "Ness"),
            Self::Popo => write!(f, "Popo"),
            Self::Nana => write!(f, "Nana"),
            Self::Kirby => write!(f, "Kirby"),
            Self::Samus => write!(f, "Samus"),
            Self::Zelda => write!(f, "Zelda"),
            Self::Sheik => write!(f, "Sheik"),
            Self::Link => write!(f, "Link"),
            Self::YoungLink => write!(f, "Young Link"),
            Self::Pichu => write!(f, "Pichu"),
            Self::Pikachu => write!(f, "Pikachu"),
            Self::Jigglypuff => write!(f, "Jigglypuff"),
            Self::Mewtwo => write!(f, "Mewtwo"),
            Self::MrGameAndWatch => write!(f, "Mr. Game & Watch"),
            Self::Marth => write!(f, "Marth"),
            Self::Roy => write!(f, "Roy"),
            Self::MasterHand => write!(f, "Master Hand"),
            Self::CrazyHand => write!(f, "Crazy Hand"),
            Self::WireframeMale => write!(f, "Male Wireframe"),
            Self::WireframeFemale => write!(f, "Female Wireframe"),
            Self::GigaBowser => write!(f, "Giga Bowser"),
            Self::Sandbag => write!(f, "Sandbag"),
            Self::UnknownCharacter => write!(f, "Unknown character"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_round_trip_through_primitive() {
        assert_eq!(Character::from(0x01u8), Character::Fox);
        assert_eq!(u8::from(Character::Falco), 0x16);
    }

    #[test]
    fn test_unknown_raw_value_falls_back() {
        assert_eq!(Character::from(0x7Au8), Character::UnknownCharacter);
    }

    #[test]
    fn test_deserializing_unknown_raw_value_fails() {
        assert!(serde_json::from_str::<Character>("122").is_err());
        assert_eq!(serde_json::from_str::<Character>("1").unwrap(), Character::Fox);
        assert_eq!(Character::from(122u8), Character::UnknownCharacter);
    }

    #[test]
    fn test_external_ids_differ_from_internal() {
        assert_eq!(Character::from_external(0x02), Character::Fox);
        assert_eq!(Character::from_external(0x14), Character::Falco);
        assert_eq!(Character::from_external(0x0E), Character::Popo);
        assert_eq!(Character::from_external(0x21), Character::UnknownCharacter);
    }
}
