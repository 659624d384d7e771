use std::fmt::Display;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The top-level screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Menu {
    CharacterSelect = 0,
    StageSelect = 1,
    InGame = 2,
    SuddenDeath = 3,
    PostgameScores = 4,
    MainMenu = 5,
    SlippiOnlineCss = 6,
    PressStart = 7,
    #[num_enum(default)]
    UnknownMenu = 0xFF,
}

impl Menu {
    /// Maps the major/minor scene word reported with menu events (major in the high byte).
    pub fn from_scene(scene: u16) -> Self {
        match scene {
            0x0000 => Self::PressStart,
            0x0001 => Self::MainMenu,
            0x0002 => Self::CharacterSelect,
            0x0008 => Self::SlippiOnlineCss,
            0x0102 | 0x0108 => Self::StageSelect,
            0x0202 => Self::InGame,
            _ => Self::UnknownMenu,
        }
    }

    /// Character select screens, where all four ports are live.
    pub fn is_character_select(&self) -> bool {
        matches!(self, Self::CharacterSelect | Self::SlippiOnlineCss)
    }

    /// Anything other than an active match.
    pub fn is_menu(&self) -> bool {
        !matches!(self, Self::InGame | Self::SuddenDeath)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::InGame
    }
}

impl Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::CharacterSelect => write!(f, "Character Select"),
            Self::StageSelect => write!(f, "Stage Select"),
            Self::InGame => write!(f, "In Game"),
            Self::SuddenDeath => write!(f, "Sudden Death"),
            Self::PostgameScores => write!(f, "Postgame Scores"),
            Self::MainMenu => write!(f, "Main Menu"),
            Self::SlippiOnlineCss => write!(f, "Slippi Online Character Select"),
            Self::PressStart => write!(f, "Press Start"),
            Self::UnknownMenu => write!(f, "Unknown menu"),
        }
    }
}

/// Which entry of a menu is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum SubMenu {
    MainMenu = 0x00,
    OnePlayerMode = 0x01,
    VsMode = 0x02,
    Trophies = 0x03,
    Options = 0x04,
    Data = 0x05,
    OnlinePlay = 0x08,
    NameEntry = 0x0F,
    OnlineCss = 0x10,
    #[num_enum(default)]
    UnknownSubmenu = 0xFF,
}

impl Default for SubMenu {
    fn default() -> Self {
        Self::UnknownSubmenu
    }
}

impl Display for SubMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::MainMenu => write!(f, "Main Menu"),
            Self::OnePlayerMode => write!(f, "1P Mode"),
            Self::VsMode => write!(f, "Vs. Mode"),
            Self::Trophies => write!(f, "Trophies"),
            Self::Options => write!(f, "Options"),
            Self::Data => write!(f, "Data"),
            Self::OnlinePlay => write!(f, "Online Play"),
            Self::NameEntry => write!(f, "Name Entry"),
            Self::OnlineCss => write!(f, "Online Character Select"),
            Self::UnknownSubmenu => write!(f, "Unknown submenu"),
        }
    }
}
