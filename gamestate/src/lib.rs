//! This crate contains the data model for a single observed frame of a running Melee game,
//! along with a small amount of derived logic that the producing side runs before handing a
//! frame off to consumers (bots, overlays, analysis tools).
//!
//! The general flow is:
//!
//! - A producer (whatever is polling the game) builds a fresh `GameState` each frame and
//!   fills in the players and projectiles it observed.
//! - The producer calls `GameState::finalize_frame` to compute helper fields (distance,
//!   off-stage checks, and so on).
//! - The finished `GameState` is published. From that point on it is treated as read-only.
//!
//! Online matchmaking assigns ports unpredictably, so `detect_port` exists to recover which
//! port a known character/costume pair ended up in.

mod config;
pub use config::{CONFIG_PATH_ENV, SnapshotConfig};

mod controller;
pub use controller::{Buttons, ControllerState, Stick};

mod detect;
pub use detect::{NO_PORT, detect_port};

pub mod enums;
pub use enums::{Action, Character, ControllerStatus, Menu, ProjectileType, Stage, SubMenu};

mod errors;
pub use errors::ConfigError;

mod player;
pub use player::{FULL_SHIELD, PlayerState};

mod projectile;
pub use projectile::Projectile;

mod state;
pub use state::{CustomValue, GameState, UNSTARTED_FRAME};

mod types;
pub use types::{CollisionBox, Position, Speed};

/// Targets for `tracing` events emitted by this crate. Hosts can filter on these.
#[derive(Debug)]
pub struct Log;

#[allow(non_upper_case_globals)]
impl Log {
    pub const GameState: &'static str = "slippi_gamestate::state";
    pub const PortDetection: &'static str = "slippi_gamestate::detect";
    pub const Config: &'static str = "slippi_gamestate::config";
}
