use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Log;
use crate::config::SnapshotConfig;
use crate::enums::{ControllerStatus, Menu, Stage, SubMenu};
use crate::player::PlayerState;
use crate::projectile::Projectile;

/// Frame number for a `GameState` that hasn't been filled in yet.
pub const UNSTARTED_FRAME: i32 = -123;

/// A value stored in `GameState::custom`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for CustomValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CustomValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CustomValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for CustomValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CustomValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Everything observed about the game on a single frame.
///
/// A producer builds one of these per frame, fills it in, calls `finalize_frame`, and then
/// publishes it. Published frames are read-only: any number of readers can share one, but a
/// reader must never look at a `GameState` the producer is still writing into (e.g, if a
/// producer recycles one buffer across frames). Readers doing so will see a mix of two frames.
///
/// `Clone` is a deep copy; players, Nana, projectiles and custom data are all owned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub frame: i32,
    pub stage: Stage,
    pub menu_state: Menu,
    pub submenu: SubMenu,

    /// Keyed by port (1-4). At most four entries.
    pub players: BTreeMap<u8, PlayerState>,

    /// In the order they were read, which carries no gameplay meaning.
    pub projectiles: Vec<Projectile>,

    pub stage_select_cursor_x: f32,
    pub stage_select_cursor_y: f32,
    pub ready_to_start: bool,

    /// Distance between the first two players, refreshed by `finalize_frame`.
    pub distance: f32,
    pub menu_selection: u8,

    /// Producer bookkeeping; consumers shouldn't need this.
    pub is_new_frame: bool,

    // Session metadata
    pub played_on: String,
    pub start_at: String,
    pub console_nickname: String,
    pub is_teams: bool,

    /// Free-form extension data.
    pub custom: BTreeMap<String, CustomValue>,
}

impl GameState {
    /// Convenience for `GameState::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the producer has written real frame data yet.
    pub fn has_started(&self) -> bool {
        self.frame != UNSTARTED_FRAME
    }

    /// Computes the derived fields of a fully populated frame. `previous` is the last frame
    /// that was published, if any.
    ///
    /// This should be the last thing the producer does before publishing.
    pub fn finalize_frame(&mut self, previous: Option<&GameState>, config: &SnapshotConfig) {
        let stage = self.stage;

        for (port, player) in self.players.iter_mut() {
            let previous_player = previous.and_then(|state| state.players.get(port));

            player.finalize(
                previous_player,
                stage,
                config.off_stage_y_threshold,
                config.clear_special_iasa,
            );
        }

        if self.menu_state.is_menu() {
            for player in self.players.values_mut() {
                if player.controller_status != ControllerStatus::Cpu {
                    player.cpu_level = 0;

                    // Nana shares her leader's port, and so its controller.
                    if let Some(nana) = player.nana.as_deref_mut() {
                        nana.cpu_level = 0;
                    }
                }
            }
        }

        if config.drop_spent_projectiles {
            let frame = self.frame;

            self.projectiles.retain(|projectile| {
                let spent = projectile.is_spent();

                if spent {
                    tracing::trace!(target: Log::GameState, frame, kind = %projectile.kind, subtype = projectile.subtype, "Dropping spent projectile");
                }

                !spent
            });
        }

        self.distance = self.first_two_players_distance();
    }

    /// Distance between the two lowest ports. A missing second player is treated as sitting at
    /// the origin; no players at all is zero.
    fn first_two_players_distance(&self) -> f32 {
        let mut positions = self.players.values().map(|player| player.position);

        let Some(first) = positions.next() else {
            return 0.0;
        };

        let second = positions.next().unwrap_or_default();
        first.distance_to(&second)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            frame: UNSTARTED_FRAME,
            stage: Stage::FinalDestination,
            menu_state: Menu::InGame,
            submenu: SubMenu::UnknownSubmenu,
            players: BTreeMap::new(),
            projectiles: Vec::new(),
            stage_select_cursor_x: 0.0,
            stage_select_cursor_y: 0.0,
            ready_to_start: false,
            distance: 0.0,
            menu_selection: 0,
            is_new_frame: true,
            played_on: String::new(),
            start_at: String::new(),
            console_nickname: String::new(),
            is_teams: false,
            custom: BTreeMap::new(),
        }
    }
}
