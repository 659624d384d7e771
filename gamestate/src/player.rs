use serde::{Deserialize, Serialize};

use crate::controller::ControllerState;
use crate::enums::{Action, Character, ControllerStatus, Stage};
use crate::types::{CollisionBox, Position};

/// Full shield health.
pub const FULL_SHIELD: f32 = 60.0;

/// Everything observable about one player on one frame.
///
/// Values are carried exactly as the producer supplied them; nothing here checks that, say,
/// `percent` is non-negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    // Identity
    pub character: Character,
    /// What was picked on the character select screen. Can differ from `character` (e.g, Zelda
    /// transforming into Sheik mid-match).
    pub character_selected: Character,
    pub costume: u8,
    pub nickname: String,
    pub connect_code: String,
    pub display_name: String,
    pub team_id: u8,
    /// 0 for human players.
    pub cpu_level: u8,
    pub is_holding_cpu_slider: bool,
    pub is_nana: bool,
    /// The Ice Climbers partner, if this player has one.
    pub nana: Option<Box<PlayerState>>,

    // Spatial
    pub position: Position,
    pub ecb: CollisionBox,
    /// True when facing right.
    pub facing: bool,

    // Combat/status
    pub percent: f32,
    pub shield_strength: f32,
    pub stock: u8,
    pub action: Action,
    pub action_frame: i32,
    pub invulnerable: bool,
    pub invulnerability_left: i32,
    pub hitlag_left: i32,
    pub hitstun_frames_left: i32,
    pub jumps_left: u8,
    pub on_ground: bool,
    pub off_stage: bool,
    pub is_powershielding: bool,
    pub moonwalkwarning: bool,

    // The game tracks several velocities that each decay differently; they are not summed.
    pub speed_air_x_self: f32,
    pub speed_y_self: f32,
    pub speed_x_attack: f32,
    pub speed_y_attack: f32,
    pub speed_ground_x_self: f32,

    // Controller/meta
    pub controller_state: ControllerState,
    pub controller_status: ControllerStatus,
    /// Menu cursor position for this port.
    pub cursor: Position,
    pub coin_down: bool,
    pub iasa: bool,
}

impl PlayerState {
    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn ecb_top(&self) -> Position {
        self.ecb.top
    }

    pub fn ecb_bottom(&self) -> Position {
        self.ecb.bottom
    }

    pub fn ecb_left(&self) -> Position {
        self.ecb.left
    }

    pub fn ecb_right(&self) -> Position {
        self.ecb.right
    }

    /// Recomputes the per-player helper flags. `previous` is this same player (or Nana) on the
    /// prior frame, if there was one.
    pub(crate) fn finalize(&mut self, previous: Option<&PlayerState>, stage: Stage, off_stage_y_threshold: f32, clear_special_iasa: bool) {
        self.update_moonwalk_warning(previous);
        self.update_off_stage(stage, off_stage_y_threshold);

        if clear_special_iasa && !self.action.is_a_attack() {
            // The game never sets or resets IASA for anything but A attacks.
            self.iasa = false;
        }

        if let Some(nana) = self.nana.as_deref_mut() {
            let previous_nana = previous.and_then(|p| p.nana.as_deref());
            nana.finalize(previous_nana, stage, off_stage_y_threshold, clear_special_iasa);
        }
    }

    /// The warning goes up on the first frame of a dash (coming from anything other than a dash
    /// or turn) and stays up until the player leaves the dash.
    fn update_moonwalk_warning(&mut self, previous: Option<&PlayerState>) {
        if self.action != Action::Dashing {
            self.moonwalkwarning = false;
            return;
        }

        if let Some(previous) = previous {
            if !previous.action.is_dashing_or_turning() {
                self.moonwalkwarning = true;
            } else {
                self.moonwalkwarning = previous.moonwalkwarning;
            }
        }
    }

    fn update_off_stage(&mut self, stage: Stage, off_stage_y_threshold: f32) {
        self.off_stage = match stage.edge_ground_position() {
            Some(edge) => !self.on_ground && (self.position.x.abs() > edge || self.position.y < off_stage_y_threshold),
            None => false,
        };
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            character: Character::UnknownCharacter,
            character_selected: Character::UnknownCharacter,
            costume: 0,
            nickname: String::new(),
            connect_code: String::new(),
            display_name: String::new(),
            team_id: 0,
            cpu_level: 0,
            is_holding_cpu_slider: false,
            is_nana: false,
            nana: None,

            position: Position::default(),
            ecb: CollisionBox::default(),
            facing: true,

            percent: 0.0,
            shield_strength: FULL_SHIELD,
            stock: 0,
            action: Action::UnknownAnimation,
            action_frame: 0,
            invulnerable: false,
            invulnerability_left: 0,
            hitlag_left: 0,
            hitstun_frames_left: 0,
            jumps_left: 0,
            on_ground: true,
            off_stage: false,
            is_powershielding: false,
            moonwalkwarning: false,

            speed_air_x_self: 0.0,
            speed_y_self: 0.0,
            speed_x_attack: 0.0,
            speed_y_attack: 0.0,
            speed_ground_x_self: 0.0,

            controller_state: ControllerState::default(),
            controller_status: ControllerStatus::Unplugged,
            cursor: Position::default(),
            coin_down: false,
            iasa: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashing() -> PlayerState {
        PlayerState {
            action: Action::Dashing,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let player = PlayerState::default();

        assert_eq!(player.shield_strength, 60.0);
        assert!(player.on_ground);
        assert_eq!(player.character, Character::UnknownCharacter);
        assert_eq!(player.action, Action::UnknownAnimation);
        assert_eq!(player.controller_status, ControllerStatus::Unplugged);
        assert!(player.nana.is_none());
    }

    #[test]
    fn test_flattened_ecb_accessors() {
        let mut player = PlayerState::default();
        player.ecb.top = Position::new(1.0, 12.0);
        player.ecb.left = Position::new(-3.0, 6.0);

        assert_eq!(player.ecb_top(), Position::new(1.0, 12.0));
        assert_eq!(player.ecb_left(), Position::new(-3.0, 6.0));
        assert_eq!(player.ecb_right(), Position::default());
    }

    #[test]
    fn test_moonwalk_warning_lifecycle() {
        let standing = PlayerState {
            action: Action::Standing,
            ..Default::default()
        };

        // Entering a dash raises the warning.
        let mut first = dashing();
        first.update_moonwalk_warning(Some(&standing));
        assert!(first.moonwalkwarning);

        // Staying in the dash keeps it.
        let mut second = dashing();
        second.update_moonwalk_warning(Some(&first));
        assert!(second.moonwalkwarning);

        // Dashing out of a turn doesn't raise it.
        let turning = PlayerState {
            action: Action::Turning,
            ..Default::default()
        };
        let mut from_turn = dashing();
        from_turn.update_moonwalk_warning(Some(&turning));
        assert!(!from_turn.moonwalkwarning);

        // Anything else clears it.
        let mut running = PlayerState {
            action: Action::Running,
            moonwalkwarning: true,
            ..Default::default()
        };
        running.update_moonwalk_warning(Some(&second));
        assert!(!running.moonwalkwarning);
    }

    #[test]
    fn test_off_stage() {
        let mut player = PlayerState {
            on_ground: false,
            position: Position::new(90.0, 10.0),
            ..Default::default()
        };

        player.update_off_stage(Stage::FinalDestination, -6.0);
        assert!(player.off_stage);

        player.position = Position::new(10.0, -20.0);
        player.update_off_stage(Stage::FinalDestination, -6.0);
        assert!(player.off_stage);

        // Grounded players are never off stage.
        player.on_ground = true;
        player.update_off_stage(Stage::FinalDestination, -6.0);
        assert!(!player.off_stage);

        // Nor is anyone on a stage we don't know the edges of.
        player.on_ground = false;
        player.update_off_stage(Stage::NoStage, -6.0);
        assert!(!player.off_stage);
    }

    #[test]
    fn test_finalize_clears_special_iasa_and_recurses_into_nana() {
        let mut player = PlayerState {
            action: Action::UnknownAnimation,
            iasa: true,
            nana: Some(Box::new(PlayerState {
                is_nana: true,
                action: Action::Fair,
                iasa: true,
                ..Default::default()
            })),
            ..Default::default()
        };

        player.finalize(None, Stage::Battlefield, -6.0, true);

        assert!(!player.iasa);
        let nana = player.nana.as_deref().expect("nana should still be present");
        assert!(nana.iasa);
    }
}
