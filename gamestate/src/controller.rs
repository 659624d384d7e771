use serde::{Deserialize, Serialize};

/// Digital button state for a single controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub l: bool,
    pub r: bool,
    pub start: bool,
    pub d_up: bool,
    pub d_down: bool,
    pub d_left: bool,
    pub d_right: bool,
}

impl Buttons {
    /// Decodes the physical button bitfield the game tracks per controller.
    pub fn from_bits(bits: u16) -> Self {
        Self {
            d_left: bits & 0x0001 != 0,
            d_right: bits & 0x0002 != 0,
            d_down: bits & 0x0004 != 0,
            d_up: bits & 0x0008 != 0,
            z: bits & 0x0010 != 0,
            r: bits & 0x0020 != 0,
            l: bits & 0x0040 != 0,
            a: bits & 0x0100 != 0,
            b: bits & 0x0200 != 0,
            x: bits & 0x0400 != 0,
            y: bits & 0x0800 != 0,
            start: bits & 0x1000 != 0,
        }
    }
}

/// An analog stick, with both axes in `[0, 1]` and `0.5` as neutral.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    pub x: f32,
    pub y: f32,
}

impl Stick {
    pub const NEUTRAL: Stick = Stick { x: 0.5, y: 0.5 };

    /// The game processes sticks into `[-1, 1]`; this rescales into `[0, 1]`.
    pub fn from_processed(x: f32, y: f32) -> Self {
        Self {
            x: (x / 2.0) + 0.5,
            y: (y / 2.0) + 0.5,
        }
    }
}

impl Default for Stick {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Input state for one player on one frame. The default is an untouched controller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerState {
    pub buttons: Buttons,
    pub main_stick: Stick,
    pub c_stick: Stick,

    /// Unprocessed main stick values, as read off the hardware.
    pub raw_main_stick: (i8, i8),

    // The game reads both shoulders together, so producers usually write the same value to each.
    pub l_shoulder: f32,
    pub r_shoulder: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_controller_is_neutral() {
        let state = ControllerState::default();

        assert_eq!(state.buttons, Buttons::default());
        assert_eq!(state.main_stick, Stick::NEUTRAL);
        assert_eq!(state.c_stick, Stick::NEUTRAL);
        assert_eq!(state.raw_main_stick, (0, 0));
        assert_eq!(state.l_shoulder, 0.0);
    }

    #[test]
    fn test_button_bits() {
        let buttons = Buttons::from_bits(0x0100 | 0x0020 | 0x0008);

        assert!(buttons.a);
        assert!(buttons.r);
        assert!(buttons.d_up);
        assert!(!buttons.b);
        assert!(!buttons.l);
        assert!(!buttons.start);
    }

    #[test]
    fn test_processed_stick_rescale() {
        assert_eq!(Stick::from_processed(0.0, 0.0), Stick::NEUTRAL);
        assert_eq!(Stick::from_processed(-1.0, 1.0), Stick { x: 0.0, y: 1.0 });
    }
}
