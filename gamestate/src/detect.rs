use crate::Log;
use crate::enums::Character;
use crate::state::GameState;

/// Returned by `detect_port` when no single port can be identified. This is never a real port.
pub const NO_PORT: u8 = 0;

/// Finds which port is playing the given character in the given costume.
///
/// Online play hands out ports unpredictably, but a bot usually knows what it picked. This
/// returns the port of the one player matching both `character` and `costume`, or `NO_PORT`
/// if nobody matches. If more than one player matches (a mirror match in the same costume),
/// this also returns `NO_PORT`; guessing wrong here means driving the opponent's character.
pub fn detect_port(state: &GameState, character: Character, costume: u8) -> u8 {
    let mut detected = NO_PORT;
    let mut matches = 0;

    for (port, player) in state.players.iter() {
        if player.character == character && player.costume == costume {
            detected = *port;
            matches += 1;
        }
    }

    match matches {
        1 => detected,

        0 => {
            tracing::debug!(target: Log::PortDetection, %character, costume, "No port matches character and costume");
            NO_PORT
        },

        _ => {
            tracing::debug!(target: Log::PortDetection, %character, costume, matches, "Multiple ports match, refusing to guess");
            NO_PORT
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerState;

    fn state_with(players: &[(u8, Character, u8)]) -> GameState {
        let mut state = GameState::new();

        for &(port, character, costume) in players {
            state.players.insert(
                port,
                PlayerState {
                    character,
                    costume,
                    ..Default::default()
                },
            );
        }

        state
    }

    #[test]
    fn test_single_match() {
        let state = state_with(&[(2, Character::Fox, 0)]);
        assert_eq!(detect_port(&state, Character::Fox, 0), 2);
    }

    #[test]
    fn test_ambiguous_match_is_rejected() {
        let state = state_with(&[(1, Character::Fox, 0), (3, Character::Fox, 0)]);
        assert_eq!(detect_port(&state, Character::Fox, 0), NO_PORT);
    }

    #[test]
    fn test_costume_disambiguates_mirror_match() {
        let state = state_with(&[(1, Character::Fox, 0), (3, Character::Fox, 2)]);

        assert_eq!(detect_port(&state, Character::Fox, 2), 3);
        assert_eq!(detect_port(&state, Character::Fox, 0), 1);
    }

    #[test]
    fn test_no_match() {
        let state = state_with(&[(1, Character::Fox, 0), (2, Character::Marth, 0)]);
        assert_eq!(detect_port(&state, Character::Falco, 0), NO_PORT);
    }

    #[test]
    fn test_wrong_costume_does_not_count() {
        let state = state_with(&[(4, Character::Falco, 1)]);
        assert_eq!(detect_port(&state, Character::Falco, 0), NO_PORT);
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(detect_port(&GameState::new(), Character::Fox, 0), NO_PORT);
    }
}
