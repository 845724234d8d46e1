use std::fmt;

use super::game_state::GameState;
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    /// Starts a new game from idle/game over, otherwise toggles pause.
    StartOrPause,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionRejected {
    NotPlaying,
    Reversal,
}

impl fmt::Display for DirectionRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionRejected::NotPlaying => write!(f, "game is not playing"),
            DirectionRejected::Reversal => write!(f, "cannot reverse into own body"),
        }
    }
}

/// Buffers `direction` as the next one to apply.
///
/// The reversal check compares against the direction applied on the last
/// tick, not the buffered one, so every request between two ticks is judged
/// against the same baseline and the latest accepted request wins.
pub fn buffer_direction(
    state: &GameState,
    direction: Direction,
) -> Result<GameState, DirectionRejected> {
    if !state.is_playing() {
        return Err(DirectionRejected::NotPlaying);
    }
    if direction == state.direction.opposite() {
        return Err(DirectionRejected::Reversal);
    }
    Ok(GameState {
        next_direction: direction,
        ..state.clone()
    })
}

/// Keys a host can forward without knowing the game bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Char(char),
}

pub fn map_key(key: Key) -> Option<InputCommand> {
    match key {
        Key::ArrowUp | Key::Char('w') | Key::Char('W') => Some(InputCommand::Turn(Direction::Up)),
        Key::ArrowDown | Key::Char('s') | Key::Char('S') => {
            Some(InputCommand::Turn(Direction::Down))
        }
        Key::ArrowLeft | Key::Char('a') | Key::Char('A') => {
            Some(InputCommand::Turn(Direction::Left))
        }
        Key::ArrowRight | Key::Char('d') | Key::Char('D') => {
            Some(InputCommand::Turn(Direction::Right))
        }
        Key::Space | Key::Char(' ') => Some(InputCommand::StartOrPause),
        Key::Char('r') | Key::Char('R') => Some(InputCommand::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::types::{BoardMode, GameStatus};

    fn playing() -> GameState {
        GameState {
            status: GameStatus::Playing,
            ..GameState::initial(BoardMode::Passthrough)
        }
    }

    #[test]
    fn test_accepts_non_reversing_directions() {
        let state = playing();
        for direction in [Direction::Up, Direction::Down, Direction::Right] {
            let next = buffer_direction(&state, direction).unwrap();
            assert_eq!(next.next_direction, direction);
            assert_eq!(next.direction, Direction::Right);
        }
    }

    #[test]
    fn test_rejects_reversal() {
        assert_eq!(
            buffer_direction(&playing(), Direction::Left),
            Err(DirectionRejected::Reversal)
        );
    }

    #[test]
    fn test_rejects_everything_when_not_playing() {
        for status in [GameStatus::Idle, GameStatus::Paused, GameStatus::GameOver] {
            let state = GameState {
                status,
                ..GameState::initial(BoardMode::Walls)
            };
            for direction in Direction::ALL {
                assert_eq!(
                    buffer_direction(&state, direction),
                    Err(DirectionRejected::NotPlaying)
                );
            }
        }
    }

    #[test]
    fn test_reversal_judged_against_applied_direction() {
        let turned_up = buffer_direction(&playing(), Direction::Up).unwrap();
        // Left would be fine after Up, but Up has not been applied yet.
        assert_eq!(
            buffer_direction(&turned_up, Direction::Left),
            Err(DirectionRejected::Reversal)
        );
        let turned_down = buffer_direction(&turned_up, Direction::Down).unwrap();
        assert_eq!(turned_down.next_direction, Direction::Down);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(map_key(Key::ArrowUp), Some(InputCommand::Turn(Direction::Up)));
        assert_eq!(map_key(Key::Char('W')), Some(InputCommand::Turn(Direction::Up)));
        assert_eq!(map_key(Key::Char('a')), Some(InputCommand::Turn(Direction::Left)));
        assert_eq!(map_key(Key::ArrowDown), Some(InputCommand::Turn(Direction::Down)));
        assert_eq!(map_key(Key::Char('D')), Some(InputCommand::Turn(Direction::Right)));
        assert_eq!(map_key(Key::Space), Some(InputCommand::StartOrPause));
        assert_eq!(map_key(Key::Char('r')), Some(InputCommand::Reset));
        assert_eq!(map_key(Key::Char('x')), None);
    }
}
