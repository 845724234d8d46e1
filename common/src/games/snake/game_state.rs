use crate::games::SessionRng;
use super::snake::Snake;
use super::types::{BoardMode, Direction, GameStatus, GridSize, Position};

pub const INITIAL_SPEED_MS: u32 = 150;
pub const MIN_SPEED_MS: u32 = 50;
pub const SPEED_STEP_MS: u32 = 2;
pub const FOOD_SCORE: u32 = 10;
/// Smallest board that holds the starting snake and food.
pub const MIN_GRID_SIZE: i32 = 16;

const FOOD_SPAWN_ATTEMPTS: usize = 100;
const INITIAL_SNAKE: [Position; 3] = [
    Position::new(10, 10),
    Position::new(9, 10),
    Position::new(8, 10),
];
const INITIAL_FOOD: Position = Position::new(15, 10);

/// What a single call to [`GameState::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// The game was not playing; nothing changed.
    Skipped,
    Moved,
    AteFood,
    WallCollision,
    SelfCollision,
    /// Food was eaten and no free cell is left for the next one.
    BoardFilled,
}

impl TickEvent {
    pub fn ends_game(self) -> bool {
        matches!(
            self,
            TickEvent::WallCollision | TickEvent::SelfCollision | TickEvent::BoardFilled
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub event: TickEvent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction applied on the last tick.
    pub direction: Direction,
    /// Buffered direction, applied on the next tick.
    pub next_direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub mode: BoardMode,
    /// Tick interval in milliseconds.
    pub speed_ms: u32,
}

impl GameState {
    pub fn initial(mode: BoardMode) -> Self {
        Self {
            snake: Snake::new(INITIAL_SNAKE),
            food: INITIAL_FOOD,
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            status: GameStatus::Idle,
            mode,
            speed_ms: INITIAL_SPEED_MS,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Advances the snake one cell in `next_direction`.
    ///
    /// Collisions only flip `status` to [`GameStatus::GameOver`]; every other
    /// field is left as it was before the tick. Food placement is the only
    /// draw from `rng`.
    pub fn advance(&self, grid: GridSize, rng: &mut SessionRng) -> Transition {
        if !self.is_playing() {
            return Transition {
                state: self.clone(),
                event: TickEvent::Skipped,
            };
        }

        let stepped = self.snake.head().step(self.next_direction);
        let new_head = match self.mode {
            BoardMode::Passthrough => stepped.wrapped(grid),
            BoardMode::Walls => {
                if !grid.contains(stepped) {
                    return self.ended(TickEvent::WallCollision);
                }
                stepped
            }
        };

        // Checked against the pre-move body, tail included.
        if self.snake.contains(&new_head) {
            return self.ended(TickEvent::SelfCollision);
        }

        let ate_food = new_head == self.food;
        let mut next = Self {
            snake: self.snake.moved(new_head, ate_food),
            direction: self.next_direction,
            ..self.clone()
        };

        if !ate_food {
            return Transition {
                state: next,
                event: TickEvent::Moved,
            };
        }

        next.score += FOOD_SCORE;
        next.speed_ms = self
            .speed_ms
            .saturating_sub(SPEED_STEP_MS)
            .max(MIN_SPEED_MS);

        match place_food(&next.snake, grid, rng) {
            Some(food) => {
                next.food = food;
                Transition {
                    state: next,
                    event: TickEvent::AteFood,
                }
            }
            None => {
                next.status = GameStatus::GameOver;
                Transition {
                    state: next,
                    event: TickEvent::BoardFilled,
                }
            }
        }
    }

    fn ended(&self, event: TickEvent) -> Transition {
        Transition {
            state: Self {
                status: GameStatus::GameOver,
                ..self.clone()
            },
            event,
        }
    }
}

/// Uniformly random free cell, or `None` when the snake covers the board.
///
/// Rejection sampling first; after [`FOOD_SPAWN_ATTEMPTS`] misses the free
/// cells are enumerated and one is picked, which stays uniform and always
/// terminates.
pub fn place_food(snake: &Snake, grid: GridSize, rng: &mut SessionRng) -> Option<Position> {
    for _ in 0..FOOD_SPAWN_ATTEMPTS {
        let candidate = Position::new(
            rng.random_range(0..grid.get()),
            rng.random_range(0..grid.get()),
        );
        if !snake.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Position> = grid.cells().filter(|cell| !snake.contains(cell)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSize {
        GridSize::new(20)
    }

    #[test]
    fn test_initial_layout_fits_min_grid() {
        let state = GameState::initial(BoardMode::Walls);
        let min = GridSize::new(MIN_GRID_SIZE);
        assert!(state.snake.segments().all(|&cell| min.contains(cell)));
        assert!(min.contains(state.food));
        assert!(!GridSize::new(MIN_GRID_SIZE - 1).contains(state.food));
    }

    fn playing(mode: BoardMode) -> GameState {
        GameState {
            status: GameStatus::Playing,
            ..GameState::initial(mode)
        }
    }

    fn heading(mode: BoardMode, cells: &[(i32, i32)], direction: Direction) -> GameState {
        GameState {
            snake: Snake::new(cells.iter().map(|&(x, y)| Position::new(x, y))),
            direction,
            next_direction: direction,
            ..playing(mode)
        }
    }

    fn advance(state: &GameState) -> Transition {
        let mut rng = SessionRng::new(42);
        state.advance(grid(), &mut rng)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(BoardMode::Passthrough);
        assert_eq!(state.mode, BoardMode::Passthrough);
        assert_eq!(state.status, GameStatus::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.speed_ms, INITIAL_SPEED_MS);
        assert_eq!(GameState::initial(BoardMode::Walls).mode, BoardMode::Walls);
    }

    #[test]
    fn test_not_playing_is_identity() {
        for status in [GameStatus::Idle, GameStatus::Paused, GameStatus::GameOver] {
            let state = GameState {
                status,
                ..GameState::initial(BoardMode::Walls)
            };
            let transition = advance(&state);
            assert_eq!(transition.state, state);
            assert_eq!(transition.event, TickEvent::Skipped);
        }
    }

    #[test]
    fn test_moves_right_one_cell() {
        let state = playing(BoardMode::Passthrough);
        let transition = advance(&state);
        assert_eq!(transition.event, TickEvent::Moved);
        assert_eq!(transition.state.snake.head(), Position::new(11, 10));
        assert_eq!(transition.state.snake.len(), 3);
        assert_eq!(transition.state.score, 0);
    }

    #[test]
    fn test_moves_in_each_direction() {
        let cases = [
            (&[(10, 10), (10, 11), (10, 12)], Direction::Up, Position::new(10, 9)),
            (&[(10, 10), (10, 9), (10, 8)], Direction::Down, Position::new(10, 11)),
            (&[(10, 10), (11, 10), (12, 10)], Direction::Left, Position::new(9, 10)),
        ];
        for (cells, direction, expected) in cases {
            let state = heading(BoardMode::Passthrough, cells, direction);
            assert_eq!(advance(&state).state.snake.head(), expected);
        }
    }

    #[test]
    fn test_wraps_in_passthrough() {
        let right = heading(BoardMode::Passthrough, &[(19, 10), (18, 10), (17, 10)], Direction::Right);
        let transition = advance(&right);
        assert_eq!(transition.state.snake.head(), Position::new(0, 10));
        assert_eq!(transition.state.status, GameStatus::Playing);

        let up = heading(BoardMode::Passthrough, &[(10, 0), (10, 1), (10, 2)], Direction::Up);
        assert_eq!(advance(&up).state.snake.head(), Position::new(10, 19));

        let left = heading(BoardMode::Passthrough, &[(0, 10), (1, 10), (2, 10)], Direction::Left);
        assert_eq!(advance(&left).state.snake.head(), Position::new(19, 10));

        let down = heading(BoardMode::Passthrough, &[(10, 19), (10, 18), (10, 17)], Direction::Down);
        assert_eq!(advance(&down).state.snake.head(), Position::new(10, 0));
    }

    #[test]
    fn test_wall_collision_only_changes_status() {
        let edges = [
            (&[(19, 10), (18, 10), (17, 10)], Direction::Right),
            (&[(0, 10), (1, 10), (2, 10)], Direction::Left),
            (&[(10, 0), (10, 1), (10, 2)], Direction::Up),
            (&[(10, 19), (10, 18), (10, 17)], Direction::Down),
        ];
        for (cells, direction) in edges {
            let state = heading(BoardMode::Walls, cells, direction);
            let transition = advance(&state);
            assert_eq!(transition.event, TickEvent::WallCollision);
            assert_eq!(
                transition.state,
                GameState {
                    status: GameStatus::GameOver,
                    ..state
                }
            );
        }
    }

    #[test]
    fn test_self_collision_ends_game() {
        let state = heading(
            BoardMode::Passthrough,
            &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6), (4, 5)],
            Direction::Left,
        );
        let transition = advance(&state);
        assert_eq!(transition.event, TickEvent::SelfCollision);
        assert_eq!(transition.state.status, GameStatus::GameOver);
        assert_eq!(transition.state.snake, state.snake);
    }

    #[test]
    fn test_applies_buffered_direction() {
        let state = GameState {
            next_direction: Direction::Up,
            ..playing(BoardMode::Passthrough)
        };
        let next = advance(&state).state;
        assert_eq!(next.snake.head(), Position::new(10, 9));
        assert_eq!(next.direction, Direction::Up);
    }

    #[test]
    fn test_eating_grows_scores_and_speeds_up() {
        let state = GameState {
            food: Position::new(6, 5),
            ..heading(BoardMode::Passthrough, &[(5, 5), (4, 5), (3, 5)], Direction::Right)
        };
        let transition = advance(&state);
        assert_eq!(transition.event, TickEvent::AteFood);
        assert_eq!(transition.state.score, 10);
        assert_eq!(transition.state.snake.len(), 4);
        assert_eq!(transition.state.speed_ms, 148);
        assert_ne!(transition.state.food, state.food);
    }

    #[test]
    fn test_speed_floor() {
        let state = GameState {
            food: Position::new(6, 5),
            speed_ms: MIN_SPEED_MS,
            ..heading(BoardMode::Passthrough, &[(5, 5), (4, 5), (3, 5)], Direction::Right)
        };
        assert_eq!(advance(&state).state.speed_ms, MIN_SPEED_MS);

        let near_floor = GameState {
            speed_ms: MIN_SPEED_MS + 1,
            ..state
        };
        assert_eq!(advance(&near_floor).state.speed_ms, MIN_SPEED_MS);
    }

    #[test]
    fn test_new_food_never_on_snake() {
        let state = GameState {
            food: Position::new(6, 5),
            ..heading(
                BoardMode::Passthrough,
                &[(5, 5), (4, 5), (3, 5), (2, 5), (1, 5), (1, 6), (2, 6), (3, 6)],
                Direction::Right,
            )
        };
        for seed in 0..500 {
            let mut rng = SessionRng::new(seed);
            let next = state.advance(grid(), &mut rng).state;
            assert!(!next.snake.contains(&next.food), "seed {} placed food on snake", seed);
            assert!(grid().contains(next.food));
        }
    }

    #[test]
    fn test_filled_board_ends_game_instead_of_looping() {
        let small = GridSize::new(2);
        let state = GameState {
            snake: Snake::new([Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]),
            food: Position::new(0, 1),
            direction: Direction::Left,
            next_direction: Direction::Down,
            ..playing(BoardMode::Walls)
        };
        let mut rng = SessionRng::new(3);
        let transition = state.advance(small, &mut rng);
        assert_eq!(transition.event, TickEvent::BoardFilled);
        assert_eq!(transition.state.status, GameStatus::GameOver);
        assert_eq!(transition.state.score, 10);
        assert_eq!(transition.state.snake.len(), 4);
    }

    #[test]
    fn test_place_food_finds_last_free_cell() {
        let small = GridSize::new(2);
        let snake = Snake::new([Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]);
        let mut rng = SessionRng::new(11);
        assert_eq!(place_food(&snake, small, &mut rng), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_game_ending_events() {
        assert!(TickEvent::WallCollision.ends_game());
        assert!(TickEvent::SelfCollision.ends_game());
        assert!(TickEvent::BoardFilled.ends_game());
        assert!(!TickEvent::AteFood.ends_game());
        assert!(!TickEvent::Skipped.ends_game());
    }
}
