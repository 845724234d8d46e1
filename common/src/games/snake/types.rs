use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRID_SIZE: i32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One cell in `direction`, without any wrapping or bounds check.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn wrapped(self, grid: GridSize) -> Self {
        let size = grid.get();
        Self::new(self.x.rem_euclid(size), self.y.rem_euclid(size))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Unit step; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardMode {
    #[default]
    Passthrough,
    Walls,
}

impl fmt::Display for BoardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardMode::Passthrough => write!(f, "passthrough"),
            BoardMode::Walls => write!(f, "walls"),
        }
    }
}

impl std::str::FromStr for BoardMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passthrough" => Ok(BoardMode::Passthrough),
            "walls" => Ok(BoardMode::Walls),
            other => Err(format!("Unknown board mode: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Side length of the square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize(i32);

impl GridSize {
    /// Panics when `size` is not positive; a non-positive board is a caller bug.
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "grid size must be positive, got {}", size);
        Self(size)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    pub fn contains(self, position: Position) -> bool {
        (0..self.0).contains(&position.x) && (0..self.0).contains(&position.y)
    }

    pub fn cells(self) -> impl Iterator<Item = Position> {
        let size = self.0;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIZE)
    }
}
