use std::collections::VecDeque;

use super::types::Position;

/// Snake body, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Panics on an empty body; every snake has at least a head.
    pub fn new(segments: impl IntoIterator<Item = Position>) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "Snake body should never be empty");
        Self { body }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.body.contains(position)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Body after moving the head to `new_head`; the tail is kept when `grow` is set.
    pub(crate) fn moved(&self, new_head: Position, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(new_head);
        if !grow {
            body.pop_back();
        }
        Self { body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Snake {
        Snake::new([Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)])
    }

    #[test]
    fn test_head_and_tail() {
        let snake = line();
        assert_eq!(snake.head(), Position::new(2, 0));
        assert_eq!(snake.tail(), Position::new(0, 0));
    }

    #[test]
    fn test_moved_without_growth_keeps_length() {
        let moved = line().moved(Position::new(3, 0), false);
        assert_eq!(moved.len(), 3);
        assert_eq!(moved.head(), Position::new(3, 0));
        assert_eq!(moved.tail(), Position::new(1, 0));
    }

    #[test]
    fn test_moved_with_growth_keeps_tail() {
        let moved = line().moved(Position::new(3, 0), true);
        assert_eq!(moved.len(), 4);
        assert_eq!(moved.tail(), Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "Snake body should never be empty")]
    fn test_empty_body_panics() {
        Snake::new(Vec::new());
    }
}
