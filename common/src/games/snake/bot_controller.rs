use crate::games::SessionRng;
use super::snake::Snake;
use super::types::{Direction, Position};

const GREEDY_PROBABILITY: f64 = 0.7;

/// Move source for the watch-mode players.
pub struct BotController;

impl BotController {
    /// Heads for the food most of the time and wanders otherwise.
    ///
    /// Returns `None` when the greedy step has no offset left on its axis,
    /// which only happens with the head on the food; the snake then holds
    /// still for that tick. Reversals are not filtered.
    pub fn choose_direction(snake: &Snake, food: Position, rng: &mut SessionRng) -> Option<Direction> {
        if rng.chance(GREEDY_PROBABILITY) {
            Self::toward(snake.head(), food)
        } else {
            Some(Self::random_direction(rng))
        }
    }

    /// Greedy step along the axis with the larger offset; ties go vertical.
    pub fn toward(head: Position, food: Position) -> Option<Direction> {
        let dx = food.x - head.x;
        let dy = food.y - head.y;

        if dx.abs() > dy.abs() {
            match dx.signum() {
                1 => Some(Direction::Right),
                -1 => Some(Direction::Left),
                _ => None,
            }
        } else {
            match dy.signum() {
                1 => Some(Direction::Down),
                -1 => Some(Direction::Up),
                _ => None,
            }
        }
    }

    fn random_direction(rng: &mut SessionRng) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toward_prefers_larger_offset() {
        let head = Position::new(5, 5);
        assert_eq!(BotController::toward(head, Position::new(9, 6)), Some(Direction::Right));
        assert_eq!(BotController::toward(head, Position::new(1, 4)), Some(Direction::Left));
        assert_eq!(BotController::toward(head, Position::new(6, 9)), Some(Direction::Down));
        assert_eq!(BotController::toward(head, Position::new(4, 1)), Some(Direction::Up));
    }

    #[test]
    fn test_toward_equal_offsets_go_vertical() {
        let head = Position::new(5, 5);
        assert_eq!(BotController::toward(head, Position::new(8, 8)), Some(Direction::Down));
        assert_eq!(BotController::toward(head, Position::new(2, 2)), Some(Direction::Up));
    }

    #[test]
    fn test_toward_on_food_holds_still() {
        let head = Position::new(5, 5);
        assert_eq!(BotController::toward(head, head), None);
    }

    #[test]
    fn test_choose_direction_is_mostly_greedy() {
        let snake = Snake::new([Position::new(2, 10), Position::new(1, 10)]);
        let food = Position::new(15, 10);
        let mut rng = SessionRng::new(2024);

        let trials = 2000;
        let greedy = (0..trials)
            .filter(|_| BotController::choose_direction(&snake, food, &mut rng) == Some(Direction::Right))
            .count();

        // 0.7 greedy plus a quarter of the random 0.3.
        let ratio = greedy as f64 / trials as f64;
        assert!((0.70..0.85).contains(&ratio), "greedy ratio {}", ratio);
    }

    #[test]
    fn test_random_branch_covers_every_direction() {
        let snake = Snake::new([Position::new(2, 10)]);
        let mut rng = SessionRng::new(9);
        let mut seen = Vec::new();
        for _ in 0..500 {
            if let Some(direction) = BotController::choose_direction(&snake, Position::new(15, 10), &mut rng)
                && !seen.contains(&direction)
            {
                seen.push(direction);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
