use crate::grid::Field;
use crate::snake::Snake;

/// Which check ended the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Head left the field.
#[must_use]
pub fn hits_wall(snake: &Snake, field: Field) -> bool {
    !field.in_bounds(snake.head())
}

/// Head shares a cell with any segment behind it.
#[must_use]
pub fn hits_self(snake: &Snake) -> bool {
    let head = snake.head();
    snake.body_after_head().any(|cell| *cell == head)
}

/// Runs the wall check, then the self check, on a post-advance snake.
#[must_use]
pub fn evaluate(snake: &Snake, field: Field) -> Option<Collision> {
    if hits_wall(snake, field) {
        return Some(Collision::Wall);
    }

    if hits_self(snake) {
        return Some(Collision::SelfBite);
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, Field};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{evaluate, Collision};

    #[test]
    fn head_left_of_origin_hits_wall() {
        let snake = Snake::from_segments(
            vec![Cell::new(-20, 0), Cell::new(0, 0), Cell::new(20, 0)],
            Direction::Left,
        );

        assert_eq!(evaluate(&snake, Field::CLASSIC), Some(Collision::Wall));
    }

    #[test]
    fn head_past_far_edges_hits_wall() {
        for head in [Cell::new(800, 300), Cell::new(400, 600), Cell::new(400, -20)] {
            let snake = Snake::from_segments(vec![head], Direction::Up);
            assert_eq!(evaluate(&snake, Field::CLASSIC), Some(Collision::Wall));
        }
    }

    #[test]
    fn head_on_body_is_self_bite() {
        let snake = Snake::from_segments(
            vec![
                Cell::new(420, 300),
                Cell::new(400, 300),
                Cell::new(400, 320),
                Cell::new(420, 320),
                Cell::new(420, 300),
            ],
            Direction::Right,
        );

        assert_eq!(evaluate(&snake, Field::CLASSIC), Some(Collision::SelfBite));
    }

    #[test]
    fn healthy_snake_has_no_collision() {
        assert_eq!(evaluate(&Snake::initial(Field::CLASSIC), Field::CLASSIC), None);
    }

    #[test]
    fn evaluation_leaves_snake_untouched() {
        let snake = Snake::from_segments(
            vec![
                Cell::new(420, 300),
                Cell::new(400, 300),
                Cell::new(400, 320),
                Cell::new(420, 320),
                Cell::new(420, 300),
            ],
            Direction::Right,
        );
        let before = snake.clone();

        let _ = evaluate(&snake, Field::CLASSIC);
        let _ = evaluate(&snake, Field::CLASSIC);

        assert_eq!(snake, before);
        assert_eq!(snake.len(), 5);
    }
}
