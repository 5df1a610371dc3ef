use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::grid::{Cell, Field};
use crate::input::Direction;

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Step {
    pub head: Cell,
    pub grew: bool,
    /// Former tail cell released by a plain crawl.
    pub vacated: Option<Cell>,
}

/// Ordered snake body (front is head) plus its current heading.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
}

impl Snake {
    /// Creates the three-cell starting snake at the field centre, heading up
    /// with its body trailing below the head.
    #[must_use]
    pub fn initial(field: Field) -> Self {
        let head = field.center();
        let body = (0..INITIAL_SNAKE_LENGTH)
            .scan(head, |cell, _| {
                let current = *cell;
                *cell = current.stepped(Direction::Down, field.cell_size);
                Some(current)
            })
            .collect();

        Self {
            body,
            heading: Direction::Up,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            heading,
        }
    }

    /// Moves one cell towards `direction`.
    ///
    /// The new head is pushed first; `eats` then decides whether the tail
    /// stays (growth by one) or is popped (constant length).
    pub fn advance<F>(&mut self, direction: Direction, field: Field, eats: F) -> Step
    where
        F: FnOnce(Cell) -> bool,
    {
        let head = self.head().stepped(direction, field.cell_size);
        self.heading = direction;
        self.body.push_front(head);

        if eats(head) {
            return Step {
                head,
                grew: true,
                vacated: None,
            };
        }

        Step {
            head,
            grew: false,
            vacated: self.body.pop_back(),
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        // Constructors reject empty bodies and `advance` pushes before it pops.
        self.body[0]
    }

    /// Cells behind the head, neck first.
    pub fn body_after_head(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().skip(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a constructed snake; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }
}
