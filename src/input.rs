use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::driver::InputSource;
use crate::error::AppError;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Effective heading indexed by `[current][requested]`.
///
/// Every cell that would reverse the snake keeps the current heading.
const EFFECTIVE_DIRECTION: [[Direction; 4]; 4] = [
    // current Up
    [Direction::Up, Direction::Up, Direction::Left, Direction::Right],
    // current Down
    [Direction::Down, Direction::Down, Direction::Left, Direction::Right],
    // current Left
    [Direction::Up, Direction::Down, Direction::Left, Direction::Left],
    // current Right
    [Direction::Up, Direction::Down, Direction::Right, Direction::Right],
];

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector in screen coordinates (y grows downwards).
    #[must_use]
    pub fn unit(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// Applies the opposite-direction guard: returns the heading the snake will
/// actually take when `requested` arrives while moving `current`.
#[must_use]
pub fn effective_direction(current: Direction, requested: Direction) -> Direction {
    EFFECTIVE_DIRECTION[current.index()][requested.index()]
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    effective_direction(current, next) == next
}

/// High-level input events produced by the keyboard mapping.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Everything the input collaborator reports for one tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PolledInput {
    pub direction: Option<Direction>,
    pub quit: bool,
}

/// Collapses the direction requests of one tick window.
///
/// The most recent request that passes the guard against the heading at the
/// start of the tick wins.
#[derive(Debug, Clone, Copy)]
pub struct DirectionLatch {
    heading: Direction,
    pending: Option<Direction>,
}

impl DirectionLatch {
    #[must_use]
    pub fn new(heading: Direction) -> Self {
        Self {
            heading,
            pending: None,
        }
    }

    pub fn request(&mut self, direction: Direction) {
        if direction_change_is_valid(self.heading, direction) {
            self.pending = Some(direction);
        }
    }

    #[must_use]
    pub fn resolved(self) -> Option<Direction> {
        self.pending
    }
}

/// Maps one terminal key event onto a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        _ => None,
    }
}

/// Non-blocking crossterm keyboard source.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self, heading: Direction) -> Result<PolledInput, AppError> {
        let mut latch = DirectionLatch::new(heading);
        let mut quit = false;

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match map_key(key) {
                Some(GameInput::Direction(direction)) => latch.request(direction),
                Some(GameInput::Quit) => quit = true,
                None => {}
            }
        }

        Ok(PolledInput {
            direction: latch.resolved(),
            quit,
        })
    }
}
