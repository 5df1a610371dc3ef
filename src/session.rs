use log::info;

use crate::collision::{self, Collision};
use crate::config::FRUIT_REWARD;
use crate::fruit::FruitSpawner;
use crate::grid::{Cell, Field};
use crate::input::{effective_direction, Direction};
use crate::snake::Snake;

/// Coarse session status.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Lifecycle {
    Active,
    Terminated,
}

/// Why the session ended. Diagnostic only; every cause maps to `Terminated`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TerminationCause {
    Wall,
    SelfBite,
    Quit,
}

impl From<Collision> for TerminationCause {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => Self::Wall,
            Collision::SelfBite => Self::SelfBite,
        }
    }
}

/// Owned copy of everything a rendering surface needs.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub lifecycle: Lifecycle,
    pub snake: Vec<Cell>,
    pub heading: Direction,
    pub fruit: Option<Cell>,
    pub score: u32,
    pub tick: u64,
    pub cause: Option<TerminationCause>,
}

impl Snapshot {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }
}

/// Result of one `Session::tick`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TickOutcome {
    pub snapshot: Snapshot,
    pub ate_fruit: bool,
}

/// Complete state of one playthrough.
#[derive(Debug, Clone)]
pub struct Session {
    pub snake: Snake,
    pub fruit: FruitSpawner,
    pub score: u32,
    pub tick_count: u64,
    field: Field,
    lifecycle: Lifecycle,
    cause: Option<TerminationCause>,
    game_over_reported: bool,
}

impl Session {
    /// Starts a session on `field` with the first fruit already spawned.
    #[must_use]
    pub fn new(field: Field, fruit: FruitSpawner) -> Self {
        let mut session = Self {
            snake: Snake::initial(field),
            fruit,
            score: 0,
            tick_count: 0,
            field,
            lifecycle: Lifecycle::Active,
            cause: None,
            game_over_reported: false,
        };
        session.fruit.spawn();
        session
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(field: Field, seed: u64) -> Self {
        info!("starting session with fruit seed {seed}");
        Self::new(field, FruitSpawner::with_seed(field, seed))
    }

    /// Advances the simulation by one tick.
    ///
    /// `requested` is filtered by the opposite-direction guard; `None` keeps
    /// the current heading. A terminated session is left untouched.
    pub fn tick(&mut self, requested: Option<Direction>) -> TickOutcome {
        if self.lifecycle == Lifecycle::Terminated {
            return TickOutcome {
                snapshot: self.snapshot(),
                ate_fruit: false,
            };
        }

        self.tick_count += 1;

        let heading = self.snake.heading();
        let direction = requested.map_or(heading, |next| effective_direction(heading, next));

        let fruit = &self.fruit;
        let step = self
            .snake
            .advance(direction, self.field, |head| fruit.matches(head));

        if step.grew {
            self.score += FRUIT_REWARD;
            self.fruit.spawn();
            info!(
                "fruit eaten at ({}, {}) on tick {}, score {}, length {}",
                step.head.x,
                step.head.y,
                self.tick_count,
                self.score,
                self.snake.len()
            );
        }

        if let Some(collision) = collision::evaluate(&self.snake, self.field) {
            self.terminate(collision.into());
        }

        TickOutcome {
            snapshot: self.snapshot(),
            ate_fruit: step.grew,
        }
    }

    /// Ends the session at a tick boundary without moving the snake.
    pub fn quit(&mut self) {
        if self.lifecycle == Lifecycle::Active {
            self.terminate(TerminationCause::Quit);
        }
    }

    /// Returns the final snapshot the first time it is called after
    /// termination, `None` otherwise.
    pub fn take_game_over(&mut self) -> Option<Snapshot> {
        if self.lifecycle != Lifecycle::Terminated || self.game_over_reported {
            return None;
        }

        self.game_over_reported = true;
        Some(self.snapshot())
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lifecycle: self.lifecycle,
            snake: self.snake.to_vec(),
            heading: self.snake.heading(),
            fruit: self.fruit.current(),
            score: self.score,
            tick: self.tick_count,
            cause: self.cause,
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    #[must_use]
    pub fn cause(&self) -> Option<TerminationCause> {
        self.cause
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }

    fn terminate(&mut self, cause: TerminationCause) {
        self.lifecycle = Lifecycle::Terminated;
        self.cause = Some(cause);
        info!(
            "session terminated on tick {} ({cause:?}), final score {}",
            self.tick_count, self.score
        );
    }
}
