use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Field};

/// Draws a fruit cell uniformly from the grid.
///
/// Both axes are drawn independently and stop one cell short of the far
/// edge, so the last column and the last row never hold fruit. The snake
/// body is not consulted.
#[must_use]
pub fn spawn_cell<R: Rng + ?Sized>(rng: &mut R, field: Field) -> Cell {
    let columns = field.columns() - 1;
    let rows = field.rows() - 1;

    Cell {
        x: rng.gen_range(0..columns.max(1)) * field.cell_size,
        y: rng.gen_range(0..rows.max(1)) * field.cell_size,
    }
}

/// Owns the single active fruit and the RNG that places it.
#[derive(Debug, Clone)]
pub struct FruitSpawner {
    field: Field,
    rng: StdRng,
    current: Option<Cell>,
    draws: u64,
}

impl FruitSpawner {
    /// Creates a spawner with no fruit placed yet.
    #[must_use]
    pub fn new(field: Field, rng: StdRng) -> Self {
        Self {
            field,
            rng,
            current: None,
            draws: 0,
        }
    }

    #[must_use]
    pub fn with_seed(field: Field, seed: u64) -> Self {
        Self::new(field, StdRng::seed_from_u64(seed))
    }

    /// Replaces the active fruit with a fresh independent draw.
    pub fn spawn(&mut self) -> Cell {
        let cell = spawn_cell(&mut self.rng, self.field);
        self.current = Some(cell);
        self.draws += 1;
        debug!("fruit spawned at ({}, {})", cell.x, cell.y);
        cell
    }

    /// Puts the fruit on a chosen cell without consuming a random draw.
    pub fn place(&mut self, cell: Cell) {
        self.current = Some(cell);
    }

    /// Exact comparison against the active fruit.
    #[must_use]
    pub fn matches(&self, cell: Cell) -> bool {
        self.current == Some(cell)
    }

    #[must_use]
    pub fn current(&self) -> Option<Cell> {
        self.current
    }

    /// Number of `spawn` calls so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
