//! Food placement
//!
//! Spawns food on a uniformly random free cell using the caller's RNG, so a
//! seeded generator reproduces the same sequence of placements.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use super::grid::{Cell, Grid};

/// Random draws before falling back to enumerating the free cells
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// What the snake eats; kinds differ only in presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Apple,
    Banana,
    Orange,
}

impl FoodKind {
    pub const ALL: [FoodKind; 3] = [FoodKind::Apple, FoodKind::Banana, FoodKind::Orange];

    /// Uniformly random kind
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A food item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

/// No free cell remains to place food on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free cell left on the grid")]
pub struct GridFull;

/// Place a food item on a uniformly random free cell
///
/// Rejection-samples the sparse case, then falls back to indexing into the
/// free cells in row-major order so the call stays bounded however crowded
/// the grid is. The fallback never iterates `occupied` itself; hash order is
/// not deterministic across runs.
pub fn spawn(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut impl Rng) -> Result<Food, GridFull> {
    let free = grid.cell_count().saturating_sub(occupied.len());
    if free == 0 {
        return Err(GridFull);
    }

    let kind = FoodKind::random(rng);

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let cell = Cell::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        if !occupied.contains(&cell) {
            return Ok(Food { cell, kind });
        }
    }

    let nth = rng.random_range(0..free);
    let cell = (0..grid.height)
        .flat_map(|row| (0..grid.width).map(move |col| Cell::new(col, row)))
        .filter(|cell| !occupied.contains(cell))
        .nth(nth)
        .ok_or(GridFull)?;

    Ok(Food { cell, kind })
}
