//! Grid coordinate space and edge behavior
//!
//! The arena is a rectangle of cells addressed by (col, row), origin at the
//! top-left, rows growing downward. Coordinates that leave the rectangle are
//! folded back in according to the configured edge policy.

use serde::{Deserialize, Serialize};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: u16,
    pub row: u16,
}

impl Cell {
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }
}

/// A unit movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column/row delta for one step (rows grow downward)
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// What happens to a coordinate that crosses a grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Toroidal topology: both axes wrap modulo the grid dimensions
    #[default]
    Wrap,
    /// A coordinate strictly past an edge snaps to the opposite boundary
    Teleport,
}

impl EdgePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgePolicy::Wrap => "wrap",
            EdgePolicy::Teleport => "teleport",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wrap" | "torus" => Some(EdgePolicy::Wrap),
            "teleport" => Some(EdgePolicy::Teleport),
            _ => None,
        }
    }
}

/// The play field: dimensions plus edge behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
    pub edge_policy: EdgePolicy,
}

impl Grid {
    pub fn new(width: u16, height: u16, edge_policy: EdgePolicy) -> Self {
        Self {
            width,
            height,
            edge_policy,
        }
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// The cell at (or just left/above) the middle of the grid
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Fold a possibly out-of-bounds coordinate pair back onto the grid
    ///
    /// For one-cell steps the two policies agree; they differ only for
    /// coordinates more than one cell out, which `Wrap` treats modularly
    /// while `Teleport` snaps straight to the opposite boundary.
    pub fn wrap(&self, col: i32, row: i32) -> Cell {
        let w = self.width as i32;
        let h = self.height as i32;
        match self.edge_policy {
            EdgePolicy::Wrap => Cell::new(col.rem_euclid(w) as u16, row.rem_euclid(h) as u16),
            EdgePolicy::Teleport => {
                let col = if col < 0 {
                    w - 1
                } else if col >= w {
                    0
                } else {
                    col
                };
                let row = if row < 0 {
                    h - 1
                } else if row >= h {
                    0
                } else {
                    row
                };
                Cell::new(col as u16, row as u16)
            }
        }
    }

    /// The neighbor of `cell` one step in `direction`, folded per the edge policy
    pub fn step_from(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.col as i32 + dx, cell.row as i32 + dy)
    }
}
