//! Core game configuration
//!
//! Explicit per-game configuration handed to [`GameState::new`]; nothing in
//! the simulation reads process-wide state.
//!
//! [`GameState::new`]: super::state::GameState::new

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

use super::grid::{EdgePolicy, Grid};

/// What a self-collision does to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// The round terminates; the caller decides what happens next
    #[default]
    EndRound,
    /// Snake, score, and food are re-initialized in place and play continues
    Restart,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::EndRound => "end-round",
            CollisionPolicy::Restart => "restart",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "end-round" | "end" => Some(CollisionPolicy::EndRound),
            "restart" => Some(CollisionPolicy::Restart),
            _ => None,
        }
    }
}

/// Per-game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells
    pub grid_width: u16,
    /// Board height in cells
    pub grid_height: u16,
    /// Edge crossing behavior
    pub edge_policy: EdgePolicy,
    /// Self-collision behavior
    pub collision_policy: CollisionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            edge_policy: EdgePolicy::Wrap,
            collision_policy: CollisionPolicy::EndRound,
        }
    }
}

impl GameConfig {
    pub fn new(grid_width: u16, grid_height: u16) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Self::default()
        }
    }

    /// Small board for quick games and tests
    pub fn small() -> Self {
        Self::new(16, 12)
    }

    /// The grid this configuration describes
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height, self.edge_policy)
    }
}
