//! The snake entity
//!
//! An ordered cell sequence with the head at the front. Movement, growth
//! bookkeeping, and self-collision detection live here; what a collision
//! means for the round is decided by the state machine.

use std::collections::VecDeque;

use super::grid::{Cell, Direction, Grid};

/// Facing a fresh snake starts with
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Result of advancing the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The head moved into a free cell
    Moved,
    /// The head landed on the body
    Collided,
}

/// The player's snake
#[derive(Debug, Clone)]
pub struct Snake {
    /// Body cells, head first; never empty
    pub body: VecDeque<Cell>,
    /// Length the body is growing toward; exceeds `body.len()` right after eating
    pub target_len: usize,
    /// Current facing
    pub direction: Direction,
    /// Direction requested for the next step, if any
    pub pending: Option<Direction>,
    /// Cell released by the most recent step, `None` on a growth tick
    pub last_vacated: Option<Cell>,
}

impl Snake {
    /// Single-cell snake at `start`, facing [`INITIAL_DIRECTION`]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(start);
        Self {
            body,
            target_len: 1,
            direction: INITIAL_DIRECTION,
            pending: None,
            last_vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells, head first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Whether `cell` is covered by the body
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Request a direction change for the next step
    ///
    /// A request that would reverse straight into the neck is dropped; a later
    /// request within the same tick overwrites an earlier one.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = Some(direction);
    }

    /// Advance one cell in the facing direction, applying any pending turn
    /// first
    ///
    /// The tail is released unless the body is still short of `target_len`.
    /// Collision is checked after the tail release, so moving the head into
    /// the cell the tail just left is legal. After `Collided` the body holds
    /// the overlapping head; callers must not step it again.
    pub fn step(&mut self, grid: &Grid) -> StepOutcome {
        if let Some(pending) = self.pending.take() {
            self.direction = pending;
        }

        let new_head = grid.step_from(self.head(), self.direction);
        self.body.push_front(new_head);

        self.last_vacated = if self.body.len() > self.target_len {
            self.body.pop_back()
        } else {
            None
        };

        if self.body.iter().skip(1).any(|&cell| cell == new_head) {
            StepOutcome::Collided
        } else {
            StepOutcome::Moved
        }
    }

    /// Raise the target length by one; the tail is retained on the next step
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Back to a single cell at the grid center, facing [`INITIAL_DIRECTION`]
    pub fn reset(&mut self, grid: &Grid) {
        self.body.clear();
        self.body.push_back(grid.center());
        self.target_len = 1;
        self.direction = INITIAL_DIRECTION;
        self.pending = None;
        self.last_vacated = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::EdgePolicy;

    fn grid() -> Grid {
        Grid::new(10, 8, EdgePolicy::Wrap)
    }

    fn snake_from(cells: &[(u16, u16)], direction: Direction) -> Snake {
        let body: VecDeque<Cell> = cells.iter().map(|&(c, r)| Cell::new(c, r)).collect();
        let target_len = body.len();
        Snake {
            body,
            target_len,
            direction,
            pending: None,
            last_vacated: None,
        }
    }

    #[test]
    fn test_step_moves_head_and_releases_tail() {
        let grid = grid();
        let mut snake = snake_from(&[(4, 4), (3, 4), (2, 4)], Direction::Right);

        let outcome = snake.step(&grid);
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(snake.head(), Cell::new(5, 4));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.last_vacated, Some(Cell::new(2, 4)));
    }

    #[test]
    fn test_growth_retains_tail_on_next_step() {
        let grid = grid();
        let mut snake = snake_from(&[(4, 4), (3, 4)], Direction::Right);

        snake.grow();
        let outcome = snake.step(&grid);
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.last_vacated, None);

        // Target reached, the step after releases the tail again
        snake.step(&grid);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.last_vacated, Some(Cell::new(3, 4)));
    }

    #[test]
    fn test_reverse_request_is_dropped() {
        let grid = grid();
        let mut snake = snake_from(&[(4, 4), (3, 4)], Direction::Right);

        snake.set_pending_direction(Direction::Left);
        assert_eq!(snake.pending, None);

        snake.step(&grid);
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn test_last_turn_request_wins() {
        let grid = grid();
        let mut snake = snake_from(&[(4, 4), (3, 4)], Direction::Right);

        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        snake.step(&grid);
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head(), Cell::new(4, 5));
    }

    #[test]
    fn test_moving_into_just_vacated_tail_is_legal() {
        // 2x2 loop: head (4,4), tail (4,5); turning down chases the tail
        // into the cell it releases this same step.
        let grid = grid();
        let mut snake = snake_from(&[(4, 4), (5, 4), (5, 5), (4, 5)], Direction::Left);

        snake.set_pending_direction(Direction::Down);
        let outcome = snake.step(&grid);
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(snake.head(), Cell::new(4, 5));
    }

    #[test]
    fn test_collision_with_body() {
        // C-shaped body with the tail at (4,5), one cell left of the head.
        let grid = grid();
        let mut snake = snake_from(
            &[(5, 5), (5, 6), (5, 7), (4, 7), (4, 6), (4, 5)],
            Direction::Up,
        );

        // While growing, the tail does not move, so turning left runs the
        // head straight into it.
        snake.grow();
        snake.set_pending_direction(Direction::Left);
        let outcome = snake.step(&grid);
        assert_eq!(outcome, StepOutcome::Collided);
        assert_eq!(snake.head(), Cell::new(4, 5));
    }

    #[test]
    fn test_chasing_the_tail_without_growth_is_legal() {
        // Same C shape, but with the tail free to move: turning left lands
        // on (4,5) exactly as the tail releases it.
        let grid = grid();
        let mut snake = snake_from(
            &[(5, 5), (5, 6), (5, 7), (4, 7), (4, 6), (4, 5)],
            Direction::Up,
        );

        snake.set_pending_direction(Direction::Left);
        let outcome = snake.step(&grid);
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(snake.head(), Cell::new(4, 5));
        assert_eq!(snake.last_vacated, Some(Cell::new(4, 5)));
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let grid = grid();
        let mut snake = snake_from(&[(4, 4), (3, 4), (2, 4)], Direction::Up);
        snake.set_pending_direction(Direction::Left);

        snake.reset(&grid);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), grid.center());
        assert_eq!(snake.direction, INITIAL_DIRECTION);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.last_vacated, None);
    }

    #[test]
    fn test_single_cell_snake_steps_freely() {
        let grid = grid();
        let mut snake = Snake::new(Cell::new(0, 0));

        assert_eq!(snake.step(&grid), StepOutcome::Moved);
        assert_eq!(snake.head(), Cell::new(1, 0));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.last_vacated, Some(Cell::new(0, 0)));
    }
}
