//! Single-step state transition
//!
//! `tick` advances the round by exactly one cell of snake movement. The
//! driver owns pacing; nothing in here reads a clock.

use crate::consts::POINTS_PER_FOOD;

use super::config::CollisionPolicy;
use super::food::FoodKind;
use super::grid::{Cell, Direction};
use super::snake::StepOutcome;
use super::state::{EndCause, GamePhase, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction requested since the last tick, if any
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn turn(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
        }
    }
}

/// What a single tick did, for the driver and renderer
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    /// Phase after the tick
    pub phase: GamePhase,
    /// Food kind eaten this tick, if any
    pub eaten: Option<FoodKind>,
    /// End cause raised this tick, if any; under the `Restart` collision
    /// policy the state is already reset when this is reported
    pub ended: Option<EndCause>,
    /// Cell the tail released this tick, for incremental redraw
    pub vacated: Option<Cell>,
    /// Score as of this tick; on a policy restart, the score the round
    /// ended with
    pub score: u32,
}

/// Advance the round by one step
///
/// A terminated round is left untouched and reported as-is.
pub fn tick(state: &mut GameState, input: &TickInput) -> StepReport {
    if state.phase == GamePhase::Terminated {
        return StepReport {
            phase: state.phase,
            eaten: None,
            ended: None,
            vacated: None,
            score: state.score,
        };
    }

    if let Some(direction) = input.direction {
        state.snake.set_pending_direction(direction);
    }

    state.phase = GamePhase::Active;
    state.ticks += 1;

    let outcome = state.snake.step(&state.grid);
    let vacated = state.snake.last_vacated;

    match outcome {
        StepOutcome::Moved => {
            let mut eaten = None;
            if let Some(food) = state.food {
                if food.cell == state.snake.head() {
                    eaten = Some(food.kind);
                    state.score += POINTS_PER_FOOD;
                    state.snake.grow();
                    state.respawn_food();
                }
            }
            StepReport {
                phase: state.phase,
                eaten,
                ended: state.end_cause,
                vacated,
                score: state.score,
            }
        }
        StepOutcome::Collided => {
            let score = state.score;
            match state.collision_policy {
                CollisionPolicy::EndRound => {
                    state.phase = GamePhase::Terminated;
                    state.end_cause = Some(EndCause::SelfCollision);
                }
                CollisionPolicy::Restart => {
                    state.reset();
                }
            }
            StepReport {
                phase: state.phase,
                eaten: None,
                ended: Some(EndCause::SelfCollision),
                vacated,
                score,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::GameConfig;
    use crate::sim::food::Food;
    use crate::sim::state::GameState;

    fn active_state() -> GameState {
        GameState::new(&GameConfig::small(), 21)
    }

    #[test]
    fn test_first_tick_activates_and_moves_right() {
        let mut state = active_state();
        let start = state.snake.head();

        let report = tick(&mut state, &TickInput::default());
        assert_eq!(report.phase, GamePhase::Active);
        assert_eq!(state.snake.head(), Cell::new(start.col + 1, start.row));
        assert_eq!(report.vacated, Some(start));
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_eating_scores_and_respawns() {
        let mut state = active_state();
        let head = state.snake.head();
        let next = Cell::new(head.col + 1, head.row);
        state.food = Some(Food {
            cell: next,
            kind: FoodKind::Apple,
        });

        let report = tick(&mut state, &TickInput::default());
        assert_eq!(report.eaten, Some(FoodKind::Apple));
        assert_eq!(report.score, 1);
        assert_eq!(state.score, 1);

        // Fresh food, somewhere else
        let food = state.food.unwrap();
        assert_ne!(food.cell, next);
        assert!(!state.snake.occupies(food.cell));

        // The eat tick still releases the tail; growth lands next tick
        assert_eq!(report.vacated, Some(head));
        assert_eq!(state.snake.len(), 1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_terminated_round_ignores_ticks() {
        let mut state = active_state();
        state.phase = GamePhase::Terminated;
        state.end_cause = Some(EndCause::SelfCollision);
        let head = state.snake.head();
        let ticks = state.ticks;

        let report = tick(&mut state, &TickInput::turn(Direction::Up));
        assert_eq!(report.phase, GamePhase::Terminated);
        assert_eq!(report.ended, None);
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.ticks, ticks);
    }

    #[test]
    fn test_collision_ends_round_under_end_round_policy() {
        let mut state = active_state();
        // Hook-shaped body; (4,5) sits mid-body, one cell left of the head
        state.snake.body = [(5, 5), (5, 6), (4, 6), (4, 5), (3, 5)]
            .into_iter()
            .map(|(c, r)| Cell::new(c, r))
            .collect();
        state.snake.target_len = state.snake.body.len();
        state.snake.direction = Direction::Up;
        state.food = Some(Food {
            cell: Cell::new(0, 0),
            kind: FoodKind::Banana,
        });
        state.score = 3;

        let report = tick(&mut state, &TickInput::turn(Direction::Left));
        assert_eq!(report.ended, Some(EndCause::SelfCollision));
        assert_eq!(report.phase, GamePhase::Terminated);
        assert_eq!(report.score, 3);
        assert_eq!(state.end_cause, Some(EndCause::SelfCollision));

        // Absorbing until reset
        let after = tick(&mut state, &TickInput::default());
        assert_eq!(after.phase, GamePhase::Terminated);
    }

    #[test]
    fn test_collision_restarts_round_under_restart_policy() {
        let mut config = GameConfig::small();
        config.collision_policy = CollisionPolicy::Restart;
        let mut state = GameState::new(&config, 21);
        let fresh_food = state.food;

        state.snake.body = [(5, 5), (5, 6), (4, 6), (4, 5), (3, 5)]
            .into_iter()
            .map(|(c, r)| Cell::new(c, r))
            .collect();
        state.snake.target_len = state.snake.body.len();
        state.snake.direction = Direction::Up;
        state.score = 3;

        let report = tick(&mut state, &TickInput::turn(Direction::Left));
        assert_eq!(report.ended, Some(EndCause::SelfCollision));
        assert_eq!(report.phase, GamePhase::Ready);
        // The report keeps the dying round's score; the state starts over
        assert_eq!(report.score, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), state.grid.center());
        // Same seed, so the replayed round re-places the original food
        assert_eq!(state.food, fresh_food);
    }

    #[test]
    fn test_win_when_snake_fills_the_grid() {
        let mut config = GameConfig::new(2, 2);
        config.collision_policy = CollisionPolicy::EndRound;
        let mut state = GameState::new(&config, 5);

        // Three cells plus one pending growth cover the board once the head
        // takes the last free cell, where the food sits.
        state.snake.body = [(1, 1), (1, 0), (0, 0)]
            .into_iter()
            .map(|(c, r)| Cell::new(c, r))
            .collect();
        state.snake.target_len = 4;
        state.snake.direction = Direction::Down;
        state.food = Some(Food {
            cell: Cell::new(0, 1),
            kind: FoodKind::Orange,
        });

        let report = tick(&mut state, &TickInput::turn(Direction::Left));
        assert_eq!(report.eaten, Some(FoodKind::Orange));
        assert_eq!(report.ended, Some(EndCause::GridFull));
        assert_eq!(report.phase, GamePhase::Terminated);
        assert_eq!(state.end_cause, Some(EndCause::GridFull));
        assert_eq!(state.food, None);
        assert_eq!(state.snake.len(), 4);
    }
}
