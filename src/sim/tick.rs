//! Per-tick simulation step
//!
//! `tick` advances the round by exactly one 60 Hz step: paddle movement,
//! ball motion, collision resolution, then the round state machine. It
//! is pure with respect to the platform; side effects come back to the
//! caller as `GameEvent`s.

use crate::consts::*;

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left movement key currently held
    pub left: bool,
    /// Right movement key currently held
    pub right: bool,
    /// Restart key pressed this tick; honored only once a round is over
    pub restart: bool,
}

/// Advance the game by one tick, returning the events it produced.
///
/// In a round-over phase the simulation is inert: nothing moves, and the
/// only recognized input is restart, which begins a fresh round.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_round_over() {
        if input.restart {
            state.restart();
        }
        return events;
    }

    if input.left {
        state.paddle.step(-1.0);
    }
    if input.right {
        state.paddle.step(1.0);
    }

    collision::move_ball(&mut state.ball, &mut events);
    collision::resolve_paddle(&mut state.ball, &state.paddle, &mut events);
    collision::resolve_bricks(state, &mut events);

    if !state.ball.active {
        state.lives -= 1;
        events.push(GameEvent::BallLost);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
        } else {
            state.ball.reset();
        }
    }

    // Checked after brick resolution, independent of remaining lives
    if state.all_bricks_cleared() {
        state.phase = GamePhase::LevelCleared;
        events.push(GameEvent::LevelCleared);
    }

    debug_assert!(state.lives <= START_LIVES);
    debug_assert!(state.paddle.rect.left() >= 0.0);
    debug_assert!(state.paddle.rect.right() <= SCREEN_WIDTH);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use glam::Vec2;
    use proptest::prelude::*;

    /// Park the ball so that after one tick of movement it sits at (x, y)
    fn park_ball(state: &mut GameState, x: f32, y: f32, vel: Vec2) {
        state.ball.rect = Rect::new(x - vel.x, y - vel.y, BALL_SIZE, BALL_SIZE);
        state.ball.vel = vel;
    }

    #[test]
    fn test_playing_tick_moves_ball() {
        let mut state = GameState::new();
        let start = state.ball.rect;

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.rect.x, start.x + BALL_START_SPEED);
        assert_eq!(state.ball.rect.y, start.y - BALL_START_SPEED);
        assert!(events.is_empty());
    }

    #[test]
    fn test_held_keys_move_paddle() {
        let mut state = GameState::new();
        let start_x = state.paddle.rect.x;

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        assert_eq!(state.paddle.rect.x, start_x - PADDLE_SPEED);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right);
        assert_eq!(state.paddle.rect.x, start_x);

        // Both held: the moves cancel out
        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &both);
        assert_eq!(state.paddle.rect.x, start_x);
    }

    #[test]
    fn test_life_loss_resets_ball() {
        let mut state = GameState::new();
        park_ball(&mut state, 100.0, SCREEN_HEIGHT - BALL_SIZE + 2.0, Vec2::new(0.0, 4.0));

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, START_LIVES - 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.ball.active);
        assert_eq!(state.ball.rect.x, BALL_START_X);
        assert_eq!(state.ball.rect.y, BALL_START_Y);
        assert_eq!(events, vec![GameEvent::BallLost]);
    }

    #[test]
    fn test_game_over_on_last_life() {
        let mut state = GameState::new();
        state.lives = 1;
        park_ball(&mut state, 100.0, SCREEN_HEIGHT - BALL_SIZE + 2.0, Vec2::new(0.0, 4.0));

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(events, vec![GameEvent::BallLost, GameEvent::GameOver]);

        // The dead round is inert: the ball no longer moves
        let rect = state.ball.rect;
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.rect, rect);
        assert!(events.is_empty());
    }

    #[test]
    fn test_round_over_ignores_movement_input() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        let paddle_x = state.paddle.rect.x;

        let input = TickInput {
            left: true,
            right: false,
            restart: false,
        };
        let events = tick(&mut state, &input);

        assert_eq!(state.paddle.rect.x, paddle_x);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.is_empty());
    }

    #[test]
    fn test_restart_reinitializes_round() {
        let mut state = GameState::new();
        state.lives = 0;
        state.score = 730;
        state.phase = GamePhase::GameOver;
        state.paddle.shrink();
        for brick in &mut state.bricks {
            brick.active = false;
        }
        state.ball.active = false;

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.score, 0);
        assert!(state.bricks.iter().all(|b| b.active));
        assert_eq!(state.paddle.rect.w, PADDLE_WIDTH);
        assert!(state.ball.active);
        assert_eq!(state.ball.rect.x, BALL_START_X);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new();
        state.score = 40;

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.score, 40);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_level_cleared_on_last_brick() {
        let mut state = GameState::new();
        for brick in state.bricks.iter_mut().skip(1) {
            brick.active = false;
        }
        // Heading up into the last remaining brick (top-left of the grid)
        park_ball(&mut state, 9.0, 64.0, Vec2::new(4.0, -4.0));

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::LevelCleared);
        assert_eq!(
            events,
            vec![
                GameEvent::BrickDestroyed { cue: 0 },
                GameEvent::LevelCleared
            ]
        );
    }

    #[test]
    fn test_paddle_shrinks_once_per_round() {
        let mut state = GameState::new();
        // Top two rows cleared except the very first brick
        for brick in state.bricks.iter_mut().take(2 * BRICK_COLS).skip(1) {
            brick.active = false;
        }

        park_ball(&mut state, 9.0, 64.0, Vec2::new(4.0, -4.0));
        tick(&mut state, &TickInput::default());

        assert!(state.paddle.is_shrunk());
        let width_after_first = state.paddle.rect.w;
        assert_eq!(width_after_first, PADDLE_WIDTH - PADDLE_SHRINK_STEP);

        // Destroying a brick in the third row must not shrink again
        park_ball(&mut state, 9.0, 98.0, Vec2::new(0.0, -4.0));
        let events = tick(&mut state, &TickInput::default());

        assert!(matches!(events[0], GameEvent::BrickDestroyed { .. }));
        assert_eq!(state.paddle.rect.w, width_after_first);
    }

    #[test]
    fn test_score_accumulates_per_brick() {
        let mut state = GameState::new();

        park_ball(&mut state, 9.0, 64.0, Vec2::new(4.0, -4.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, POINTS_PER_BRICK);

        park_ball(&mut state, 100.0, 64.0, Vec2::new(4.0, -4.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 2 * POINTS_PER_BRICK);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..300)
        ) {
            let mut state = GameState::new();
            for (left, right) in moves {
                let input = TickInput { left, right, restart: false };
                tick(&mut state, &input);
                prop_assert!(state.paddle.rect.left() >= 0.0);
                prop_assert!(state.paddle.rect.right() <= SCREEN_WIDTH);
            }
        }

        #[test]
        fn prop_ball_stays_inside_side_walls(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..600)
        ) {
            let mut state = GameState::new();
            for (left, right) in moves {
                let input = TickInput { left, right, restart: false };
                tick(&mut state, &input);
                if state.ball.active {
                    prop_assert!(state.ball.rect.left() > 0.0);
                    prop_assert!(state.ball.rect.right() < SCREEN_WIDTH);
                }
            }
        }
    }
}
