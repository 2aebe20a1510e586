//! Collision detection and response
//!
//! Resolves the ball against the screen walls, the paddle, and the brick
//! grid. Each resolver mutates the entities directly and pushes the
//! audible-cue events it produces onto the tick's event list.

use crate::consts::*;

use super::state::{Ball, Brick, GameEvent, GameState, Paddle};

/// Advance the ball one tick and bounce it off the side and top walls.
///
/// A bounce flips the velocity sign on that axis and nudges the position
/// by twice the new velocity so the ball can't stick inside a wall over
/// consecutive ticks. Corner hits resolve both axes independently.
/// Crossing the bottom edge deactivates the ball instead of bouncing.
pub fn move_ball(ball: &mut Ball, events: &mut Vec<GameEvent>) {
    if !ball.active {
        return;
    }

    ball.rect.x += ball.vel.x;
    ball.rect.y += ball.vel.y;

    if ball.rect.left() <= 0.0 || ball.rect.right() >= SCREEN_WIDTH {
        ball.vel.x = -ball.vel.x;
        ball.rect.x += ball.vel.x * 2.0;
        events.push(GameEvent::WallBounce);
    }
    if ball.rect.top() <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.rect.y += ball.vel.y * 2.0;
        events.push(GameEvent::WallBounce);
    }

    // Lost past the bottom edge; the round logic reacts to the flag.
    if ball.rect.bottom() >= SCREEN_HEIGHT {
        ball.active = false;
    }
}

/// Deflect a downward-moving ball off the paddle.
///
/// Gated on `vel.y > 0` so an overlapping ball is only deflected once.
/// The horizontal velocity is overwritten from the hit offset (clamped),
/// never accumulated, and the vertical velocity is sent upward.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, events: &mut Vec<GameEvent>) {
    if !ball.active || ball.vel.y <= 0.0 {
        return;
    }
    if !ball.rect.overlaps(&paddle.rect) {
        return;
    }

    let offset = ball.rect.center_x() - paddle.rect.center_x();
    ball.vel.x = (offset * PADDLE_STEER_FACTOR).clamp(-BALL_MAX_SPEED_X, BALL_MAX_SPEED_X);
    ball.bounce_y();
    events.push(GameEvent::PaddleHit);
}

/// Destroy the first active brick overlapping the ball, if any.
///
/// Bricks are scanned in grid order (row-major), and at most one brick
/// is resolved per tick; ties among simultaneously-overlapping bricks go
/// to the earlier slot. A destroyed brick scores, flips the ball's
/// vertical direction, speeds the ball up, and may trigger the one-time
/// paddle shrink once the top two rows are gone.
pub fn resolve_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.ball.active {
        return;
    }

    let brick_count = state.bricks.len();
    let hit = state
        .bricks
        .iter()
        .position(|b| b.active && state.ball.rect.overlaps(&b.rect));
    let Some(hit) = hit else {
        return;
    };

    state.bricks[hit].active = false;
    state.score += POINTS_PER_BRICK;
    state.ball.bounce_y();
    state.ball.increase_speed();
    events.push(GameEvent::BrickDestroyed {
        cue: cue_index(hit, brick_count),
    });

    if top_rows_cleared(&state.bricks) && !state.paddle.is_shrunk() {
        state.paddle.shrink();
    }
}

/// Map a brick's flat grid index onto the available pitch cues.
///
/// Bucket size is the grid size floor-divided by the cue count. The grid
/// is not a clean multiple of the cue count, so buckets do not line up
/// with row boundaries; the clamp folds the overflow onto the last cue.
pub fn cue_index(brick_index: usize, brick_count: usize) -> usize {
    let bucket = (brick_count / BRICK_CUE_COUNT).max(1);
    (brick_index / bucket).min(BRICK_CUE_COUNT - 1)
}

/// True when every brick in the top two rows has been destroyed
pub fn top_rows_cleared(bricks: &[Brick]) -> bool {
    let cutoff = 2.0 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_TOP_OFFSET;
    bricks
        .iter()
        .filter(|b| b.rect.top() < cutoff)
        .all(|b| !b.active)
}
