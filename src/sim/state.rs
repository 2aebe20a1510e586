//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. Entities are plain
//! data with small mutators; all cross-entity logic sits in
//! `collision` and `tick`.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Round ended with no lives left, waiting for restart input
    GameOver,
    /// Round ended with every brick destroyed, waiting for restart input
    LevelCleared,
}

impl GamePhase {
    /// True in either terminal state, where only restart input is honored
    pub fn is_round_over(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::LevelCleared)
    }
}

/// Observable side effect of a single simulation tick, in occurrence order.
///
/// The frontend maps these to audible cues and log lines; the simulation
/// itself never touches the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a side or top wall
    WallBounce,
    /// Ball deflected off the paddle
    PaddleHit,
    /// A brick was destroyed; `cue` selects one of the brick pitch cues
    BrickDestroyed { cue: usize },
    /// Ball exited the bottom edge and a life was lost
    BallLost,
    /// No lives remain; the round is over
    GameOver,
    /// Every brick is destroyed; the round is over
    LevelCleared,
}

/// Brick color tag, assigned by row (two rows per color, cycling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
}

/// Row color cycle, top row first
pub const ROW_COLORS: [BrickColor; 8] = [
    BrickColor::Red,
    BrickColor::Red,
    BrickColor::Orange,
    BrickColor::Orange,
    BrickColor::Yellow,
    BrickColor::Yellow,
    BrickColor::Green,
    BrickColor::Green,
];

/// A single brick in the grid
#[derive(Debug, Clone)]
pub struct Brick {
    pub rect: Rect,
    pub color: BrickColor,
    /// False once destroyed; destroyed bricks stay in the grid slot
    pub active: bool,
}

impl Brick {
    pub fn new(x: f32, y: f32, color: BrickColor) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            color,
            active: true,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal movement per tick
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    /// A full-width paddle centered at the bottom of the screen
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                SCREEN_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                PADDLE_Y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            speed: PADDLE_SPEED,
        }
    }

    /// Move one step left (-1.0) or right (1.0), clamped to the screen
    pub fn step(&mut self, direction: f32) {
        self.rect.x += direction * self.speed;
        self.rect.x = self.rect.x.clamp(0.0, SCREEN_WIDTH - self.rect.w);
    }

    /// Shrink the paddle, but don't let it get too small.
    ///
    /// Recenters horizontally so the shrink feels less jarring.
    pub fn shrink(&mut self) {
        self.rect.w = (self.rect.w - PADDLE_SHRINK_STEP).max(PADDLE_MIN_WIDTH);
        self.rect.set_center_x(SCREEN_WIDTH / 2.0);
    }

    /// Whether the paddle has already shrunk this round
    pub fn is_shrunk(&self) -> bool {
        self.rect.w < PADDLE_WIDTH
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    /// Signed velocity in pixels per tick
    pub vel: Vec2,
    /// False once the ball has exited past the bottom edge
    pub active: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// A ball at the serve position, heading up and to the right
    pub fn new() -> Self {
        Self {
            rect: Rect::new(BALL_START_X, BALL_START_Y, BALL_SIZE, BALL_SIZE),
            vel: Vec2::new(BALL_START_SPEED, -BALL_START_SPEED),
            active: true,
        }
    }

    /// Flip the vertical direction of travel
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Grow both velocity components in magnitude, preserving direction.
    ///
    /// A component of exactly zero counts as negative and drifts left/up.
    pub fn increase_speed(&mut self) {
        self.vel.x = if self.vel.x > 0.0 {
            self.vel.x + BALL_SPEED_INCREMENT
        } else {
            self.vel.x - BALL_SPEED_INCREMENT
        };
        self.vel.y = if self.vel.y > 0.0 {
            self.vel.y + BALL_SPEED_INCREMENT
        } else {
            self.vel.y - BALL_SPEED_INCREMENT
        };
    }

    /// Put the ball back at the serve position with the serve velocity
    pub fn reset(&mut self) {
        *self = Ball::new();
    }
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick grid; indices are stable for a whole round
    pub bricks: Vec<Brick>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh round: full grid, full lives, zero score
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Playing,
            lives: START_LIVES,
            score: 0,
            paddle: Paddle::new(),
            ball: Ball::new(),
            bricks: create_bricks(BRICK_ROWS, BRICK_COLS),
        }
    }

    /// Reinitialize everything for a new round
    pub fn restart(&mut self) {
        *self = GameState::new();
    }

    pub fn all_bricks_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.active)
    }
}

/// Build the brick grid in row-major order, starting below the HUD area
pub fn create_bricks(rows: usize, cols: usize) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f32 * (BRICK_WIDTH + BRICK_GAP) + 1.0;
            let y = row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_TOP_OFFSET;
            bricks.push(Brick::new(x, y, ROW_COLORS[row % ROW_COLORS.len()]));
        }
    }
    bricks
}
