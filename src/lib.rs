//! Brickout - a classic single-screen brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, round state)
//! - `audio`: Procedurally synthesized sound cues

pub mod audio;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum simulation steps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 15.0;
    /// Gap between neighboring bricks
    pub const BRICK_GAP: f32 = 2.0;
    /// Vertical offset of the first brick row from the top of the screen
    pub const BRICK_TOP_OFFSET: f32 = 50.0;
    pub const BRICK_ROWS: usize = 8;
    /// Columns that fit the screen: floor(SCREEN_WIDTH / (BRICK_WIDTH + BRICK_GAP))
    pub const BRICK_COLS: usize = 14;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal movement per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Paddle never shrinks below this width
    pub const PADDLE_MIN_WIDTH: f32 = 20.0;
    /// Width lost when the paddle shrinks
    pub const PADDLE_SHRINK_STEP: f32 = 10.0;
    /// Vertical position of the paddle (top edge)
    pub const PADDLE_Y: f32 = SCREEN_HEIGHT - 30.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Per-axis speed at serve, pixels per tick
    pub const BALL_START_SPEED: f32 = 4.0;
    /// Magnitude added to each velocity axis per destroyed brick
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;
    /// Horizontal velocity clamp after a paddle deflection
    pub const BALL_MAX_SPEED_X: f32 = 8.0;
    /// Paddle-relative steering: horizontal velocity per pixel of hit offset
    pub const PADDLE_STEER_FACTOR: f32 = 0.2;
    /// Ball start position (top-left of rect)
    pub const BALL_START_X: f32 = SCREEN_WIDTH / 2.0;
    pub const BALL_START_Y: f32 = SCREEN_HEIGHT - 50.0;

    /// Round defaults
    pub const START_LIVES: u32 = 3;
    pub const POINTS_PER_BRICK: u32 = 10;

    /// Number of distinct brick pitch cues
    pub const BRICK_CUE_COUNT: usize = 6;
}
