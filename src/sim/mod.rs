//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! headless:
//! - Fixed timestep only (one `tick` call per 60 Hz step)
//! - Stable iteration order (row-major brick grid)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Ball, Brick, BrickColor, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{tick, TickInput};
