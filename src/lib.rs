//! Paddle Duel - a two-player paddle-and-ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `session`: Playing/GameOver state machine and command queue
//! - `rules`: Match constants, loadable from JSON
//! - `view`: Read-only snapshot the presentation layer draws from
//! - `renderer`: Terminal canvas drawing
//! - `platform`: Key bindings

pub mod error;
pub mod platform;
pub mod renderer;
pub mod rules;
pub mod session;
pub mod sim;
pub mod view;

pub use error::{GameError, Result};
pub use rules::Rules;
pub use session::{Command, GamePhase, GameSession};
pub use sim::{Ball, MatchEvent, MatchState, Paddle, Side, TickOutcome};
pub use view::SessionView;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (half extents, origin at the centre)
    pub const ARENA_HALF_WIDTH: f32 = 400.0;
    pub const ARENA_HALF_HEIGHT: f32 = 300.0;
    /// Ball bounces once |y| reaches this
    pub const WALL_BOUND: f32 = 280.0;
    /// Ball is out once |x| exceeds this
    pub const OUT_OF_BOUNDS_X: f32 = 380.0;

    /// Paddle defaults
    pub const PADDLE_START_X: f32 = 350.0;
    pub const PADDLE_START_Y: f32 = 0.0;
    pub const PADDLE_MOVE_DISTANCE: f32 = 20.0;
    pub const PADDLE_TOP_LIMIT: f32 = 250.0;
    pub const PADDLE_BOTTOM_LIMIT: f32 = -240.0;
    /// Drawn size only; collision uses the hit radius
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Circular hit zone around the paddle centre
    pub const PADDLE_HIT_RADIUS: f32 = 50.0;
    /// Ball must be past this |x| for a paddle to return it
    pub const ENGAGEMENT_X: f32 = 320.0;

    /// Ball defaults
    pub const BALL_VELOCITY_X: f32 = 10.0;
    pub const BALL_VELOCITY_Y: f32 = 10.0;
    /// Seconds between ticks; lower is faster
    pub const BALL_INITIAL_SPEED: f32 = 0.1;
    /// Slowest allowed starting speed (seconds between ticks)
    pub const MAX_INITIAL_SPEED: f32 = 10.0;
    /// Applied to speed on every paddle return (multiplicative)
    pub const SPEED_SHRINK: f32 = 0.9;
    /// Speed never drops below this (0 disables the floor)
    pub const SPEED_FLOOR: f32 = 0.01;

    /// Points needed to win the match
    pub const WIN_SCORE: u32 = 1;
}
