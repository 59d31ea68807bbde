//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One discrete step per tick, no wall-clock time
//! - No rendering or platform dependencies

pub mod arena;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use state::{Ball, MatchState, Paddle, Scoreboard, Side};
pub use tick::{MatchEvent, TickOutcome, tick};
