//! Match rules
//!
//! Every tunable constant of a match, fixed when a session is built.
//! Defaults come from [`crate::consts`]; a JSON file may override any subset.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Rules a match is played under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    // === Arena ===
    pub arena_half_width: f32,
    pub arena_half_height: f32,
    /// Ball bounces off the top/bottom once |y| reaches this
    pub wall_bound: f32,
    /// A point is scored once |x| exceeds this
    pub out_of_bounds_x: f32,

    // === Paddles ===
    /// Paddles start at (-x, y) and (x, y)
    pub paddle_start: Vec2,
    pub paddle_move_distance: f32,
    pub paddle_top_limit: f32,
    pub paddle_bottom_limit: f32,
    pub paddle_hit_radius: f32,
    pub engagement_x: f32,

    // === Ball ===
    pub ball_velocity: Vec2,
    /// Seconds between ticks at serve
    pub initial_speed: f32,
    pub speed_shrink: f32,
    /// Lowest tick delay a rally can reach; 0 keeps shrinking forever
    pub speed_floor: f32,

    // === Scoring ===
    pub win_score: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            arena_half_width: ARENA_HALF_WIDTH,
            arena_half_height: ARENA_HALF_HEIGHT,
            wall_bound: WALL_BOUND,
            out_of_bounds_x: OUT_OF_BOUNDS_X,

            paddle_start: Vec2::new(PADDLE_START_X, PADDLE_START_Y),
            paddle_move_distance: PADDLE_MOVE_DISTANCE,
            paddle_top_limit: PADDLE_TOP_LIMIT,
            paddle_bottom_limit: PADDLE_BOTTOM_LIMIT,
            paddle_hit_radius: PADDLE_HIT_RADIUS,
            engagement_x: ENGAGEMENT_X,

            ball_velocity: Vec2::new(BALL_VELOCITY_X, BALL_VELOCITY_Y),
            initial_speed: BALL_INITIAL_SPEED,
            speed_shrink: SPEED_SHRINK,
            speed_floor: SPEED_FLOOR,

            win_score: WIN_SCORE,
        }
    }
}

impl Rules {
    /// Parse rules from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rules from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let rules = Self::from_json(&json)?;
        log::info!("Loaded rules from {}", path.display());
        Ok(rules)
    }

    /// Same rules without a speed floor, so rallies keep accelerating
    pub fn unbounded_speed(mut self) -> Self {
        self.speed_floor = 0.0;
        self
    }

    /// Reject rule sets the simulation cannot run under
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must fail too
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: String) -> Result<()> {
            Err(GameError::InvalidRules(msg))
        }

        if !(self.initial_speed > 0.0 && self.initial_speed <= MAX_INITIAL_SPEED) {
            return invalid(format!(
                "initial_speed must be in (0, {MAX_INITIAL_SPEED}], got {}",
                self.initial_speed
            ));
        }
        if !(self.speed_shrink > 0.0 && self.speed_shrink <= 1.0) {
            return invalid(format!("speed_shrink must be in (0, 1], got {}", self.speed_shrink));
        }
        if self.speed_floor < 0.0 || self.speed_floor > self.initial_speed {
            return invalid(format!(
                "speed_floor must be in [0, initial_speed], got {}",
                self.speed_floor
            ));
        }
        if self.paddle_bottom_limit >= self.paddle_top_limit {
            return invalid(format!(
                "paddle_bottom_limit ({}) must be below paddle_top_limit ({})",
                self.paddle_bottom_limit, self.paddle_top_limit
            ));
        }
        if !(self.paddle_move_distance > 0.0) {
            return invalid("paddle_move_distance must be > 0".to_string());
        }
        if !(self.paddle_hit_radius > 0.0) {
            return invalid("paddle_hit_radius must be > 0".to_string());
        }
        if self.win_score == 0 {
            return invalid("win_score must be at least 1".to_string());
        }
        Ok(())
    }
}
