//! Arena geometry and collision predicates
//!
//! Paddle hits use a circular zone around the paddle centre rather than the
//! drawn rectangle, gated by an engagement line so only a ball already in the
//! paddle's lane can be returned. A ball can therefore occasionally bounce
//! without touching the drawn paddle, or slip past at a shallow angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Paddle, Side};
use crate::rules::Rules;

/// Bounded playing field, origin at the centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub half_width: f32,
    pub half_height: f32,
    pub wall_bound: f32,
    pub out_of_bounds_x: f32,
    pub hit_radius: f32,
    pub engagement_x: f32,
}

impl Arena {
    pub fn from_rules(rules: &Rules) -> Self {
        Self {
            half_width: rules.arena_half_width,
            half_height: rules.arena_half_height,
            wall_bound: rules.wall_bound,
            out_of_bounds_x: rules.out_of_bounds_x,
            hit_radius: rules.paddle_hit_radius,
            engagement_x: rules.engagement_x,
        }
    }

    /// Ball is at or past the top or bottom wall
    #[inline]
    pub fn hits_wall(&self, pos: Vec2) -> bool {
        pos.y >= self.wall_bound || pos.y <= -self.wall_bound
    }

    /// Ball has crossed into `side`'s lane
    #[inline]
    pub fn in_lane(&self, pos: Vec2, side: Side) -> bool {
        match side {
            Side::Left => pos.x < -self.engagement_x,
            Side::Right => pos.x > self.engagement_x,
        }
    }

    /// The paddle on `side` returns a ball at `pos`
    pub fn paddle_returns(&self, pos: Vec2, paddle: &Paddle, side: Side) -> bool {
        pos.distance(paddle.pos()) < self.hit_radius && self.in_lane(pos, side)
    }

    /// The side whose paddle missed, once the ball is past an end line
    pub fn missed_by(&self, pos: Vec2) -> Option<Side> {
        if pos.x > self.out_of_bounds_x {
            Some(Side::Right)
        } else if pos.x < -self.out_of_bounds_x {
            Some(Side::Left)
        } else {
            None
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_rules(&Rules::default())
    }
}
