//! Match state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rules::Rules;

/// Which half of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// -1 for left, +1 for right (direction along X)
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A vertically moving paddle
///
/// The position is only reachable through the move/reset methods, which keep
/// `pos.y` inside `[bottom_limit, top_limit]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pos: Vec2,
    bottom_limit: f32,
    top_limit: f32,
    move_distance: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, bottom_limit: f32, top_limit: f32, move_distance: f32) -> Self {
        let mut paddle = Self {
            pos: Vec2::ZERO,
            bottom_limit,
            top_limit,
            move_distance,
        };
        paddle.reset(pos.x, pos.y);
        paddle
    }

    /// Paddle at its starting position for `side`
    pub fn for_side(side: Side, rules: &Rules) -> Self {
        Self::new(
            Self::start_position(side, rules),
            rules.paddle_bottom_limit,
            rules.paddle_top_limit,
            rules.paddle_move_distance,
        )
    }

    pub fn start_position(side: Side, rules: &Rules) -> Vec2 {
        Vec2::new(side.sign() * rules.paddle_start.x, rules.paddle_start.y)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// (bottom, top) range the paddle centre may occupy
    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        (self.bottom_limit, self.top_limit)
    }

    /// Move up one step; no-op once at the top limit
    pub fn move_up(&mut self) {
        if self.pos.y >= self.top_limit {
            return;
        }
        self.pos.y = (self.pos.y + self.move_distance).min(self.top_limit);
    }

    /// Move down one step; no-op once at the bottom limit
    pub fn move_down(&mut self) {
        if self.pos.y <= self.bottom_limit {
            return;
        }
        self.pos.y = (self.pos.y - self.move_distance).max(self.bottom_limit);
    }

    /// Put the paddle at (x, y), with y held inside the vertical bounds
    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y.clamp(self.bottom_limit, self.top_limit));
    }
}

/// The ball
///
/// `vel` is the fixed per-tick displacement; `speed` is the delay between
/// ticks in seconds and shrinks on every paddle return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pos: Vec2,
    vel: Vec2,
    speed: f32,
    initial_speed: f32,
    speed_shrink: f32,
    speed_floor: f32,
}

impl Ball {
    /// Ball at the centre, moving with the serve velocity
    pub fn new(rules: &Rules) -> Self {
        Self::with_motion(Vec2::ZERO, rules.ball_velocity, rules)
    }

    /// Ball at an arbitrary position and velocity, at initial speed
    pub fn with_motion(pos: Vec2, vel: Vec2, rules: &Rules) -> Self {
        Self {
            pos,
            vel,
            speed: rules.initial_speed,
            initial_speed: rules.initial_speed,
            speed_shrink: rules.speed_shrink,
            speed_floor: rules.speed_floor,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn initial_speed(&self) -> f32 {
        self.initial_speed
    }

    /// Translate by one tick of velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Top/bottom wall bounce
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Paddle return: reverse X and shorten the tick delay
    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
        self.speed = (self.speed * self.speed_shrink).max(self.speed_floor);
        // Without a floor the product may underflow to zero
        if self.speed <= 0.0 {
            self.speed = f32::MIN_POSITIVE;
        }
    }

    /// After a point: back to the origin with X reversed, at serve speed
    pub fn reset_to_center(&mut self) {
        self.vel.x = -self.vel.x;
        self.recenter();
    }

    /// Back to the origin at serve speed, direction unchanged
    pub fn recenter(&mut self) {
        self.pos = Vec2::ZERO;
        self.speed = self.initial_speed;
    }
}

/// Points for both sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    left: u32,
    right: u32,
    win_score: u32,
}

impl Scoreboard {
    pub fn new(win_score: u32) -> Self {
        Self {
            left: 0,
            right: 0,
            win_score,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side that has reached the win score, if any
    pub fn winner(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.score(side) >= self.win_score)
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Everything one match simulates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) rules: Rules,
    pub(crate) left: Paddle,
    pub(crate) right: Paddle,
    pub(crate) ball: Ball,
    pub(crate) scores: Scoreboard,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl MatchState {
    pub fn new(rules: Rules) -> Self {
        Self {
            left: Paddle::for_side(Side::Left, &rules),
            right: Paddle::for_side(Side::Right, &rules),
            ball: Ball::new(&rules),
            scores: Scoreboard::new(rules.win_score),
            time_ticks: 0,
            rules,
        }
    }

    /// Match that starts with `ball` in play instead of the default serve
    pub fn with_ball(rules: Rules, ball: Ball) -> Self {
        let mut state = Self::new(rules);
        state.ball = ball;
        state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub(crate) fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Fresh scores, paddles at their start positions, ball re-centred
    pub fn reset(&mut self) {
        self.scores.reset();
        for side in Side::BOTH {
            let start = Paddle::start_position(side, &self.rules);
            self.paddle_mut(side).reset(start.x, start.y);
        }
        self.ball.recenter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Rules {
        Rules::default()
    }

    #[test]
    fn test_paddle_starts_at_side() {
        let r = rules();
        assert_eq!(Paddle::for_side(Side::Left, &r).pos(), Vec2::new(-350.0, 0.0));
        assert_eq!(Paddle::for_side(Side::Right, &r).pos(), Vec2::new(350.0, 0.0));
    }

    #[test]
    fn test_paddle_saturates_at_limits() {
        let mut paddle = Paddle::for_side(Side::Left, &rules());
        for _ in 0..50 {
            paddle.move_up();
        }
        assert_eq!(paddle.pos().y, 250.0);
        paddle.move_up();
        assert_eq!(paddle.pos().y, 250.0);

        for _ in 0..50 {
            paddle.move_down();
        }
        assert_eq!(paddle.pos().y, -240.0);
        paddle.move_down();
        assert_eq!(paddle.pos().y, -240.0);
    }

    #[test]
    fn test_paddle_up_down_round_trip() {
        let mut paddle = Paddle::for_side(Side::Right, &rules());
        paddle.move_up();
        assert_eq!(paddle.pos().y, 20.0);
        paddle.move_down();
        assert_eq!(paddle.pos().y, 0.0);
        assert_eq!(paddle.pos().x, 350.0);
    }

    #[test]
    fn test_paddle_move_clamps_partial_step() {
        // 240 + 20 would pass the top limit
        let mut paddle = Paddle::new(Vec2::new(350.0, 240.0), -240.0, 250.0, 20.0);
        paddle.move_up();
        assert_eq!(paddle.pos().y, 250.0);
        paddle.move_down();
        assert_eq!(paddle.pos().y, 230.0);

        let mut paddle = Paddle::new(Vec2::new(350.0, -230.0), -240.0, 250.0, 20.0);
        paddle.move_down();
        assert_eq!(paddle.pos().y, -240.0);
        paddle.move_up();
        assert_eq!(paddle.pos().y, -220.0);
    }

    #[test]
    fn test_paddle_reset_clamps_y() {
        let mut paddle = Paddle::for_side(Side::Right, &rules());
        paddle.reset(100.0, 9000.0);
        assert_eq!(paddle.pos(), Vec2::new(100.0, 250.0));
        paddle.reset(-350.0, 40.0);
        assert_eq!(paddle.pos(), Vec2::new(-350.0, 40.0));
    }

    #[test]
    fn test_ball_advance() {
        let mut ball = Ball::new(&rules());
        ball.advance();
        assert_eq!(ball.pos(), Vec2::new(10.0, 10.0));
        assert_eq!(ball.speed(), 0.1);
    }

    #[test]
    fn test_ball_bounces() {
        let mut ball = Ball::new(&rules());
        ball.bounce_vertical();
        assert_eq!(ball.vel(), Vec2::new(10.0, -10.0));

        ball.bounce_horizontal();
        assert_eq!(ball.vel(), Vec2::new(-10.0, -10.0));
        assert!(ball.speed() < 0.1);
    }

    #[test]
    fn test_ball_speed_floor() {
        let mut ball = Ball::new(&rules());
        for _ in 0..100 {
            ball.bounce_horizontal();
        }
        assert_eq!(ball.speed(), 0.01);
    }

    #[test]
    fn test_ball_speed_unbounded_stays_positive() {
        let mut ball = Ball::new(&rules().unbounded_speed());
        let mut last = ball.speed();
        for _ in 0..40 {
            ball.bounce_horizontal();
            assert!(ball.speed() < last);
            last = ball.speed();
        }
        assert!(ball.speed() < 0.01);
        for _ in 0..2000 {
            ball.bounce_horizontal();
        }
        assert!(ball.speed() > 0.0);
    }

    #[test]
    fn test_ball_reset_to_center() {
        let r = rules();
        let mut ball = Ball::with_motion(Vec2::new(390.0, -120.0), Vec2::new(10.0, -10.0), &r);
        ball.bounce_horizontal();
        ball.reset_to_center();
        assert_eq!(ball.pos(), Vec2::ZERO);
        assert_eq!(ball.speed(), 0.1);
        // Two flips: bounce then reset
        assert_eq!(ball.vel(), Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_scoreboard_winner() {
        let mut scores = Scoreboard::new(2);
        assert_eq!(scores.winner(), None);
        scores.award(Side::Right);
        assert_eq!(scores.winner(), None);
        scores.award(Side::Right);
        assert_eq!(scores.winner(), Some(Side::Right));
        scores.reset();
        assert_eq!(scores.score(Side::Right), 0);
        assert_eq!(scores.winner(), None);
    }

    #[test]
    fn test_match_reset() {
        let mut state = MatchState::new(rules());
        state.paddle_mut(Side::Left).move_up();
        state.paddle_mut(Side::Right).move_down();
        state.scores.award(Side::Left);
        state.ball.advance();
        state.reset();

        assert_eq!(state.scores().score(Side::Left), 0);
        assert_eq!(state.paddle(Side::Left).pos(), Vec2::new(-350.0, 0.0));
        assert_eq!(state.paddle(Side::Right).pos(), Vec2::new(350.0, 0.0));
        assert_eq!(state.ball().pos(), Vec2::ZERO);
    }
}
