//! Discrete simulation tick
//!
//! Every check runs against the ball position after that tick's advance,
//! in a fixed order: walls, paddles, end lines, then the win check.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::state::{MatchState, Side};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Paddle on `side` sent the ball back
    PaddleReturn { side: Side },
    /// `scorer` won a point; the ball was re-served
    PointScored { scorer: Side },
    /// `winner` reached the win score
    MatchWon { winner: Side },
}

/// What a tick did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<MatchEvent>,
    pub winner: Option<Side>,
}

impl TickOutcome {
    pub fn scored(&self) -> Option<Side> {
        self.events.iter().find_map(|e| match *e {
            MatchEvent::PointScored { scorer } => Some(scorer),
            _ => None,
        })
    }
}

/// Advance the match by one tick
///
/// A match that already has a winner is frozen and the tick does nothing.
pub fn tick(state: &mut MatchState) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.scores.winner().is_some() {
        return outcome;
    }

    let arena = Arena::from_rules(&state.rules);
    state.time_ticks += 1;

    state.ball.advance();
    let pos = state.ball.pos();

    if arena.hits_wall(pos) {
        state.ball.bounce_vertical();
        log::debug!("tick {}: wall bounce at {:?}", state.time_ticks, pos);
        outcome.events.push(MatchEvent::WallBounce);
    }

    // Right paddle first; one horizontal bounce per tick at most
    let returned_by = [Side::Right, Side::Left]
        .into_iter()
        .find(|&side| arena.paddle_returns(pos, state.paddle(side), side));
    if let Some(side) = returned_by {
        state.ball.bounce_horizontal();
        log::debug!(
            "tick {}: {} paddle return, speed now {:.4}",
            state.time_ticks,
            side.as_str(),
            state.ball.speed()
        );
        outcome.events.push(MatchEvent::PaddleReturn { side });
    }

    // The ball cannot be past both end lines, so at most one point per tick
    if let Some(missed) = arena.missed_by(pos) {
        let scorer = missed.opposite();
        state.scores.award(scorer);
        state.ball.reset_to_center();
        log::info!(
            "{} scores ({} - {})",
            scorer.as_str(),
            state.scores.score(Side::Left),
            state.scores.score(Side::Right)
        );
        outcome.events.push(MatchEvent::PointScored { scorer });
    }

    if let Some(winner) = state.scores.winner() {
        log::info!("{} wins the match", winner.as_str());
        outcome.events.push(MatchEvent::MatchWon { winner });
        outcome.winner = Some(winner);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::rules::Rules;
    use crate::sim::state::Ball;

    fn state_with_ball(rules: Rules, pos: Vec2, vel: Vec2) -> MatchState {
        let ball = Ball::with_motion(pos, vel, &rules);
        MatchState::with_ball(rules, ball)
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut state = MatchState::new(Rules::default());
        let outcome = tick(&mut state);
        assert!(outcome.events.is_empty());
        assert_eq!(state.ball().pos(), Vec2::new(10.0, 10.0));
        assert_eq!(state.time_ticks(), 1);
    }

    #[test]
    fn test_tick_wall_bounce() {
        let mut state = state_with_ball(
            Rules::default(),
            Vec2::new(0.0, 275.0),
            Vec2::new(10.0, 10.0),
        );
        let outcome = tick(&mut state);
        assert_eq!(state.ball().pos(), Vec2::new(10.0, 285.0));
        assert_eq!(outcome.events, vec![MatchEvent::WallBounce]);
        assert_eq!(state.ball().vel(), Vec2::new(10.0, -10.0));

        // Heads back down next tick
        tick(&mut state);
        assert_eq!(state.ball().pos(), Vec2::new(20.0, 275.0));
    }

    #[test]
    fn test_tick_right_paddle_return() {
        let mut state = state_with_ball(
            Rules::default(),
            Vec2::new(320.0, 0.0),
            Vec2::new(10.0, 10.0),
        );
        let outcome = tick(&mut state);
        assert_eq!(outcome.events, vec![MatchEvent::PaddleReturn { side: Side::Right }]);
        assert_eq!(state.ball().vel().x, -10.0);
        assert!((state.ball().speed() - 0.09).abs() < 1e-6);
    }

    #[test]
    fn test_tick_left_paddle_return() {
        let mut state = state_with_ball(
            Rules::default(),
            Vec2::new(-320.0, -20.0),
            Vec2::new(-10.0, 10.0),
        );
        let outcome = tick(&mut state);
        assert_eq!(outcome.events, vec![MatchEvent::PaddleReturn { side: Side::Left }]);
        assert_eq!(state.ball().vel().x, 10.0);
    }

    #[test]
    fn test_tick_rally_compounds_speed() {
        let mut state = state_with_ball(
            Rules::default(),
            Vec2::new(320.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        let mut returns = Vec::new();
        for _ in 0..100 {
            for event in tick(&mut state).events {
                if let MatchEvent::PaddleReturn { side } = event {
                    returns.push(side);
                }
            }
            if returns.len() == 2 {
                break;
            }
        }
        assert_eq!(returns, vec![Side::Right, Side::Left]);
        assert!((state.ball().speed() - 0.081).abs() < 1e-6);
        assert_eq!(state.scores().score(Side::Left), 0);
        assert_eq!(state.scores().score(Side::Right), 0);
    }

    #[test]
    fn test_tick_right_miss_scores_left() {
        let mut state = state_with_ball(
            Rules::default(),
            Vec2::new(375.0, 200.0),
            Vec2::new(10.0, 10.0),
        );
        let outcome = tick(&mut state);
        assert_eq!(outcome.scored(), Some(Side::Left));
        assert_eq!(state.scores().score(Side::Left), 1);
        assert_eq!(state.scores().score(Side::Right), 0);
        assert_eq!(state.ball().pos(), Vec2::ZERO);
        // Serve goes back the way it came
        assert_eq!(state.ball().vel().x, -10.0);
        assert_eq!(outcome.winner, Some(Side::Left));
        assert_eq!(
            outcome.events,
            vec![
                MatchEvent::PointScored { scorer: Side::Left },
                MatchEvent::MatchWon { winner: Side::Left },
            ]
        );
    }

    #[test]
    fn test_tick_left_miss_scores_right() {
        let rules = Rules {
            win_score: 3,
            ..Rules::default()
        };
        let mut state = state_with_ball(rules, Vec2::new(-375.0, -200.0), Vec2::new(-10.0, 10.0));
        let outcome = tick(&mut state);
        assert_eq!(outcome.scored(), Some(Side::Right));
        assert_eq!(state.scores().score(Side::Right), 1);
        assert_eq!(outcome.winner, None);
    }

    #[test]
    fn test_tick_frozen_after_win() {
        let mut state = state_with_ball(
            Rules::default(),
            Vec2::new(375.0, 0.0),
            Vec2::new(10.0, 10.0),
        );
        tick(&mut state);
        let before = state.clone();
        let outcome = tick(&mut state);
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state.ball(), before.ball());
        assert_eq!(state.scores(), before.scores());
        assert_eq!(state.time_ticks(), before.time_ticks());
    }

    #[test]
    fn test_tick_serve_rally_deterministic() {
        let mut a = MatchState::new(Rules::default());
        let mut b = MatchState::new(Rules::default());
        for _ in 0..200 {
            assert_eq!(tick(&mut a), tick(&mut b));
        }
        assert_eq!(a.ball(), b.ball());
    }
}
