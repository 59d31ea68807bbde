//! Render snapshot
//!
//! A frontend never reads simulation state directly: it captures a
//! [`SessionView`] each frame and draws that.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::session::{GamePhase, GameSession};
use crate::sim::Side;

const SCORE_POS: Vec2 = Vec2::new(0.0, 220.0);
const LEFT_NAME_POS: Vec2 = Vec2::new(-110.0, 205.0);
const RIGHT_NAME_POS: Vec2 = Vec2::new(110.0, 205.0);
const WIN_MESSAGE_POS: Vec2 = Vec2::new(0.0, 0.0);
const RESTART_MESSAGE_POS: Vec2 = Vec2::new(0.0, -240.0);
const EXIT_MESSAGE_POS: Vec2 = Vec2::new(0.0, -270.0);

pub const RESTART_MESSAGE: &str = "Press Space to restart";
pub const EXIT_MESSAGE: &str = "Press Esc to exit game";

/// How prominent a label is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelSize {
    Large,
    Medium,
    Small,
}

/// Text centred on an arena position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
    pub size: LabelSize,
}

impl Label {
    fn new(pos: Vec2, text: impl Into<String>, size: LabelSize) -> Self {
        Self {
            pos,
            text: text.into(),
            size,
        }
    }
}

/// Drawable rectangle, centred on `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub center: Vec2,
    pub size: Vec2,
}

/// Everything a frame needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub half_extents: Vec2,
    pub ball: Vec2,
    pub left_paddle: PaddleView,
    pub right_paddle: PaddleView,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: GamePhase,
    pub labels: Vec<Label>,
}

impl SessionView {
    pub fn capture(session: &GameSession) -> Self {
        let rules = session.rules();
        let paddle = |side| PaddleView {
            center: session.paddle_position(side),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        };

        let mut labels = vec![
            Label::new(
                SCORE_POS,
                format!("{}     {}", session.left_score(), session.right_score()),
                LabelSize::Large,
            ),
            Label::new(LEFT_NAME_POS, session.player_name(Side::Left), LabelSize::Small),
            Label::new(RIGHT_NAME_POS, session.player_name(Side::Right), LabelSize::Small),
        ];
        if let Some(winner) = session.winner_name() {
            labels.push(Label::new(
                WIN_MESSAGE_POS,
                format!("{winner} WINS!"),
                LabelSize::Medium,
            ));
            labels.push(Label::new(RESTART_MESSAGE_POS, RESTART_MESSAGE, LabelSize::Small));
            labels.push(Label::new(EXIT_MESSAGE_POS, EXIT_MESSAGE, LabelSize::Small));
        }

        Self {
            half_extents: Vec2::new(rules.arena_half_width, rules.arena_half_height),
            ball: session.ball_position(),
            left_paddle: paddle(Side::Left),
            right_paddle: paddle(Side::Right),
            left_score: session.left_score(),
            right_score: session.right_score(),
            phase: session.phase(),
            labels,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
