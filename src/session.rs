//! Game session: phase state machine around a match
//!
//! The session is the only thing the presentation layer talks to. Input is
//! either dispatched directly or queued as [`Command`]s and applied before
//! the next tick; rendering reads the query methods (or a
//! [`SessionView`](crate::view::SessionView)) between ticks.

use std::collections::VecDeque;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_INITIAL_SPEED;
use crate::error::{GameError, Result};
use crate::rules::Rules;
use crate::sim::{self, Ball, MatchState, Side, TickOutcome};

/// Maximum queued commands before the oldest are dropped
pub const MAX_PENDING_COMMANDS: usize = 64;

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play, paddles respond to input
    Playing,
    /// A side reached the win score; simulation frozen until restart
    GameOver,
}

/// Input the presentation layer can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveUp(Side),
    MoveDown(Side),
    Restart,
    Exit,
}

/// Two name slots, filled left then right
#[derive(Debug, Clone, Default)]
struct Players {
    names: [String; 2],
    filled: usize,
}

impl Players {
    fn assign(&mut self, name: &str) -> Result<Side> {
        let side = match self.filled {
            0 => Side::Left,
            1 => Side::Right,
            _ => return Err(GameError::InvalidState("both player names are already set")),
        };
        self.names[self.filled] = name.to_uppercase();
        self.filled += 1;
        Ok(side)
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.names[0],
            Side::Right => &self.names[1],
        }
    }
}

/// One interactive session: a match, its phase, and the players
#[derive(Debug, Clone)]
pub struct GameSession {
    state: MatchState,
    phase: GamePhase,
    players: Players,
    winner: Option<Side>,
    pending: VecDeque<Command>,
    exit_requested: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::from_valid_rules(Rules::default())
    }
}

impl GameSession {
    /// Start a session under `rules`, in the Playing phase
    pub fn new(rules: Rules) -> Result<Self> {
        rules.validate()?;
        Ok(Self::from_valid_rules(rules))
    }

    /// Start a session whose first serve is `ball` instead of the default
    pub fn with_ball(rules: Rules, ball: Ball) -> Result<Self> {
        rules.validate()?;
        let mut session = Self::from_valid_rules(rules);
        session.state.set_ball(ball);
        Ok(session)
    }

    fn from_valid_rules(rules: Rules) -> Self {
        Self {
            state: MatchState::new(rules),
            phase: GamePhase::Playing,
            players: Players::default(),
            winner: None,
            pending: VecDeque::with_capacity(MAX_PENDING_COMMANDS),
            exit_requested: false,
        }
    }

    // === Commands ===

    /// Assign the next player name: first call is left, second is right.
    /// Names are stored upper-cased. A third call is a contract violation.
    pub fn set_player_name(&mut self, name: &str) -> Result<()> {
        let side = self.players.assign(name)?;
        log::info!("{} player is {}", side.as_str(), self.players.name(side));
        Ok(())
    }

    pub fn move_paddle_up(&mut self, side: Side) {
        if self.phase == GamePhase::Playing {
            self.state.paddle_mut(side).move_up();
        }
    }

    pub fn move_paddle_down(&mut self, side: Side) {
        if self.phase == GamePhase::Playing {
            self.state.paddle_mut(side).move_down();
        }
    }

    /// Advance the match one tick. Does nothing in GameOver.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome::default();
        }

        let outcome = sim::tick(&mut self.state);
        if let Some(winner) = outcome.winner {
            self.winner = Some(winner);
            self.phase = GamePhase::GameOver;
            log::info!("Game over: {} wins", self.players.name(winner));
        }
        outcome
    }

    /// Start a fresh match with the same players. Only valid in GameOver;
    /// returns whether the restart happened.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            log::debug!("Ignoring restart while playing");
            return false;
        }
        self.state.reset();
        self.winner = None;
        self.phase = GamePhase::Playing;
        log::info!("Match restarted");
        true
    }

    /// Ask to end the session. Only honoured in GameOver.
    pub fn request_exit(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            log::debug!("Ignoring exit while playing");
            return false;
        }
        self.exit_requested = true;
        true
    }

    /// Apply a command immediately
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::MoveUp(side) => self.move_paddle_up(side),
            Command::MoveDown(side) => self.move_paddle_down(side),
            Command::Restart => {
                self.restart();
            }
            Command::Exit => {
                self.request_exit();
            }
        }
    }

    /// Queue a command for the next [`step`](Self::step)
    pub fn push_command(&mut self, command: Command) {
        if self.pending.len() >= MAX_PENDING_COMMANDS {
            self.pending.pop_front();
            log::warn!("Command queue full, dropped oldest command");
        }
        self.pending.push_back(command);
    }

    /// Apply every queued command in arrival order
    pub fn apply_pending(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            self.dispatch(command);
        }
    }

    /// Apply queued input, then tick
    pub fn step(&mut self) -> TickOutcome {
        self.apply_pending();
        self.tick()
    }

    // === Queries ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self, side: Side) -> u32 {
        self.state.scores().score(side)
    }

    pub fn left_score(&self) -> u32 {
        self.score(Side::Left)
    }

    pub fn right_score(&self) -> u32 {
        self.score(Side::Right)
    }

    pub fn ball_position(&self) -> Vec2 {
        self.state.ball().pos()
    }

    pub fn paddle_position(&self, side: Side) -> Vec2 {
        self.state.paddle(side).pos()
    }

    pub fn player_name(&self, side: Side) -> &str {
        self.players.name(side)
    }

    /// (left, right) player names
    pub fn names(&self) -> (&str, &str) {
        (self.players.name(Side::Left), self.players.name(Side::Right))
    }

    /// One-line scoreboard, e.g. `ALICE  1     0  BOB`
    pub fn scoreboard(&self) -> String {
        let (left, right) = self.names();
        format!("{left}  {}     {}  {right}", self.left_score(), self.right_score())
    }

    /// Winner's name; `None` unless in GameOver
    pub fn winner_name(&self) -> Option<&str> {
        match self.phase {
            GamePhase::GameOver => self.winner.map(|side| self.players.name(side)),
            GamePhase::Playing => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Delay before the next tick; shrinks as rallies go on
    pub fn tick_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.state.ball().speed())
            .unwrap_or(Duration::from_secs_f32(MAX_INITIAL_SPEED))
    }

    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        self.state.rules()
    }
}
