//! Paddle Duel entry point
//!
//! Asks for player names, then runs the tick loop in the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use paddle_duel::platform::{KeyAction, map_key};
use paddle_duel::{GameSession, Rules, SessionView, renderer};

#[derive(Parser)]
#[command(name = "paddle-duel")]
#[command(about = "Two-player paddle-and-ball duel in the terminal")]
struct Args {
    /// Left player's name (prompted if omitted)
    #[arg(long)]
    left: Option<String>,

    /// Right player's name (prompted if omitted)
    #[arg(long)]
    right: Option<String>,

    /// JSON file overriding the default rules
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let rules = match &args.rules {
        Some(path) => Rules::load(path)
            .with_context(|| format!("failed to load rules from {}", path.display()))?,
        None => Rules::default(),
    };
    let mut session = GameSession::new(rules)?;

    let left = match args.left {
        Some(name) => name,
        None => prompt("Player One: ")?,
    };
    let right = match args.right {
        Some(name) => name,
        None => prompt("Player Two: ")?,
    };
    session.set_player_name(&left)?;
    session.set_player_name(&right)?;

    log::info!("Paddle Duel starting");
    run_in_terminal(&mut session)?;
    log::info!("Paddle Duel exiting");
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run_in_terminal(session: &mut GameSession) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_loop(&mut terminal, session);

    // Restore the terminal even when the loop failed
    let raw_mode = terminal::disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show);
    first_error(result, [raw_mode, screen])
}

/// `result`, unless it succeeded and a teardown step did not
fn first_error(result: io::Result<()>, teardown: [io::Result<()>; 2]) -> io::Result<()> {
    teardown.into_iter().fold(result, |acc, step| acc.and(step))
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
) -> io::Result<()> {
    loop {
        let view = SessionView::capture(session);
        terminal.draw(|frame| renderer::draw(frame, &view))?;

        session.step();

        // Wait out the tick delay, collecting input as it arrives
        let deadline = Instant::now() + session.tick_delay();
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(KeyAction::Command(command)) => session.push_command(command),
                    Some(KeyAction::Quit) => return Ok(()),
                    None => {}
                }
            }
        }

        // Exit is only honoured once the match is over
        session.apply_pending();
        if session.exit_requested() {
            return Ok(());
        }
    }
}
