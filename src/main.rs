//! Terminal runner (default binary).
//!
//! Reads keyboard and mouse input through crossterm, advances the session on
//! a fixed tick and draws it with the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::cli::Args;
use blockfall::core::GameSession;
use blockfall::event_log::EventLog;
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let args = Args::parse();
    let mut session =
        GameSession::new(args.session_config(), args.seed()).context("invalid game settings")?;
    let mut log = EventLog::from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();

    log.flush();
    if let Some(err) = log.take_error() {
        eprintln!("event log disabled after write error: {err}");
    }
    result?;

    println!("Score: {}  Lines: {}", session.score(), session.lines());
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession, log: &mut EventLog) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        log.record_all(session.take_events());

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let upcoming = session.upcoming();
        let hud = HudView::from_session(session, &upcoming);
        view.render_into(session.grid(), &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if session.is_game_over() {
            return wait_for_key();
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) if should_quit(*key) => return Ok(()),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if let Some(command) = input.handle_event(&ev) {
                session.apply(command);
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(command) = input.update(TICK_MS) {
                session.apply(command);
            }
            session.tick(TICK_MS);
        }
    }
}

/// Block until any key is pressed.
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}
