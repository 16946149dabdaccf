//! Falling Blocks runner (default binary).
//!
//! Fixed-timestep loop: poll crossterm input until the next tick, feed key
//! transitions through the input listener into the engine, advance the
//! listener and the engine by `TICK_MS`, then draw a full frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{error, info};

use falling_blocks::engine::Game;
use falling_blocks::input::{handle_key_event, should_quit, InputListener};
use falling_blocks::leaderboard::{JsonFileStore, Leaderboard};
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falling_blocks::types::{GameCommand, TICK_MS};
use falling_blocks::{logging, AppConfig, ConfettiClock, ScoreKeeper};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "runner stopped");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = Game::new(config.engine);
    let mut listener = if term.reports_key_release() {
        InputListener::new()
    } else {
        InputListener::new().with_key_release_timeout_ms(config.key_release_timeout_ms)
    };
    let leaderboard = config
        .leaderboard_path
        .as_ref()
        .map(|path| Leaderboard::new(JsonFileStore::new(path)));
    let mut scores = ScoreKeeper::new(leaderboard, config.user.clone());
    let mut confetti = ConfettiClock::new();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    info!(seed = ?config.engine.seed, "runner started");

    let outcome = loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), scores.leaders(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    break Ok(());
                }
                if let Some(input) = handle_key_event(key) {
                    if let Some(command) = listener.handle(input) {
                        apply(&mut game, &mut listener, command);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for command in listener.update(TICK_MS) {
                apply(&mut game, &mut listener, command);
            }

            if let Err(err) = game.update(TICK_MS) {
                break Err(err.into());
            }

            if let Some(event) = game.take_last_event() {
                if event.game_over {
                    listener.cancel();
                }
                scores.on_commit(event, game.score());
            }

            for id in confetti.update(game.confetti(), TICK_MS) {
                game.remove_confetti(id);
            }
        }
    };

    game.end_session();
    listener.cancel();
    outcome
}

fn apply(game: &mut Game, listener: &mut InputListener, command: GameCommand) {
    if game.apply(command) && command == GameCommand::Start {
        listener.cancel();
    }
}
