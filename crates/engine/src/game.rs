//! Game engine - session state and the commit protocol
//!
//! The engine is the only component that dispatches actions to the board
//! reducer. It owns the score, the upcoming queue, the gravity timer and the
//! confetti list.
//!
//! A piece goes through these phases:
//!
//! - **Falling**: each gravity tick drops it one row.
//! - **Sliding**: a tick found row + 1 blocked. Gravity switches to the short
//!   sliding period and the next tick evaluates the commit, leaving the player
//!   one sliding tick to shift the piece off the obstruction.
//! - **Commit evaluation**: if row + 1 is free again the commit is aborted and
//!   the piece falls on; otherwise it is burned in, full rows are cleared,
//!   points are awarded and the next piece is spawned.
//! - **GameOver**: the spawned piece collides immediately. Gravity stops and
//!   nothing but a new start is accepted.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::config::{EngineConfig, SpawnProbe};
use crate::confetti::{ConfettiEvent, ConfettiList};
use crate::core::{
    has_collision, points_for_clear, reduce, ActivePiece, Board, BoardAction, BoardState,
    IntervalTimer, SimpleRng,
};
use crate::error::EngineError;
use crate::snapshot::GameSnapshot;
use crate::types::{GameCommand, MoveFlags, PieceKind, TickSpeed, UPCOMING_LEN};

/// Where the active piece is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started yet.
    Idle,
    Falling,
    /// Grounded; the next tick evaluates the commit.
    Sliding,
    GameOver,
}

/// Outcome of the most recent commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastEvent {
    pub lines_cleared: u8,
    pub points: u32,
    pub game_over: bool,
}

/// A game session.
#[derive(Debug, Clone)]
pub struct Game {
    config: EngineConfig,
    rng: SimpleRng,
    state: BoardState,
    phase: Phase,
    score: u32,
    upcoming: ArrayVec<PieceKind, UPCOMING_LEN>,
    tick_speed: TickSpeed,
    gravity: IntervalTimer,
    confetti: ConfettiList,
    last_event: Option<LastEvent>,
}

impl Game {
    /// Create an idle engine. Nothing moves until [`Game::start_game`].
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_time);
        Self {
            config,
            rng,
            state: BoardState::new(),
            phase: Phase::Idle,
            score: 0,
            upcoming: ArrayVec::new(),
            tick_speed: TickSpeed::Stopped,
            gravity: IntervalTimer::stopped(),
            confetti: ConfettiList::new(),
            last_event: None,
        }
    }

    /// Create an idle engine with a fixed seed.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    /// Reset every piece of session state and start falling.
    ///
    /// Calling this while a game is running restarts it; `apply(Start)` does
    /// not.
    pub fn start_game(&mut self) {
        self.score = 0;
        self.upcoming.clear();
        for _ in 0..UPCOMING_LEN {
            self.upcoming.push(self.rng.next_kind());
        }
        self.confetti.clear();
        self.last_event = None;

        let first = self.rng.next_kind();
        self.dispatch(BoardAction::Start { first });
        self.phase = Phase::Falling;
        self.set_tick_speed(TickSpeed::Normal);

        info!(first = ?first, upcoming = ?self.upcoming.as_slice(), "game started");
    }

    /// End the session immediately, e.g. when the consumer is torn down.
    /// Gravity is cancelled and no further ticks or moves are processed.
    pub fn end_session(&mut self) {
        if self.is_playing() {
            info!(score = self.score, "session ended");
            self.phase = Phase::GameOver;
        }
        self.stop_gravity();
    }

    /// Apply a command. Returns whether it changed anything.
    ///
    /// `Start` is ignored while a game is running.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => {
                if self.is_playing() {
                    return false;
                }
                self.start_game();
                true
            }
            GameCommand::Move(flags) => self.move_piece(flags),
            GameCommand::SoftDrop(pressed) => {
                if !self.is_playing() {
                    return false;
                }
                let speed = if pressed {
                    TickSpeed::Fast
                } else {
                    TickSpeed::Normal
                };
                self.set_tick_speed(speed);
                true
            }
        }
    }

    /// Shift and/or rotate the active piece. Collisions are rejected silently.
    pub fn move_piece(&mut self, flags: MoveFlags) -> bool {
        if !self.is_playing() {
            return false;
        }
        let before = self.state.active;
        self.dispatch(BoardAction::Move(flags));
        self.state.active != before
    }

    /// Advance the gravity timer and run every tick that fell due.
    ///
    /// Returns the number of ticks processed. When a tick changes the tick
    /// speed, the remaining ticks of the old period are dropped.
    pub fn update(&mut self, elapsed_ms: u32) -> Result<u32, EngineError> {
        if !self.is_playing() {
            return Ok(0);
        }

        let fired = self.gravity.advance(elapsed_ms);
        let generation = self.gravity.generation();
        let mut ticks = 0;
        for _ in 0..fired {
            if !self.is_playing() || self.gravity.generation() != generation {
                break;
            }
            self.tick()?;
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Run one gravity tick.
    ///
    /// A pending commit is evaluated exclusively: the same tick never also
    /// drops the piece.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        match self.phase {
            Phase::Idle | Phase::GameOver => Ok(()),
            Phase::Sliding => self.commit_position(),
            Phase::Falling => {
                if self.blocked_below() {
                    debug!(row = self.state.active.row, "piece grounded, sliding");
                    self.phase = Phase::Sliding;
                    self.set_tick_speed(TickSpeed::Sliding);
                } else {
                    self.dispatch(BoardAction::Drop);
                }
                Ok(())
            }
        }
    }

    fn commit_position(&mut self) -> Result<(), EngineError> {
        // The player may have slid the piece off the obstruction.
        if !self.blocked_below() {
            debug!(col = self.state.active.col, "commit aborted");
            self.phase = Phase::Falling;
            self.set_tick_speed(TickSpeed::Normal);
            return Ok(());
        }

        let active = self.state.active;
        let mut settled = self.state.board.clone();
        settled.burn(active.kind, &active.shape, active.row, active.col);
        let cleared = settled.clear_full_rows();
        let points = points_for_clear(cleared)?;

        if cleared > 0 {
            self.confetti.push(cleared as u8);
        }

        let next = self
            .upcoming
            .pop_at(0)
            .unwrap_or_else(|| self.rng.next_kind());
        self.upcoming.push(self.rng.next_kind());

        let spawn = ActivePiece::spawn(next);
        let probe_board = match self.config.spawn_probe {
            SpawnProbe::SettledBoard => &settled,
            SpawnProbe::PriorBoard => &self.state.board,
        };
        let game_over = has_collision(probe_board, &spawn.shape, spawn.row, spawn.col);

        self.dispatch(BoardAction::Commit {
            board: settled,
            next,
        });

        if game_over {
            self.phase = Phase::GameOver;
            self.stop_gravity();
            info!(score = self.score, "game over");
        } else {
            self.score = self.score.saturating_add(points);
            self.phase = Phase::Falling;
            self.set_tick_speed(TickSpeed::Normal);
            debug!(cleared, points, next = ?next, "piece committed");
        }

        self.last_event = Some(LastEvent {
            lines_cleared: cleared as u8,
            points: if game_over { 0 } else { points },
            game_over,
        });
        Ok(())
    }

    fn blocked_below(&self) -> bool {
        let active = &self.state.active;
        has_collision(&self.state.board, &active.shape, active.row + 1, active.col)
    }

    fn dispatch(&mut self, action: BoardAction) {
        self.state = reduce(&self.state, action);
    }

    fn set_tick_speed(&mut self, speed: TickSpeed) {
        if self.tick_speed != speed {
            debug!(from = self.tick_speed.as_str(), to = speed.as_str(), "tick speed");
            self.tick_speed = speed;
            self.gravity.set_period(speed.period_ms());
        }
    }

    fn stop_gravity(&mut self) {
        self.tick_speed = TickSpeed::Stopped;
        self.gravity.cancel();
    }

    /// Retire a confetti event. Returns false for unknown ids.
    pub fn remove_confetti(&mut self, id: u32) -> bool {
        self.confetti.retire(id)
    }

    /// Take and clear the last commit event.
    pub fn take_last_event(&mut self) -> Option<LastEvent> {
        self.last_event.take()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Falling | Phase::Sliding)
    }

    pub fn is_committing(&self) -> bool {
        self.phase == Phase::Sliding
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_speed(&self) -> TickSpeed {
        self.tick_speed
    }

    pub fn gravity(&self) -> &IntervalTimer {
        &self.gravity
    }

    /// Upcoming kinds, next to drop first.
    pub fn upcoming_blocks(&self) -> &[PieceKind] {
        &self.upcoming
    }

    pub fn confetti(&self) -> &[ConfettiEvent] {
        self.confetti.events()
    }

    pub fn active(&self) -> &ActivePiece {
        &self.state.active
    }

    /// The authoritative committed grid (without the active piece).
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Board for display: the committed grid with the active piece burned in
    /// while playing.
    pub fn rendered_board(&self) -> Board {
        let mut board = self.state.board.clone();
        if self.is_playing() {
            let active = &self.state.active;
            board.burn(active.kind, &active.shape, active.row, active.col);
        }
        board
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.rendered_board(),
            active: self.is_playing().then_some(self.state.active),
            is_playing: self.is_playing(),
            is_committing: self.is_committing(),
            game_over: self.is_game_over(),
            score: self.score,
            upcoming: self.upcoming.clone(),
            tick_speed: self.tick_speed,
            confetti: self.confetti.events().to_vec(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn upcoming_mut(&mut self) -> &mut ArrayVec<PieceKind, UPCOMING_LEN> {
        &mut self.upcoming
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
