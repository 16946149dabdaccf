//! Per-session bookkeeping around the engine: leaderboard submission when a
//! game ends, and retiring confetti once it has been on screen long enough.

use tracing::debug;

use crate::engine::{ConfettiEvent, LastEvent};
use crate::leaderboard::{Leaderboard, LeaderboardRecord, LeaderboardStore};

/// How long a "+N LINES" message stays on screen.
pub const CONFETTI_LIFETIME_MS: u32 = 1500;

/// Submits final scores and caches the leaders shown by the view.
#[derive(Debug)]
pub struct ScoreKeeper<S> {
    leaderboard: Option<Leaderboard<S>>,
    user: Option<String>,
    leaders: Vec<LeaderboardRecord>,
}

impl<S: LeaderboardStore> ScoreKeeper<S> {
    pub fn new(leaderboard: Option<Leaderboard<S>>, user: Option<String>) -> Self {
        let leaders = leaderboard.as_ref().map(Leaderboard::top).unwrap_or_default();
        Self {
            leaderboard,
            user,
            leaders,
        }
    }

    pub fn leaders(&self) -> &[LeaderboardRecord] {
        &self.leaders
    }

    pub fn leaderboard(&self) -> Option<&Leaderboard<S>> {
        self.leaderboard.as_ref()
    }

    /// Handle a commit event. Only a game-over commit submits `score`.
    ///
    /// Returns whether the cached leaders were refreshed.
    pub fn on_commit(&mut self, event: LastEvent, score: u32) -> bool {
        if !event.game_over {
            return false;
        }
        match (self.leaderboard.as_mut(), self.user.as_deref()) {
            (Some(board), Some(user)) => {
                if !board.submit_score(user, score) {
                    return false;
                }
                self.leaders = board.top();
                true
            }
            _ => false,
        }
    }
}

/// Ages live confetti events and picks those due for retirement after
/// [`CONFETTI_LIFETIME_MS`].
#[derive(Debug, Default)]
pub struct ConfettiClock {
    /// (event id, ms on screen)
    shown: Vec<(u32, u32)>,
}

impl ConfettiClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed_ms` against the engine's current `events`.
    ///
    /// Returns the ids whose lifetime ran out; the caller retires them.
    /// Events first seen now start at age zero.
    pub fn update(&mut self, events: &[ConfettiEvent], elapsed_ms: u32) -> Vec<u32> {
        let is_alive = |id: u32| events.iter().any(|e| e.id == id && e.alive);

        let mut expired = Vec::new();
        self.shown.retain_mut(|(id, age)| {
            if !is_alive(*id) {
                return false;
            }
            *age = age.saturating_add(elapsed_ms);
            if *age >= CONFETTI_LIFETIME_MS {
                expired.push(*id);
                return false;
            }
            true
        });

        for event in events.iter().filter(|e| e.alive) {
            let known = self.shown.iter().any(|(id, _)| *id == event.id);
            if !known && !expired.contains(&event.id) {
                self.shown.push((event.id, 0));
            }
        }

        if !expired.is_empty() {
            debug!(ids = ?expired, "confetti expired");
        }
        expired
    }

    /// Number of events currently on screen.
    pub fn tracked(&self) -> usize {
        self.shown.len()
    }
}
