//! Engine configuration.

/// Which board the game-over probe checks a freshly spawned piece against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnProbe {
    /// The board after the committed piece is burned in and full rows are
    /// cleared. Clearing rows can therefore save a game.
    #[default]
    SettledBoard,
    /// The board as it was before the commit, without the piece that just
    /// locked and without the clear.
    PriorBoard,
}

impl SpawnProbe {
    /// Parse `settled` / `prior` (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "settled" => Some(SpawnProbe::SettledBoard),
            "prior" => Some(SpawnProbe::PriorBoard),
            _ => None,
        }
    }
}

/// Options for a [`crate::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub spawn_probe: SpawnProbe,
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_spawn_probe(mut self, spawn_probe: SpawnProbe) -> Self {
        self.spawn_probe = spawn_probe;
        self
    }
}
