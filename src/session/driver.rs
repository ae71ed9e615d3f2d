//! Reference driver.
//!
//! `Session` owns an engine and a [`ScoreKeeper`] and follows the
//! reset → probe* → hit → reset cycle for its caller: every hit is
//! immediately followed by a round reset, so the session is always ready
//! for the next probe.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ContainerId, EngineConfig, EngineError, GameRng, RandomSource};
use crate::engine::ShellGame;
use crate::events::EngineEvent;

use super::ScoreKeeper;

/// What happened during one [`Session::probe`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// The probe found the item.
    pub hit: bool,

    /// Every event emitted, including the follow-up reset after a hit.
    pub events: Vec<EngineEvent>,
}

impl ProbeReport {
    /// Points awarded by this probe, if it made a match.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.events.iter().find_map(|e| match *e {
            EngineEvent::MatchMade { score, .. } => Some(score),
            _ => None,
        })
    }

    /// Check if this probe cost a strike.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.events.iter().any(EngineEvent::is_strike)
    }

    /// Check if the follow-up reset ended the session.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, EngineEvent::GameOver { .. }))
    }
}

/// An engine plus score bookkeeping, driven one probe at a time.
#[derive(Debug)]
pub struct Session<R = GameRng> {
    game: ShellGame<R>,
    keeper: ScoreKeeper,
}

impl Session<GameRng> {
    /// Create a session backed by an entropy-seeded RNG.
    pub fn from_entropy(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(GameRng::from_entropy(), config)
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session. The journal is always enabled on the engine.
    pub fn new(rng: R, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_keeper(rng, config, ScoreKeeper::new())
    }

    /// Create a session that continues from an existing keeper.
    pub fn with_keeper(
        rng: R,
        config: EngineConfig,
        keeper: ScoreKeeper,
    ) -> Result<Self, EngineError> {
        let game = ShellGame::with_config(rng, config.with_event_journal())?;
        let mut session = Self { game, keeper };

        let events = session.game.drain_events();
        session.keeper.observe_all(&events);

        info!(
            containers = session.game.container_count(),
            total_strikes = session.game.total_strikes(),
            "session started"
        );
        Ok(session)
    }

    /// Probe a container, updating the score and resetting after a hit.
    pub fn probe(&mut self, id: ContainerId) -> Result<ProbeReport, EngineError> {
        debug!(%id, "session probe");

        let hit = self.game.probe(id)?;
        if hit {
            self.game.reset_round();
        }

        let events = self.game.drain_events();
        self.keeper.observe_all(&events);

        let report = ProbeReport { hit, events };
        if report.is_game_over() {
            info!(
                best = self.keeper.best,
                games_played = self.keeper.games_played,
                "game over"
            );
        }
        Ok(report)
    }

    /// Score accumulated this session.
    #[must_use]
    pub fn score(&self) -> usize {
        self.keeper.total
    }

    /// The score bookkeeping.
    #[must_use]
    pub fn keeper(&self) -> &ScoreKeeper {
        &self.keeper
    }

    /// The engine.
    #[must_use]
    pub fn game(&self) -> &ShellGame<R> {
        &self.game
    }

    /// The engine, for subscribing listeners.
    pub fn game_mut(&mut self) -> &mut ShellGame<R> {
        &mut self.game
    }

    /// Split into engine and keeper.
    pub fn into_parts(self) -> (ShellGame<R>, ScoreKeeper) {
        (self.game, self.keeper)
    }
}
