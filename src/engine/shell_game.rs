//! The shell game engine.
//!
//! `ShellGame` owns the containers, the hidden item location, the per-round
//! miss count and the cross-round strike count. Drivers call
//! [`ShellGame::reset_round`] and then [`ShellGame::probe`] until a probe
//! returns `true`, then reset again.
//!
//! ## Scoring
//!
//! A hit awards `container_count - missed_count`: the full count on the
//! first try, one less for each distinct miss. A hit that would award 1 is
//! the last container left, so it is reported as a strike instead.
//!
//! ## Example
//!
//! ```
//! use shell_game::core::{ContainerId, ScriptedRng};
//! use shell_game::engine::ShellGame;
//!
//! let mut game = ShellGame::new(ScriptedRng::constant(1), 3, 3).unwrap();
//!
//! assert!(!game.probe(ContainerId::new(0)).unwrap());
//! assert!(game.probe(ContainerId::new(1)).unwrap());
//! assert_eq!(game.strikes(), 0);
//! ```

use tracing::debug;

use crate::core::{Container, ContainerId, EngineConfig, EngineError, GameRng, RandomSource};
use crate::events::{EngineEvent, EventKind, ListenerId, ListenerRegistry};

use super::snapshot::{EngineSnapshot, RoundPhase};

/// Find-the-hidden-item turn engine.
///
/// Single-threaded: every operation runs to completion and listeners are
/// called inline, in emission order, before it returns.
#[derive(Debug)]
pub struct ShellGame<R = GameRng> {
    rng: R,
    containers: Vec<Container>,
    total_strikes: u32,
    item_location: ContainerId,
    missed_count: usize,
    strikes: u32,
    phase: RoundPhase,
    listeners: ListenerRegistry,
    /// Present when the config asked for an event journal.
    journal: Option<Vec<EngineEvent>>,
}

impl ShellGame<GameRng> {
    /// Create an engine backed by an entropy-seeded RNG.
    pub fn from_entropy(container_count: usize, total_strikes: u32) -> Result<Self, EngineError> {
        Self::new(GameRng::from_entropy(), container_count, total_strikes)
    }
}

impl<R: RandomSource> ShellGame<R> {
    /// Create an engine and perform the first round reset.
    ///
    /// Fails if either count is zero.
    pub fn new(rng: R, container_count: usize, total_strikes: u32) -> Result<Self, EngineError> {
        Self::with_config(rng, EngineConfig::new(container_count, total_strikes))
    }

    /// Create an engine from a full configuration.
    pub fn with_config(rng: R, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut game = Self {
            rng,
            containers: ContainerId::all(config.container_count)
                .map(Container::new)
                .collect(),
            total_strikes: config.total_strikes,
            item_location: ContainerId::new(0),
            missed_count: 0,
            strikes: 0,
            phase: RoundPhase::default(),
            listeners: ListenerRegistry::new(),
            journal: config.record_events.then(Vec::new),
        };

        debug!(
            containers = config.container_count,
            total_strikes = config.total_strikes,
            "created shell game"
        );

        game.reset_round();
        Ok(game)
    }

    // === Round lifecycle ===

    /// Start a new round.
    ///
    /// Emits `ItemReset`, then `GameOver` and clears the strikes if the
    /// threshold was reached, zeroes the miss count, draws a new location
    /// and emits `ResetComplete`.
    ///
    /// Checked flags are left as they are; only a hit clears them.
    pub fn reset_round(&mut self) {
        self.emit(EngineEvent::ItemReset);

        if self.strikes >= self.total_strikes {
            debug!(strikes = self.strikes, "game over");
            self.emit(EngineEvent::GameOver {
                strikes: self.strikes,
            });
            self.strikes = 0;
        }

        self.missed_count = 0;

        let count = self.containers.len();
        let location = self.rng.next_in_range(0, count);
        debug_assert!(location < count, "random source returned {location} for 0..{count}");
        self.item_location = ContainerId::new(location as u32);
        self.phase = RoundPhase::RoundInProgress;

        debug!(item_location = location, "round reset");
        self.emit(EngineEvent::ResetComplete);
    }

    /// Probe a container.
    ///
    /// Returns `Ok(true)` if the item was there, which ends the round.
    /// Re-probing a container already missed this round only emits
    /// `CheckingItem`.
    ///
    /// An out-of-range `id` fails before any event or state change.
    pub fn probe(&mut self, id: ContainerId) -> Result<bool, EngineError> {
        let count = self.containers.len();
        if !id.is_valid(count) {
            return Err(EngineError::ContainerOutOfRange {
                id,
                container_count: count,
            });
        }

        self.emit(EngineEvent::CheckingItem { id });

        if id == self.item_location {
            self.emit(EngineEvent::SelectedItem { id });

            let score = count.saturating_sub(self.missed_count);
            if score == 1 {
                self.strikes += 1;
                debug!(%id, strikes = self.strikes, "forced find, strike");
                self.emit(EngineEvent::MatchNotMade { is_strike: true });
            } else {
                debug!(%id, score, "match made");
                self.emit(EngineEvent::MatchMade { id, score });
            }

            self.close_containers();
            self.phase = RoundPhase::AwaitingReset;
            self.emit(EngineEvent::StartTurn);
            return Ok(true);
        }

        if !self.containers[id.index()].already_checked {
            self.emit(EngineEvent::MatchNotMade { is_strike: false });
            self.missed_count += 1;
            self.containers[id.index()].already_checked = true;
            debug!(%id, missed = self.missed_count, "miss");
        }

        Ok(false)
    }

    fn close_containers(&mut self) {
        for container in &mut self.containers {
            container.already_checked = false;
        }
    }

    fn emit(&mut self, event: EngineEvent) {
        self.listeners.dispatch(&event);
        if let Some(journal) = &mut self.journal {
            journal.push(event);
        }
    }

    // === Notifications ===

    /// Register a listener for one event kind.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&EngineEvent) + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(kind, callback)
    }

    /// Register a listener for several event kinds.
    pub fn subscribe_many(
        &mut self,
        kinds: &[EventKind],
        callback: impl FnMut(&EngineEvent) + 'static,
    ) -> ListenerId {
        self.listeners.subscribe_many(kinds, callback)
    }

    /// Register a listener for every event.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&EngineEvent) + 'static) -> ListenerId {
        self.listeners.subscribe_all(callback)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Take every journaled event, oldest first.
    ///
    /// Always empty when the journal is disabled.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.journal.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Check if events are being journaled.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.journal.is_some()
    }

    // === Accessors ===

    /// Number of containers.
    #[must_use]
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Strikes that end a session.
    #[must_use]
    pub fn total_strikes(&self) -> u32 {
        self.total_strikes
    }

    /// Container currently hiding the item.
    #[must_use]
    pub fn item_location(&self) -> ContainerId {
        self.item_location
    }

    /// Distinct containers missed this round.
    #[must_use]
    pub fn missed_count(&self) -> usize {
        self.missed_count
    }

    /// Strikes accumulated this session.
    #[must_use]
    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    /// Current round phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// All containers, indexed by ID.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Get a container by ID.
    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.index())
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            container_count: self.containers.len(),
            total_strikes: self.total_strikes,
            item_location: self.item_location,
            missed_count: self.missed_count,
            strikes: self.strikes,
            checked: self
                .containers
                .iter()
                .filter(|c| c.already_checked)
                .map(|c| c.id)
                .collect(),
            phase: self.phase,
        }
    }
}
