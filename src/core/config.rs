//! Engine configuration.
//!
//! Drivers configure the engine at startup with an `EngineConfig`:
//! - how many containers hide the item
//! - how many strikes end a session
//! - whether events are journaled for `drain_events`

use serde::{Deserialize, Serialize};

use super::EngineError;

/// Containers in the classic three-shell table.
pub const DEFAULT_CONTAINER_COUNT: usize = 3;

/// Strikes allowed before a session ends.
pub const DEFAULT_TOTAL_STRIKES: u32 = 3;

/// Complete engine configuration.
///
/// ```
/// use shell_game::core::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_container_count(5)
///     .with_total_strikes(2);
///
/// assert!(config.validate().is_ok());
/// assert!(EngineConfig::default().with_container_count(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of containers (N > 0). Fixed for the engine's lifetime.
    pub container_count: usize,

    /// Strike threshold (T > 0) that ends a session.
    pub total_strikes: u32,

    /// Keep every emitted event in a queue drained by `drain_events`.
    ///
    /// Off by default: listener-only drivers never drain, and the queue
    /// would grow without bound.
    pub record_events: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            container_count: DEFAULT_CONTAINER_COUNT,
            total_strikes: DEFAULT_TOTAL_STRIKES,
            record_events: false,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with explicit counts and no journal.
    pub fn new(container_count: usize, total_strikes: u32) -> Self {
        Self {
            container_count,
            total_strikes,
            record_events: false,
        }
    }

    /// Set the container count.
    #[must_use]
    pub fn with_container_count(mut self, count: usize) -> Self {
        self.container_count = count;
        self
    }

    /// Set the strike threshold.
    #[must_use]
    pub fn with_total_strikes(mut self, strikes: u32) -> Self {
        self.total_strikes = strikes;
        self
    }

    /// Enable the event journal.
    #[must_use]
    pub fn with_event_journal(mut self) -> Self {
        self.record_events = true;
        self
    }

    /// Check the construction contract: both counts must be positive and
    /// every container must be addressable by a `ContainerId`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.container_count == 0 || u32::try_from(self.container_count).is_err() {
            return Err(EngineError::InvalidContainerCount(self.container_count));
        }
        if self.total_strikes == 0 {
            return Err(EngineError::InvalidStrikeThreshold(self.total_strikes));
        }
        Ok(())
    }
}
