//! Read-only engine views.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ContainerId;

/// Where the engine is in the reset → probe* → hit cycle.
///
/// Informational only: the engine never rejects an operation because of
/// its phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// A location has been drawn and probes are expected.
    #[default]
    RoundInProgress,
    /// The item was found; the driver should reset the round.
    AwaitingReset,
}

/// Serializable point-in-time view of an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub container_count: usize,
    pub total_strikes: u32,
    pub item_location: ContainerId,
    pub missed_count: usize,
    pub strikes: u32,
    /// Containers probed and missed since the flags were last cleared.
    pub checked: SmallVec<[ContainerId; 8]>,
    pub phase: RoundPhase,
}

impl EngineSnapshot {
    /// Check if `id` is marked as already checked.
    #[must_use]
    pub fn is_checked(&self, id: ContainerId) -> bool {
        self.checked.contains(&id)
    }

    /// Score a hit would award right now, before strike reclassification.
    #[must_use]
    pub fn potential_score(&self) -> usize {
        self.container_count.saturating_sub(self.missed_count)
    }
}
