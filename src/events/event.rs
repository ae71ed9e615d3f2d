//! Engine event types.
//!
//! Every externally observable state change of the engine is reported as an
//! [`EngineEvent`]. Events carry their own payload, so consumers never need
//! to read engine state while handling one.

use serde::{Deserialize, Serialize};

use crate::core::ContainerId;

/// Discriminant of an [`EngineEvent`], used to subscribe to one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    ItemReset,
    GameOver,
    ResetComplete,
    CheckingItem,
    SelectedItem,
    MatchMade,
    MatchNotMade,
    StartTurn,
}

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [EventKind; 8] = [
        EventKind::ItemReset,
        EventKind::GameOver,
        EventKind::ResetComplete,
        EventKind::CheckingItem,
        EventKind::SelectedItem,
        EventKind::MatchMade,
        EventKind::MatchNotMade,
        EventKind::StartTurn,
    ];
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// A notification emitted by the engine.
///
/// ## Round reset order
///
/// `ItemReset`, then `GameOver` (only when the strike threshold was
/// reached), then `ResetComplete`.
///
/// ## Probe order
///
/// `CheckingItem` always comes first. A hit continues with `SelectedItem`,
/// then either `MatchMade` or a strike `MatchNotMade`, then `StartTurn`.
/// A first miss on a container continues with a non-strike `MatchNotMade`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A round reset has begun.
    ItemReset,

    /// The strike threshold was reached. `strikes` is the total before it
    /// was cleared.
    GameOver { strikes: u32 },

    /// A new item location has been drawn.
    ResetComplete,

    /// A probe started on `id`.
    CheckingItem { id: ContainerId },

    /// The probe on `id` found the item.
    SelectedItem { id: ContainerId },

    /// The item was found with points to spare.
    MatchMade { id: ContainerId, score: usize },

    /// A miss, or a forced find that counts as a strike.
    MatchNotMade { is_strike: bool },

    /// The round is over; the driver should reset.
    StartTurn,
}

impl EngineEvent {
    /// The kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            EngineEvent::ItemReset => EventKind::ItemReset,
            EngineEvent::GameOver { .. } => EventKind::GameOver,
            EngineEvent::ResetComplete => EventKind::ResetComplete,
            EngineEvent::CheckingItem { .. } => EventKind::CheckingItem,
            EngineEvent::SelectedItem { .. } => EventKind::SelectedItem,
            EngineEvent::MatchMade { .. } => EventKind::MatchMade,
            EngineEvent::MatchNotMade { .. } => EventKind::MatchNotMade,
            EngineEvent::StartTurn => EventKind::StartTurn,
        }
    }

    /// The container this event is about, if any.
    #[must_use]
    pub const fn container(&self) -> Option<ContainerId> {
        match self {
            EngineEvent::CheckingItem { id }
            | EngineEvent::SelectedItem { id }
            | EngineEvent::MatchMade { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Check if this event records a strike.
    #[must_use]
    pub const fn is_strike(&self) -> bool {
        matches!(self, EngineEvent::MatchNotMade { is_strike: true })
    }
}
