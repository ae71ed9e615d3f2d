//! Running score bookkeeping.
//!
//! The engine only reports a per-hit score. `ScoreKeeper` turns the event
//! stream into a running total, a best total and the strike marks shown to
//! the player.

use serde::{Deserialize, Serialize};

use crate::events::EngineEvent;

/// Accumulates score across rounds from engine events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    /// Score accumulated this session.
    pub total: usize,

    /// Highest total seen, including sessions that ended.
    pub best: usize,

    /// Strikes marked this session.
    pub strike_marks: u32,

    /// Whether the strike banner should be showing.
    ///
    /// Raised by a strike, lowered when the next probe starts.
    pub strike_banner_visible: bool,

    /// Sessions ended by game over.
    pub games_played: u32,
}

impl ScoreKeeper {
    /// Create an empty keeper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keeper that starts from a previously reached best score.
    pub fn with_best(best: usize) -> Self {
        Self {
            best,
            ..Self::default()
        }
    }

    /// Apply one engine event.
    pub fn observe(&mut self, event: &EngineEvent) {
        match *event {
            EngineEvent::MatchMade { score, .. } => {
                self.total += score;
                self.best = self.best.max(self.total);
            }
            EngineEvent::MatchNotMade { is_strike: true } => {
                self.strike_marks += 1;
                self.strike_banner_visible = true;
            }
            EngineEvent::CheckingItem { .. } => {
                self.strike_banner_visible = false;
            }
            EngineEvent::GameOver { .. } => {
                self.best = self.best.max(self.total);
                self.total = 0;
                self.strike_marks = 0;
                self.games_played += 1;
            }
            _ => {}
        }
    }

    /// Apply a batch of events in order.
    pub fn observe_all<'a>(&mut self, events: impl IntoIterator<Item = &'a EngineEvent>) {
        for event in events {
            self.observe(event);
        }
    }

    /// Strike marks rendered as `X` characters.
    #[must_use]
    pub fn strike_text(&self) -> String {
        "X".repeat(self.strike_marks as usize)
    }
}
