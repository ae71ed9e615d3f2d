//! # shell-game
//!
//! A find-the-hidden-item (shell game) turn engine.
//!
//! ## Rules
//!
//! 1. **Rounds**: Each round hides the item under one of N containers,
//!    drawn uniformly at random.
//!
//! 2. **Scoring**: Finding it on the first probe scores N, and every
//!    distinct miss before the find costs one point.
//!
//! 3. **Strikes**: Finding it only after every other container was missed
//!    scores nothing and counts as a strike. Reaching the strike threshold
//!    ends the session at the next round reset.
//!
//! ## Architecture
//!
//! - **Synchronous events**: Every observable change is an `EngineEvent`,
//!   delivered inline to listeners and optionally journaled for drivers
//!   that prefer a message loop.
//!
//! - **Injectable randomness**: The engine draws through `RandomSource`, so
//!   tests script the hidden location exactly.
//!
//! ## Modules
//!
//! - `core`: Container IDs, RNG, configuration, errors
//! - `events`: Engine events and the listener registry
//! - `engine`: The `ShellGame` engine
//! - `session`: Score keeping and a reference driver

pub mod core;
pub mod engine;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Container, ContainerId, EngineConfig, EngineError, GameRng, GameRngState, RandomSource,
    ScriptedRng,
};

pub use crate::engine::{EngineSnapshot, RoundPhase, ShellGame};

pub use crate::events::{EngineEvent, EventKind, ListenerId, ListenerRegistry};

pub use crate::session::{ProbeReport, ScoreKeeper, Session};
