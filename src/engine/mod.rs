//! The shell game turn engine.
//!
//! - `shell_game`: Round lifecycle, probing, scoring and strikes
//! - `snapshot`: Serializable views of engine state

pub mod shell_game;
pub mod snapshot;

pub use shell_game::ShellGame;
pub use snapshot::{EngineSnapshot, RoundPhase};
