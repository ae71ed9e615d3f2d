//! Core engine types: containers, RNG, configuration, errors.
//!
//! These are the building blocks the engine is assembled from. Nothing
//! here knows about rounds or scoring.

pub mod config;
pub mod container;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_CONTAINER_COUNT, DEFAULT_TOTAL_STRIKES};
pub use container::{Container, ContainerId};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
