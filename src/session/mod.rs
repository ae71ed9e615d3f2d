//! Driving the engine through a session.
//!
//! The engine leaves score accumulation and round sequencing to its caller.
//! This module provides both as ready-made consumers:
//!
//! - `score_keeper`: Running total, best total and strike marks
//! - `driver`: [`Session`], which owns an engine and resets after each hit

pub mod driver;
pub mod score_keeper;

pub use driver::{ProbeReport, Session};
pub use score_keeper::ScoreKeeper;
