//! Engine error types.

use thiserror::Error;

use super::ContainerId;

/// Errors raised by engine construction and probing.
///
/// The engine performs no I/O, so every variant is a caller contract
/// violation rather than a transient failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Container count must be at least 1.
    #[error("container count must be at least 1, got {0}")]
    InvalidContainerCount(usize),

    /// Strike threshold must be at least 1.
    #[error("strike threshold must be at least 1, got {0}")]
    InvalidStrikeThreshold(u32),

    /// Probe addressed a container outside `0..container_count`.
    #[error("{id} is out of range for {container_count} containers")]
    ContainerOutOfRange {
        id: ContainerId,
        container_count: usize,
    },
}
