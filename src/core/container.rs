//! Container identification.
//!
//! Containers are identity-only: an index in `0..container_count` and a
//! per-round "already checked" flag. The engine creates them once and
//! never resizes the set.
//!
//! ```
//! use shell_game::core::ContainerId;
//!
//! let id = ContainerId::new(2);
//! assert_eq!(id.index(), 2);
//! assert!(id.is_valid(3));
//! assert!(!id.is_valid(2));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a container, `0..container_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

impl ContainerId {
    /// Create a new container ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the ID as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this ID addresses a container in a set of `container_count`.
    #[must_use]
    pub const fn is_valid(self, container_count: usize) -> bool {
        self.index() < container_count
    }

    /// Iterate over all container IDs for `container_count` containers.
    pub fn all(container_count: usize) -> impl Iterator<Item = ContainerId> {
        (0..container_count as u32).map(ContainerId)
    }
}

impl From<u32> for ContainerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Container({})", self.0)
    }
}

/// A single container and its per-round bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Immutable identity.
    pub id: ContainerId,

    /// Probed and missed since the flags were last cleared.
    pub already_checked: bool,
}

impl Container {
    /// Create an unchecked container.
    #[must_use]
    pub const fn new(id: ContainerId) -> Self {
        Self {
            id,
            already_checked: false,
        }
    }
}
