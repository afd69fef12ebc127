/// Ownership of mount containers: at most one live configurator per
/// container, and handles that know when they have been detached.
use std::collections::HashMap;

/// Attribute naming the mount that currently owns a container
pub const MOUNT_ATTR: &str = "data-pc3d-mount";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("configurator is no longer mounted")]
    Detached,
    #[error("container is not attached to a document")]
    NoDocument,
    #[error("2d canvas context unavailable")]
    NoCanvasContext,
}

/// Whether the container marker names mount `id`
pub fn owns_container(marker: Option<&str>, id: u32) -> bool {
    marker.and_then(|m| m.parse::<u32>().ok()) == Some(id)
}

/// Live mounts and whatever each one must release on detach
#[derive(Debug)]
pub struct Registry<T> {
    next_id: u32,
    live: HashMap<u32, T>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            live: HashMap::new(),
        }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register `id` as the owner of a container currently marked
    /// `marker`. Returns the evicted previous owner's entry, if it was
    /// still live.
    pub fn claim(&mut self, marker: Option<&str>, id: u32, entry: T) -> Option<T> {
        let evicted = marker
            .and_then(|m| m.parse::<u32>().ok())
            .filter(|&previous| previous != id)
            .and_then(|previous| self.live.remove(&previous));
        self.live.insert(id, entry);
        evicted
    }

    /// Remove mount `id`; `None` when it was already released or evicted
    pub fn release(&mut self, id: u32) -> Option<T> {
        self.live.remove(&id)
    }

    pub fn is_live(&self, id: u32) -> bool {
        self.live.contains_key(&id)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
