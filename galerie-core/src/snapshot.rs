use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use galerie_model::{Album, MediaFile};

/// One complete, immutable rebuild of the album tree.
///
/// Albums are keyed by directory path in a `BTreeMap` so iteration
/// order is the lexicographic path order, which keeps query
/// resolution deterministic across rebuilds of identical input.
#[derive(Debug, Clone)]
pub struct LibrarySnapshot {
    pub albums: BTreeMap<String, Album>,
    /// Every normalized file of the snapshot, in media-index order.
    pub files: Vec<MediaFile>,
    pub built_at: DateTime<Utc>,
}

impl LibrarySnapshot {
    pub fn empty() -> Self {
        Self {
            albums: BTreeMap::new(),
            files: Vec::new(),
            built_at: Utc::now(),
        }
    }

    pub fn album(&self, path: &str) -> Option<&Album> {
        self.albums.get(path)
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Owner of the current snapshot.
///
/// Rebuilds replace the snapshot atomically; readers clone the `Arc`
/// and keep evaluating against whatever snapshot they loaded, even
/// while a rescan swaps in a newer one. The lock is held only for the
/// pointer swap, never across evaluation.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<LibrarySnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(LibrarySnapshot::empty())),
        }
    }

    /// The current snapshot. A poisoned lock still yields the last
    /// value written; snapshots are immutable so it is always intact.
    pub fn load(&self) -> Arc<LibrarySnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Swap in a freshly built snapshot, returning the shared handle.
    pub fn replace(&self, snapshot: LibrarySnapshot) -> Arc<LibrarySnapshot> {
        let snapshot = Arc::new(snapshot);
        match self.current.write() {
            Ok(mut guard) => *guard = Arc::clone(&snapshot),
            Err(poisoned) => *poisoned.into_inner() = Arc::clone(&snapshot),
        }
        snapshot
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
