//! Convenience re-exports for engine consumers.

pub use crate::config::GalleryConfig;
pub use crate::engine::{GalleryEngine, RescanSummary};
pub use crate::error::{GalleryError, Result};
pub use crate::index::{MediaIndex, RawFileRecord};
pub use crate::query::{
    ItemFilters, ListMode, ListRequest, PlaceFirst, SortCriteria, SortKey,
};
pub use crate::snapshot::{LibrarySnapshot, SnapshotStore};
pub use galerie_model::prelude::*;
