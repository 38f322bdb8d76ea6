//! # Galerie Core
//!
//! Album aggregation and query engine for the Galerie gallery.
//!
//! The engine consumes a flat list of media file records from an
//! external media index, synthesizes a directory tree of albums
//! (including the empty intermediate directories needed for
//! navigation), computes deep aggregate metadata per album, and
//! answers listing and search queries with composable filter and sort
//! stages.
//!
//! ## Architecture
//!
//! - [`index`]: the media-index port and record normalizer
//! - [`tree`]: album tree synthesis and aggregation
//! - [`snapshot`]: immutable tree snapshots with atomic replacement
//! - [`query`]: per-request resolve → filter → sort evaluation
//! - [`engine`]: the facade tying rescans and queries together
//!
//! Rebuilds replace the current snapshot atomically; queries in
//! flight keep reading the snapshot they started with. The core
//! performs no filesystem I/O of its own.
//!
//! ## Example
//!
//! ```
//! use galerie_core::{GalleryConfig, GalleryEngine};
//! use galerie_core::query::ListRequest;
//!
//! let engine = GalleryEngine::new(GalleryConfig::default());
//! engine.rebuild(Vec::new());
//! let items = engine.query(&ListRequest::default());
//! assert!(items.is_empty());
//! ```
#![allow(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod prelude;
pub mod query;
pub mod snapshot;
pub mod tree;

pub use config::GalleryConfig;
pub use engine::{GalleryEngine, RescanSummary};
pub use error::{GalleryError, Result};
pub use index::{MediaIndex, RawFileRecord};
pub use snapshot::{LibrarySnapshot, SnapshotStore};
