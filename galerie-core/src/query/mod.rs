//! Per-request query evaluation.
//!
//! A request is evaluated in a fixed three-stage composition against
//! one immutable snapshot: resolve the candidate item list (flat,
//! tree, or search), run it through the filter pipeline, then order
//! it in the sort stage. None of the stages mutate shared state, so
//! any number of queries may evaluate concurrently against the same
//! snapshot.

pub mod filtering;
pub mod resolve;
pub mod sorting;
pub mod types;

pub use types::{
    ItemFilters, ListMode, ListRequest, PlaceFirst, SortCriteria, SortKey,
};

use galerie_model::GalleryItem;

use crate::config::GalleryConfig;
use crate::snapshot::LibrarySnapshot;

/// Evaluate one request against one snapshot. Pure function of the
/// snapshot; an empty result is a normal outcome, never an error.
pub fn evaluate(
    snapshot: &LibrarySnapshot,
    config: &GalleryConfig,
    request: &ListRequest,
) -> Vec<GalleryItem> {
    let resolved = resolve::resolve(snapshot, config, request);
    let filtered = filtering::apply(resolved, &request.filters);
    sorting::apply(filtered, &request.sort)
}
