use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use galerie_model::{GalleryItem, MediaFile};
use tracing::{debug, info};

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::index::{self, MediaIndex};
use crate::query::{self, ListRequest};
use crate::snapshot::{LibrarySnapshot, SnapshotStore};
use crate::tree;

/// Outcome of a completed rescan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RescanSummary {
    pub file_count: usize,
    pub album_count: usize,
    pub elapsed: Duration,
}

/// The album aggregation and query engine.
///
/// A rescan rebuilds the whole tree from the latest flat file list
/// and swaps it in atomically; queries evaluate against whichever
/// snapshot is current when they start. The engine owns no background
/// machinery: rescans happen when the caller triggers them.
#[derive(Debug)]
pub struct GalleryEngine {
    config: GalleryConfig,
    store: SnapshotStore,
}

impl GalleryEngine {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            store: SnapshotStore::new(),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// The current snapshot handle. Stays valid for the holder even
    /// after later rescans replace it.
    pub fn snapshot(&self) -> Arc<LibrarySnapshot> {
        self.store.load()
    }

    /// Pull the latest flat file list from the media index and
    /// rebuild. The rebuild itself runs on the blocking pool since
    /// its cost grows with the file count.
    pub async fn rescan(&self, media_index: &dyn MediaIndex) -> Result<RescanSummary> {
        let records = media_index.files().await?;
        let files = index::normalize_records(records);

        let config = self.config.clone();
        let (snapshot, summary) =
            tokio::task::spawn_blocking(move || build_snapshot(&config, files))
                .await
                .map_err(|join_error| {
                    GalleryError::Internal(format!(
                        "rebuild task failed: {join_error}"
                    ))
                })?;

        self.store.replace(snapshot);
        info!(
            files = summary.file_count,
            albums = summary.album_count,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "rescan complete"
        );
        Ok(summary)
    }

    /// Rebuild synchronously from an already-normalized file list and
    /// swap the snapshot in.
    pub fn rebuild(&self, files: Vec<MediaFile>) -> RescanSummary {
        let (snapshot, summary) = build_snapshot(&self.config, files);
        self.store.replace(snapshot);
        info!(
            files = summary.file_count,
            albums = summary.album_count,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "rebuild complete"
        );
        summary
    }

    /// Evaluate a query against the current snapshot. Empty results
    /// are normal values; the query path never errors.
    pub fn query(&self, request: &ListRequest) -> Vec<GalleryItem> {
        let snapshot = self.store.load();
        let items = query::evaluate(&snapshot, &self.config, request);
        debug!(
            mode = ?request.mode,
            base = request.base_path.as_deref().unwrap_or("<none>"),
            searching = request.search.is_some(),
            results = items.len(),
            "query evaluated"
        );
        items
    }
}

fn build_snapshot(
    config: &GalleryConfig,
    files: Vec<MediaFile>,
) -> (LibrarySnapshot, RescanSummary) {
    let started = Instant::now();
    let mut albums = tree::build_album_map(&files, config);
    tree::aggregate_albums(&mut albums, &files);
    let snapshot = LibrarySnapshot {
        albums,
        files,
        built_at: Utc::now(),
    };
    let summary = RescanSummary {
        file_count: snapshot.file_count(),
        album_count: snapshot.album_count(),
        elapsed: started.elapsed(),
    };
    (snapshot, summary)
}
