#![allow(dead_code)]

use galerie_core::index::{self, RawFileRecord};
use galerie_core::{GalleryConfig, GalleryEngine};
use galerie_model::MediaFile;

/// Route engine logs through the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn raw(path: &str, size: u64, mime: &str, ts: i64) -> RawFileRecord {
    RawFileRecord {
        path: path.to_string(),
        size,
        created_ts: ts,
        modified_ts: ts + 60,
        mime_type: mime.to_string(),
        thumbnail: None,
        duration: None,
    }
}

pub fn media(path: &str, size: u64, mime: &str, ts: i64) -> MediaFile {
    index::normalize(raw(path, size, mime, ts)).expect("fixture path must be valid")
}

pub fn engine_with(files: Vec<MediaFile>) -> GalleryEngine {
    let engine = GalleryEngine::new(GalleryConfig::default());
    engine.rebuild(files);
    engine
}

/// A small but representative gallery: nested camera folders, a
/// screenshots folder, a mixed video/GIF folder, and a hidden folder.
pub fn fixture_files() -> Vec<MediaFile> {
    vec![
        media("/storage/dcim/note.jpg", 10, "image/jpeg", 1_000),
        media("/storage/dcim/camera/img_001.jpg", 100, "image/jpeg", 2_000),
        media("/storage/dcim/camera/img_002.png", 120, "image/png", 3_000),
        media("/storage/dcim/camera/clip.mp4", 900, "video/mp4", 4_000),
        media(
            "/storage/dcim/camera/vacation/beach.jpg",
            150,
            "image/jpeg",
            5_000,
        ),
        media("/storage/dcim/screenshots/shot.png", 40, "image/png", 6_000),
        media("/storage/movies/holiday.mp4", 2_000, "video/mp4", 7_000),
        media("/storage/movies/loop.gif", 60, "image/gif", 8_000),
        media("/storage/.private/secret.jpg", 30, "image/jpeg", 9_000),
    ]
}

pub fn fixture_engine() -> GalleryEngine {
    engine_with(fixture_files())
}
