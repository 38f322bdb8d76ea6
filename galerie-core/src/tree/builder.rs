use std::collections::BTreeMap;

use galerie_model::{Album, MediaFile, paths};
use tracing::warn;

use crate::config::GalleryConfig;

/// Group files by parent directory and synthesize every missing
/// ancestor directory up to the configured storage root.
///
/// The resulting map holds exactly one album per distinct directory
/// that is either the direct parent of some file or an ancestor of
/// such a directory. The ancestor walk stops once it has inserted the
/// storage root and never creates an album for the filesystem root
/// sentinel `/`. Files whose path yields no parent directory cannot
/// be assigned an album and are dropped.
///
/// Aggregate fields are left at their zero defaults; the aggregator
/// fills them afterwards.
pub fn build_album_map(
    files: &[MediaFile],
    config: &GalleryConfig,
) -> BTreeMap<String, Album> {
    let mut grouped: BTreeMap<String, Vec<MediaFile>> = BTreeMap::new();
    let mut dropped = 0usize;
    for file in files {
        match file.parent_path() {
            Some(parent) => grouped
                .entry(parent.to_string())
                .or_default()
                .push(file.clone()),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(dropped, "files without a parent directory were left out of the tree");
    }

    let mut albums: BTreeMap<String, Album> = BTreeMap::new();
    let parents: Vec<String> = grouped.keys().cloned().collect();
    for (dir, own_files) in grouped {
        let album = Album::with_own_files(&dir, own_files);
        albums.insert(dir, album);
    }

    for dir in parents {
        let mut current = dir;
        loop {
            if current == config.storage_root {
                break;
            }
            // `/` is the sentinel terminating the walk; it never
            // becomes an album of its own.
            let parent = match paths::parent_path(&current) {
                Some(parent) if parent != "/" => parent.to_string(),
                _ => break,
            };
            albums
                .entry(parent.clone())
                .or_insert_with(|| Album::empty_at(&parent));
            current = parent;
        }
    }

    if let Some(root) = albums.get_mut(&config.storage_root) {
        root.name = config.root_label.clone();
    }

    albums
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn file(path: &str) -> MediaFile {
        MediaFile::new(
            path.to_string(),
            100,
            DateTime::UNIX_EPOCH,
            DateTime::UNIX_EPOCH,
            "image/jpeg".to_string(),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn synthesizes_missing_ancestors_up_to_storage_root() {
        let files = vec![file("/storage/dcim/camera/img.jpg")];
        let albums = build_album_map(&files, &GalleryConfig::default());

        let mut paths: Vec<&str> = albums.keys().map(String::as_str).collect();
        paths.sort_unstable();
        assert_eq!(
            paths,
            ["/storage", "/storage/dcim", "/storage/dcim/camera"]
        );
        assert!(albums["/storage/dcim/camera"].has_own_files());
        assert!(!albums["/storage/dcim"].has_own_files());
        assert!(!albums["/storage"].has_own_files());
    }

    #[test]
    fn no_album_for_the_root_sentinel() {
        let files = vec![file("/other/tree/pic.png")];
        let albums = build_album_map(&files, &GalleryConfig::default());
        assert!(!albums.contains_key("/"));
        assert!(albums.contains_key("/other"));
        assert!(albums.contains_key("/other/tree"));
    }

    #[test]
    fn own_files_land_on_their_direct_parent_only() {
        let files = vec![
            file("/storage/dcim/a.jpg"),
            file("/storage/dcim/camera/b.jpg"),
        ];
        let albums = build_album_map(&files, &GalleryConfig::default());
        assert_eq!(albums["/storage/dcim"].own_files.len(), 1);
        assert_eq!(albums["/storage/dcim/camera"].own_files.len(), 1);
    }

    #[test]
    fn storage_root_album_takes_the_configured_label() {
        let files = vec![file("/storage/pic.jpg")];
        let albums = build_album_map(&files, &GalleryConfig::default());
        assert_eq!(albums["/storage"].name, "Internal storage");
    }

    #[test]
    fn rebuild_of_identical_input_yields_identical_map() {
        let files = vec![
            file("/storage/dcim/a.jpg"),
            file("/storage/movies/clip.jpg"),
        ];
        let first = build_album_map(&files, &GalleryConfig::default());
        let second = build_album_map(&files, &GalleryConfig::default());
        let first_keys: Vec<_> = first.keys().collect();
        let second_keys: Vec<_> = second.keys().collect();
        assert_eq!(first_keys, second_keys);
    }
}
