use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use galerie_model::{Album, MediaFile, MediaType, paths};

/// Populate every album's aggregate fields from the complete file
/// set: total size, per-type counts, visibility counts, timestamp
/// range, nested-album counts, and the representative thumbnail.
///
/// The pass is deliberately naive (albums × files); at mobile-gallery
/// scale that is well within budget and keeps the counting semantics
/// easy to audit. Aggregates cover an album's own files plus every
/// file nested below it, with own files excluded from the deep set so
/// nothing is counted twice.
pub fn aggregate_albums(
    albums: &mut BTreeMap<String, Album>,
    all_files: &[MediaFile],
) {
    // Path and own-file facts for the nested-album counts, captured
    // up front so the mutable sweep below owns its album exclusively.
    let album_info: Vec<(String, bool)> = albums
        .iter()
        .map(|(path, album)| (path.clone(), album.has_own_files()))
        .collect();

    for (path, album) in albums.iter_mut() {
        let deep: Vec<&MediaFile> = all_files
            .iter()
            .filter(|file| paths::is_within(&file.path, path))
            .filter(|file| file.parent_path() != Some(path.as_str()))
            .collect();

        let (totals, thumbnail) = {
            let own: Vec<&MediaFile> = album.own_files.iter().collect();
            let totals =
                Totals::over(own.iter().copied().chain(deep.iter().copied()));
            (totals, select_thumbnail(&own, &deep))
        };

        album.size = totals.size;
        album.image_count = totals.images;
        album.video_count = totals.videos;
        album.gif_count = totals.gifs;
        album.hidden_count = totals.hidden;
        album.unhidden_count = totals.unhidden;
        album.earliest_at = totals.earliest.unwrap_or(DateTime::UNIX_EPOCH);
        album.latest_at = totals.latest.unwrap_or(DateTime::UNIX_EPOCH);
        album.nested_album_count = album_info
            .iter()
            .filter(|(other, _)| paths::is_strictly_within(other, path))
            .count();
        album.nonempty_album_count = album_info
            .iter()
            .filter(|(other, has_own)| {
                *has_own && paths::is_strictly_within(other, path)
            })
            .count();
        album.thumbnail = thumbnail;
    }
}

#[derive(Default)]
struct Totals {
    size: u64,
    images: usize,
    videos: usize,
    gifs: usize,
    hidden: usize,
    unhidden: usize,
    earliest: Option<DateTime<Utc>>,
    latest: Option<DateTime<Utc>>,
}

impl Totals {
    fn over<'a>(files: impl Iterator<Item = &'a MediaFile>) -> Self {
        let mut totals = Totals::default();
        for file in files {
            totals.size += file.size;
            match file.media_type() {
                MediaType::Image => totals.images += 1,
                MediaType::Video => totals.videos += 1,
                MediaType::AnimatedImage => totals.gifs += 1,
            }
            if file.is_hidden() {
                totals.hidden += 1;
            } else {
                totals.unhidden += 1;
            }
            totals.earliest = Some(match totals.earliest {
                Some(current) => current.min(file.created_at),
                None => file.created_at,
            });
            totals.latest = Some(match totals.latest {
                Some(current) => current.max(file.modified_at),
                None => file.modified_at,
            });
        }
        totals
    }
}

/// Representative thumbnail selection: the first own file wins; an
/// album without own files falls back to its first nested non-hidden
/// file. Hidden descendants are never surfaced through an ancestor's
/// thumbnail. The selected file's opaque reference is carried over
/// as-is; a file without one leaves the album without one.
fn select_thumbnail(
    own: &[&MediaFile],
    deep: &[&MediaFile],
) -> Option<String> {
    if let Some(file) = own.first() {
        return file.thumbnail.clone();
    }
    deep.iter()
        .find(|file| !file.is_hidden())
        .and_then(|file| file.thumbnail.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::tree::build_album_map;
    use chrono::DateTime;

    fn file(path: &str, size: u64, mime: &str, ts: i64) -> MediaFile {
        MediaFile::new(
            path.to_string(),
            size,
            DateTime::from_timestamp(ts, 0).unwrap(),
            DateTime::from_timestamp(ts + 10, 0).unwrap(),
            mime.to_string(),
            None,
            None,
        )
        .unwrap()
    }

    fn thumbed(path: &str, thumb: &str) -> MediaFile {
        MediaFile::new(
            path.to_string(),
            1,
            DateTime::UNIX_EPOCH,
            DateTime::UNIX_EPOCH,
            "image/jpeg".to_string(),
            Some(thumb.to_string()),
            None,
        )
        .unwrap()
    }

    fn build(files: &[MediaFile]) -> BTreeMap<String, Album> {
        let mut albums = build_album_map(files, &GalleryConfig::default());
        aggregate_albums(&mut albums, files);
        albums
    }

    #[test]
    fn root_size_equals_total_of_all_files() {
        let files = vec![
            file("/storage/dcim/a.jpg", 100, "image/jpeg", 1_000),
            file("/storage/dcim/camera/b.mp4", 250, "video/mp4", 2_000),
            file("/storage/movies/c.gif", 50, "image/gif", 3_000),
        ];
        let albums = build(&files);
        assert_eq!(albums["/storage"].size, 400);
        assert_eq!(albums["/storage"].image_count, 1);
        assert_eq!(albums["/storage"].video_count, 1);
        assert_eq!(albums["/storage"].gif_count, 1);
    }

    #[test]
    fn deep_files_are_not_double_counted() {
        let files = vec![
            file("/storage/dcim/a.jpg", 100, "image/jpeg", 1_000),
            file("/storage/dcim/camera/b.jpg", 100, "image/jpeg", 2_000),
        ];
        let albums = build(&files);
        assert_eq!(albums["/storage/dcim"].image_count, 2);
        assert_eq!(albums["/storage/dcim"].size, 200);
        assert_eq!(albums["/storage/dcim/camera"].image_count, 1);
    }

    #[test]
    fn ancestor_counts_dominate_descendant_counts() {
        let files = vec![
            file("/storage/dcim/a.jpg", 1, "image/jpeg", 1_000),
            file("/storage/dcim/camera/b.jpg", 1, "image/jpeg", 1_000),
            file("/storage/dcim/camera/deep/c.jpg", 1, "image/jpeg", 1_000),
        ];
        let albums = build(&files);
        let parent = &albums["/storage/dcim"];
        for descendant in ["/storage/dcim/camera", "/storage/dcim/camera/deep"] {
            assert!(
                parent.image_count >= albums[descendant].own_files.len(),
                "aggregation must be monotonic for {descendant}"
            );
        }
    }

    #[test]
    fn timestamp_range_spans_own_and_nested() {
        let files = vec![
            file("/storage/dcim/a.jpg", 1, "image/jpeg", 5_000),
            file("/storage/dcim/camera/b.jpg", 1, "image/jpeg", 1_000),
        ];
        let albums = build(&files);
        let dcim = &albums["/storage/dcim"];
        assert_eq!(dcim.earliest_at.timestamp(), 1_000);
        assert_eq!(dcim.latest_at.timestamp(), 5_010);
    }

    #[test]
    fn empty_album_defaults_to_epoch_timestamps() {
        let files = vec![file("/storage/dcim/camera/a.jpg", 1, "image/jpeg", 1_000)];
        let albums = build(&files);
        // "/storage" has files nested below it, so pick a synthetic
        // set where an album truly has nothing: aggregate over none.
        let mut lone = BTreeMap::new();
        lone.insert("/storage/empty".to_string(), Album::empty_at("/storage/empty"));
        aggregate_albums(&mut lone, &[]);
        assert_eq!(lone["/storage/empty"].earliest_at, DateTime::UNIX_EPOCH);
        assert_eq!(lone["/storage/empty"].latest_at, DateTime::UNIX_EPOCH);
        assert_eq!(albums["/storage"].earliest_at.timestamp(), 1_000);
    }

    #[test]
    fn thumbnail_prefers_own_then_nested_nonhidden() {
        let files = vec![
            thumbed("/storage/dcim/.secret/h.jpg", "t-hidden"),
            thumbed("/storage/dcim/camera/visible.jpg", "t-visible"),
            thumbed("/storage/dcim/camera/second.jpg", "t-second"),
        ];
        let albums = build(&files);
        // Own file wins where present.
        assert_eq!(
            albums["/storage/dcim/camera"].thumbnail.as_deref(),
            Some("t-visible")
        );
        // No own files: first nested non-hidden file, never the
        // hidden descendant even though it sorts first.
        assert_eq!(
            albums["/storage/dcim"].thumbnail.as_deref(),
            Some("t-visible")
        );
    }

    #[test]
    fn hidden_only_subtree_leaves_thumbnail_empty() {
        let files = vec![thumbed("/storage/dcim/.secret/h.jpg", "t-hidden")];
        let albums = build(&files);
        assert_eq!(albums["/storage/dcim"].thumbnail, None);
        // The hidden album itself still shows its own file.
        assert_eq!(
            albums["/storage/dcim/.secret"].thumbnail.as_deref(),
            Some("t-hidden")
        );
    }

    #[test]
    fn file_without_a_reference_leaves_the_album_without_one() {
        // The selected file carries no opaque reference, so neither
        // does its album; absence propagates rather than inventing a
        // substitute.
        let files = vec![
            file("/storage/dcim/bare.jpg", 1, "image/jpeg", 1_000),
            file("/storage/dcim/camera/also_bare.jpg", 1, "image/jpeg", 1_000),
        ];
        let albums = build(&files);
        assert_eq!(albums["/storage/dcim"].thumbnail, None);
        assert_eq!(albums["/storage"].thumbnail, None);
    }

    #[test]
    fn nested_album_counts() {
        let files = vec![
            file("/storage/dcim/a.jpg", 1, "image/jpeg", 1_000),
            file("/storage/dcim/camera/b.jpg", 1, "image/jpeg", 1_000),
            file("/storage/dcim/camera/deep/c.jpg", 1, "image/jpeg", 1_000),
        ];
        let albums = build(&files);
        assert_eq!(albums["/storage"].nested_album_count, 3);
        assert_eq!(albums["/storage"].nonempty_album_count, 3);
        assert_eq!(albums["/storage/dcim"].nested_album_count, 2);
        assert_eq!(albums["/storage/dcim/camera"].nested_album_count, 1);
    }

    #[test]
    fn visibility_counts_split_hidden_and_unhidden() {
        let files = vec![
            file("/storage/dcim/a.jpg", 1, "image/jpeg", 1_000),
            file("/storage/dcim/.hidden/b.jpg", 1, "image/jpeg", 1_000),
        ];
        let albums = build(&files);
        assert_eq!(albums["/storage/dcim"].hidden_count, 1);
        assert_eq!(albums["/storage/dcim"].unhidden_count, 1);
    }
}
