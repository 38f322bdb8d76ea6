use galerie_model::{Album, GalleryItem, MediaFile, paths};

use super::types::{ListMode, ListRequest};
use crate::config::GalleryConfig;
use crate::snapshot::LibrarySnapshot;

/// Resolve the candidate item list for a request: search when a
/// non-empty query string is present, otherwise the flat or tree
/// listing for the requested base path.
pub fn resolve(
    snapshot: &LibrarySnapshot,
    config: &GalleryConfig,
    request: &ListRequest,
) -> Vec<GalleryItem> {
    let search = request
        .search
        .as_deref()
        .map(str::trim)
        .filter(|query| !query.is_empty());

    if let Some(query) = search {
        return match request.mode {
            ListMode::Flat => {
                plain_search(snapshot, request.base_path.as_deref(), query)
            }
            ListMode::Tree => {
                tree_search(snapshot, base_path(request, config), query)
            }
        };
    }

    match request.mode {
        ListMode::Flat => match request.base_path.as_deref() {
            None => nonempty_albums(snapshot),
            Some(base) => own_files(snapshot, base),
        },
        ListMode::Tree => tree_listing(snapshot, base_path(request, config)),
    }
}

fn base_path<'a>(request: &'a ListRequest, config: &'a GalleryConfig) -> &'a str {
    request
        .base_path
        .as_deref()
        .unwrap_or(&config.gallery_root)
}

/// Flat mode without a base: every album holding at least one own
/// file. Empty intermediate albums exist only for navigation and are
/// not part of the flat list.
fn nonempty_albums(snapshot: &LibrarySnapshot) -> Vec<GalleryItem> {
    snapshot
        .albums
        .values()
        .filter(|album| album.has_own_files())
        .cloned()
        .map(GalleryItem::Album)
        .collect()
}

/// Flat mode with a base: that album's own files only.
fn own_files(snapshot: &LibrarySnapshot, base: &str) -> Vec<GalleryItem> {
    snapshot
        .album(base)
        .map(|album| {
            album
                .own_files
                .iter()
                .cloned()
                .map(GalleryItem::File)
                .collect()
        })
        .unwrap_or_default()
}

/// Tree mode: the base album's own files plus its immediate child
/// albums. Deeper descendants stay behind their direct ancestor.
fn tree_listing(snapshot: &LibrarySnapshot, base: &str) -> Vec<GalleryItem> {
    let mut items = own_files(snapshot, base);
    items.extend(
        snapshot
            .albums
            .values()
            .filter(|album| paths::is_direct_child(&album.path, base))
            .cloned()
            .map(GalleryItem::Album),
    );
    items
}

/// Plain search: albums and files whose path contains the query,
/// case-insensitively, optionally restricted to a base path. Files
/// already inside a matched album are left out so a file is never
/// represented both directly and through its album.
fn plain_search(
    snapshot: &LibrarySnapshot,
    base: Option<&str>,
    query: &str,
) -> Vec<GalleryItem> {
    let needle = query.to_lowercase();
    let in_scope = |path: &str| base.is_none_or(|b| paths::is_within(path, b));

    let matched_albums: Vec<&Album> = snapshot
        .albums
        .values()
        .filter(|album| in_scope(&album.path))
        .filter(|album| album.path.to_lowercase().contains(&needle))
        .collect();

    let mut items: Vec<GalleryItem> = matched_albums
        .iter()
        .map(|album| GalleryItem::Album((*album).clone()))
        .collect();

    for file in &snapshot.files {
        if !in_scope(&file.path)
            || !file.path.to_lowercase().contains(&needle)
        {
            continue;
        }
        let covered = matched_albums
            .iter()
            .any(|album| paths::is_within(&file.path, &album.path));
        if !covered {
            items.push(GalleryItem::File(file.clone()));
        }
    }
    items
}

/// Tree search with nearest-ancestor promotion.
///
/// Candidate albums sit strictly below the base; those with a
/// matching own file are promoted to their topmost matching ancestor
/// within the candidate set, with fewest path separators winning, so
/// one representative surfaces per matching subtree. Matching own
/// files of the base directory itself join the result directly.
///
/// Paths are assumed normalized; the separator-count tie-break is not
/// meaningful otherwise.
fn tree_search(
    snapshot: &LibrarySnapshot,
    base: &str,
    query: &str,
) -> Vec<GalleryItem> {
    let needle = query.to_lowercase();
    let matches =
        |file: &MediaFile| file.filename.to_lowercase().contains(&needle);

    let matched: Vec<&Album> = snapshot
        .albums
        .values()
        .filter(|album| paths::is_strictly_within(&album.path, base))
        .filter(|album| album.own_files.iter().any(|file| matches(file)))
        .collect();

    let mut items: Vec<GalleryItem> = Vec::new();
    for album in &matched {
        let representative = matched
            .iter()
            .filter(|ancestor| paths::is_within(&album.path, &ancestor.path))
            .min_by_key(|ancestor| paths::separator_count(&ancestor.path))
            .copied()
            .unwrap_or(*album);
        if !items.iter().any(|item| item.path() == representative.path) {
            items.push(GalleryItem::Album(representative.clone()));
        }
    }

    if let Some(base_album) = snapshot.album(base) {
        items.extend(
            base_album
                .own_files
                .iter()
                .filter(|file| matches(file))
                .cloned()
                .map(GalleryItem::File),
        );
    }
    items
}
