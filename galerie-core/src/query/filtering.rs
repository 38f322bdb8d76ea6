use std::collections::HashSet;

use galerie_model::{Album, GalleryItem, MediaFile, MediaType};

use super::types::ItemFilters;

/// Apply the three filter stages in their fixed order: item type,
/// then visibility, then media type. Each stage keeps the union of
/// its enabled predicates over the previous stage's output and
/// deduplicates by path identity afterwards.
pub fn apply(items: Vec<GalleryItem>, filters: &ItemFilters) -> Vec<GalleryItem> {
    let items = stage(items, |item| match item {
        GalleryItem::Album(_) => filters.include_albums,
        GalleryItem::File(_) => filters.include_files,
    });
    let items = stage(items, |item| match item {
        GalleryItem::Album(album) => album_visible(album, filters),
        GalleryItem::File(file) => file_visible(file, filters),
    });
    stage(items, |item| match item {
        GalleryItem::Album(album) => album_has_enabled_type(album, filters),
        GalleryItem::File(file) => type_enabled(file.media_type(), filters),
    })
}

fn stage(
    items: Vec<GalleryItem>,
    keep: impl Fn(&GalleryItem) -> bool,
) -> Vec<GalleryItem> {
    let mut seen: HashSet<String> = HashSet::new();
    items
        .into_iter()
        .filter(|item| keep(item))
        .filter(|item| seen.insert(item.path().to_string()))
        .collect()
}

fn file_visible(file: &MediaFile, filters: &ItemFilters) -> bool {
    if file.is_hidden() {
        filters.include_hidden
    } else {
        filters.include_unhidden
    }
}

/// An album passes a visibility bucket only when its own visibility
/// flag matches and it actually holds at least one nested item of
/// that visibility. A non-hidden album with zero unhidden nested
/// items is not shown just for being non-hidden, and vice versa.
fn album_visible(album: &Album, filters: &ItemFilters) -> bool {
    (filters.include_unhidden
        && !album.is_hidden()
        && album.unhidden_count > 0)
        || (filters.include_hidden
            && album.is_hidden()
            && album.hidden_count > 0)
}

fn type_enabled(media_type: MediaType, filters: &ItemFilters) -> bool {
    match media_type {
        MediaType::Image => filters.include_images,
        MediaType::Video => filters.include_videos,
        MediaType::AnimatedImage => filters.include_gifs,
    }
}

/// An album survives the media-type stage when any enabled type has a
/// non-zero nested count.
fn album_has_enabled_type(album: &Album, filters: &ItemFilters) -> bool {
    (filters.include_images && album.count_of(MediaType::Image) > 0)
        || (filters.include_videos && album.count_of(MediaType::Video) > 0)
        || (filters.include_gifs && album.count_of(MediaType::AnimatedImage) > 0)
}
