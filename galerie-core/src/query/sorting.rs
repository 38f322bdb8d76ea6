use std::cmp::Ordering;

use galerie_model::GalleryItem;
use rand::seq::SliceRandom;

use super::types::{PlaceFirst, SortCriteria, SortKey};

/// Order the filtered list: stable primary ordering by the requested
/// key, an optional full-sequence reverse, then the place-first
/// partition. The reverse deliberately covers the whole sequence —
/// for the extension key that includes the trailing album segment,
/// not just the sorted files.
pub fn apply(mut items: Vec<GalleryItem>, sort: &SortCriteria) -> Vec<GalleryItem> {
    match sort.key {
        SortKey::Name => items.sort_by(compare_names),
        SortKey::Size => items.sort_by(|a, b| a.size().cmp(&b.size())),
        SortKey::DateCreated => {
            items.sort_by(|a, b| a.created_at().cmp(&b.created_at()))
        }
        SortKey::DateModified => {
            items.sort_by(|a, b| a.modified_at().cmp(&b.modified_at()))
        }
        SortKey::Extension => items = extension_sort(items),
        SortKey::Random => items.shuffle(&mut rand::rng()),
    }

    if sort.descending {
        items.reverse();
    }

    match sort.place_first {
        PlaceFirst::None => items,
        PlaceFirst::AlbumsFirst => place(items, true),
        PlaceFirst::FilesFirst => place(items, false),
    }
}

fn compare_names(a: &GalleryItem, b: &GalleryItem) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

/// Extension ordering applies to files only; albums keep their prior
/// relative order and follow the sorted files.
fn extension_sort(items: Vec<GalleryItem>) -> Vec<GalleryItem> {
    let (mut files, albums): (Vec<GalleryItem>, Vec<GalleryItem>) =
        items.into_iter().partition(|item| !item.is_album());
    files.sort_by(|a, b| {
        let ext_a = a.as_file().map(|f| f.extension().to_lowercase());
        let ext_b = b.as_file().map(|f| f.extension().to_lowercase());
        ext_a.cmp(&ext_b)
    });
    files.extend(albums);
    files
}

/// Partition into albums and files preserving each group's relative
/// order, then concatenate in the requested group order.
fn place(items: Vec<GalleryItem>, albums_first: bool) -> Vec<GalleryItem> {
    let (mut albums, mut files): (Vec<GalleryItem>, Vec<GalleryItem>) =
        items.into_iter().partition(GalleryItem::is_album);
    if albums_first {
        albums.append(&mut files);
        albums
    } else {
        files.append(&mut albums);
        files
    }
}
