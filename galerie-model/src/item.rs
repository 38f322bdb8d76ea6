use crate::album::Album;
use crate::media::MediaFile;
use chrono::{DateTime, Utc};

/// Tagged union of the two item kinds a query can return.
///
/// Item-type-specific behaviour (filters, sort placement) matches on
/// this exhaustively; there is no third kind.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryItem {
    Album(Album),
    File(MediaFile),
}

impl GalleryItem {
    pub fn path(&self) -> &str {
        match self {
            GalleryItem::Album(album) => &album.path,
            GalleryItem::File(file) => &file.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GalleryItem::Album(album) => &album.name,
            GalleryItem::File(file) => &file.filename,
        }
    }

    /// Byte size: the file's size, or the album's deep total.
    pub fn size(&self) -> u64 {
        match self {
            GalleryItem::Album(album) => album.size,
            GalleryItem::File(file) => file.size,
        }
    }

    /// Creation-time sort key: the file's creation time, or the
    /// album's earliest aggregate timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            GalleryItem::Album(album) => album.earliest_at,
            GalleryItem::File(file) => file.created_at,
        }
    }

    /// Modification-time sort key: the file's modification time, or
    /// the album's latest aggregate timestamp.
    pub fn modified_at(&self) -> DateTime<Utc> {
        match self {
            GalleryItem::Album(album) => album.latest_at,
            GalleryItem::File(file) => file.modified_at,
        }
    }

    pub fn is_album(&self) -> bool {
        matches!(self, GalleryItem::Album(_))
    }

    pub fn as_album(&self) -> Option<&Album> {
        match self {
            GalleryItem::Album(album) => Some(album),
            GalleryItem::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&MediaFile> {
        match self {
            GalleryItem::Album(_) => None,
            GalleryItem::File(file) => Some(file),
        }
    }
}
