use crate::media::MediaFile;
use crate::media_type::MediaType;
use crate::paths;
use chrono::{DateTime, Utc};

/// A synthesized directory node of the album tree.
///
/// An album exists for every directory that directly contains media
/// and for every ancestor of such a directory up to the storage root,
/// so navigation never encounters a file without a containing album
/// chain. Albums with zero own files connect descendants to the root.
///
/// The aggregate fields cover the album's own files plus every file
/// nested anywhere below it; they are recomputed from scratch on each
/// rebuild and default to zero values rather than being absent, which
/// keeps every sort key total.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Album {
    /// Absolute directory path. Unique key within a snapshot.
    pub path: String,
    /// Display name, normally the final path segment.
    pub name: String,
    /// Files whose immediate parent directory is this album.
    pub own_files: Vec<MediaFile>,
    /// Total byte size of own and nested files.
    pub size: u64,
    pub image_count: usize,
    pub video_count: usize,
    pub gif_count: usize,
    pub hidden_count: usize,
    pub unhidden_count: usize,
    /// Earliest creation time over own and nested files; epoch zero
    /// when the subtree holds no files.
    pub earliest_at: DateTime<Utc>,
    /// Latest modification time over own and nested files; epoch zero
    /// when the subtree holds no files.
    pub latest_at: DateTime<Utc>,
    /// Number of albums strictly below this one.
    pub nested_album_count: usize,
    /// Number of albums strictly below this one with at least one own
    /// file.
    pub nonempty_album_count: usize,
    /// Representative thumbnail reference, per the selection policy in
    /// the aggregator. Absent when the subtree holds no eligible file
    /// or the selected file carries no reference of its own.
    pub thumbnail: Option<String>,
}

impl Album {
    /// An album with no own files, synthesized to connect descendants
    /// to the root. Aggregates start at their zero defaults.
    pub fn empty_at(path: &str) -> Self {
        Self::with_own_files(path, Vec::new())
    }

    pub fn with_own_files(path: &str, own_files: Vec<MediaFile>) -> Self {
        Self {
            path: path.to_string(),
            name: paths::name_of(path).to_string(),
            own_files,
            size: 0,
            image_count: 0,
            video_count: 0,
            gif_count: 0,
            hidden_count: 0,
            unhidden_count: 0,
            earliest_at: DateTime::UNIX_EPOCH,
            latest_at: DateTime::UNIX_EPOCH,
            nested_album_count: 0,
            nonempty_album_count: 0,
            thumbnail: None,
        }
    }

    /// Hidden when any segment of the album path begins with a dot.
    pub fn is_hidden(&self) -> bool {
        paths::is_hidden_path(&self.path)
    }

    pub fn has_own_files(&self) -> bool {
        !self.own_files.is_empty()
    }

    /// Total own-plus-nested file count across all media types.
    pub fn file_count(&self) -> usize {
        self.image_count + self.video_count + self.gif_count
    }

    /// Own-plus-nested count for one media type.
    pub fn count_of(&self, media_type: MediaType) -> usize {
        match media_type {
            MediaType::Image => self.image_count,
            MediaType::Video => self.video_count,
            MediaType::AnimatedImage => self.gif_count,
        }
    }
}
