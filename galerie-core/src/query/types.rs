use serde::{Deserialize, Serialize};

/// A listing or search request against the current snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListRequest {
    /// Directory to list under; `None` means the whole collection in
    /// flat mode and the configured gallery root in tree mode.
    pub base_path: Option<String>,
    /// Non-empty search string switches resolution to search.
    pub search: Option<String>,
    pub mode: ListMode,
    pub filters: ItemFilters,
    pub sort: SortCriteria,
}

/// How the collection is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Flattened list of all non-empty albums, or one album's files.
    #[default]
    Flat,
    /// One directory level at a time.
    Tree,
}

/// Item inclusion filters, applied in fixed stage order: item type,
/// then visibility, then media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilters {
    pub include_albums: bool,
    pub include_files: bool,
    pub include_images: bool,
    pub include_videos: bool,
    pub include_gifs: bool,
    pub include_hidden: bool,
    pub include_unhidden: bool,
}

impl Default for ItemFilters {
    fn default() -> Self {
        Self {
            include_albums: true,
            include_files: true,
            include_images: true,
            include_videos: true,
            include_gifs: true,
            include_hidden: false,
            include_unhidden: true,
        }
    }
}

impl ItemFilters {
    /// Everything enabled, hidden items included.
    pub fn everything() -> Self {
        Self {
            include_hidden: true,
            ..Self::default()
        }
    }
}

/// Sort criteria: key, direction, and the tie-break placement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortCriteria {
    pub key: SortKey,
    /// Reverses the entire ordered sequence, applied after the
    /// primary ordering and before placement.
    pub descending: bool,
    pub place_first: PlaceFirst,
}

/// Fields available for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    /// Orders files by extension; albums keep their prior relative
    /// order and follow the files.
    Extension,
    Size,
    DateCreated,
    DateModified,
    /// One-time shuffle, not reproducible across calls.
    Random,
}

/// Post-sort grouping that moves one item kind to the front while
/// preserving relative order within each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlaceFirst {
    #[default]
    None,
    AlbumsFirst,
    FilesFirst,
}
