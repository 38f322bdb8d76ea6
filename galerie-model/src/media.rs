use crate::error::{ModelError, Result};
use crate::media_type::MediaType;
use crate::paths;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single media file as reported by the device media index.
///
/// `media_type` and `is_hidden` are derived on read rather than
/// stored, so a rebuilt tree can never disagree with the path or MIME
/// type it was built from.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaFile {
    pub id: Uuid,
    /// Absolute, pre-normalized path. Unique key within a snapshot.
    pub path: String,
    pub filename: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub mime_type: String,
    /// Opaque thumbnail reference supplied by the media index.
    pub thumbnail: Option<String>,
    /// Playable duration in seconds, for video and animated media.
    pub duration: Option<f64>,
}

impl MediaFile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        path: String,
        size: u64,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
        mime_type: String,
        thumbnail: Option<String>,
        duration: Option<f64>,
    ) -> Result<Self> {
        if !path.starts_with('/') {
            return Err(ModelError::InvalidPath(path));
        }
        let filename = paths::name_of(&path).to_string();
        if filename.is_empty() {
            return Err(ModelError::InvalidMedia(format!(
                "path has no filename segment: {path}"
            )));
        }

        Ok(Self {
            id: Uuid::now_v7(),
            path,
            filename,
            size,
            created_at,
            modified_at,
            mime_type,
            thumbnail,
            duration,
        })
    }

    pub fn media_type(&self) -> MediaType {
        MediaType::from_mime(&self.mime_type)
    }

    pub fn is_hidden(&self) -> bool {
        paths::is_hidden_path(&self.path)
    }

    pub fn parent_path(&self) -> Option<&str> {
        paths::parent_path(&self.path)
    }

    pub fn extension(&self) -> &str {
        paths::extension_of(&self.path).unwrap_or("")
    }
}
