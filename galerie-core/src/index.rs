use async_trait::async_trait;
use chrono::{DateTime, Utc};
use galerie_model::MediaFile;
use tracing::warn;

use crate::error::Result;

/// Flat file record as supplied by the device media index
/// collaborator. Timestamps are epoch seconds; the thumbnail
/// reference is opaque to the engine.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawFileRecord {
    pub path: String,
    pub size: u64,
    pub created_ts: i64,
    pub modified_ts: i64,
    pub mime_type: String,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
}

/// Port to the external media index that owns device scanning and
/// filesystem access. The engine only ever pulls a complete flat
/// list; a collaborator that has lost permission to read the index
/// substitutes an empty list upstream rather than failing queries.
#[async_trait]
pub trait MediaIndex: Send + Sync {
    async fn files(&self) -> Result<Vec<RawFileRecord>>;
}

/// Normalize raw records into the in-memory model representation.
/// Records with invalid paths are dropped; the file set is
/// best-effort by contract.
pub fn normalize_records(records: Vec<RawFileRecord>) -> Vec<MediaFile> {
    let mut files = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        match normalize(record) {
            Ok(file) => files.push(file),
            Err(error) => {
                dropped += 1;
                warn!(%error, "dropping malformed media record");
            }
        }
    }
    if dropped > 0 {
        warn!(dropped, kept = files.len(), "media index supplied malformed records");
    }
    files
}

/// Normalize one raw record.
pub fn normalize(record: RawFileRecord) -> Result<MediaFile> {
    let file = MediaFile::new(
        record.path,
        record.size,
        timestamp(record.created_ts),
        timestamp(record.modified_ts),
        record.mime_type,
        record.thumbnail,
        record.duration,
    )?;
    Ok(file)
}

fn timestamp(epoch_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch_secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use galerie_model::MediaType;

    fn record(path: &str) -> RawFileRecord {
        RawFileRecord {
            path: path.to_string(),
            size: 2048,
            created_ts: 1_600_000_000,
            modified_ts: 1_600_000_100,
            mime_type: "image/jpeg".to_string(),
            thumbnail: None,
            duration: None,
        }
    }

    #[test]
    fn normalizes_timestamps_and_derived_type() {
        let file = normalize(record("/storage/dcim/img.jpg")).unwrap();
        assert_eq!(file.created_at.timestamp(), 1_600_000_000);
        assert_eq!(file.modified_at.timestamp(), 1_600_000_100);
        assert_eq!(file.media_type(), MediaType::Image);
    }

    #[test]
    fn malformed_records_are_dropped_not_fatal() {
        let files = normalize_records(vec![
            record("relative.jpg"),
            record("/storage/dcim/keep.jpg"),
        ]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "/storage/dcim/keep.jpg");
    }

    #[test]
    fn out_of_range_timestamps_default_to_epoch() {
        let mut raw = record("/storage/dcim/img.jpg");
        raw.created_ts = i64::MAX;
        let file = normalize(raw).unwrap();
        assert_eq!(file.created_at, DateTime::UNIX_EPOCH);
    }
}
