//! Convenience re-exports for downstream crates.

pub use crate::album::Album;
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::item::GalleryItem;
pub use crate::media::MediaFile;
pub use crate::media_type::MediaType;
pub use crate::paths;
