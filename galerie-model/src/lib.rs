//! Core data model definitions shared across Galerie crates.
#![allow(missing_docs)]

pub mod album;
pub mod error;
pub mod item;
pub mod media;
pub mod media_type;
pub mod paths;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use album::Album;
pub use error::{ModelError, Result as ModelResult};
pub use item::GalleryItem;
pub use media::MediaFile;
pub use media_type::MediaType;
