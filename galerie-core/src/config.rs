use crate::error::{GalleryError, Result};
use serde::Deserialize;

/// Engine configuration.
///
/// Paths are absolute, `/`-separated, and pre-normalized (no trailing
/// slash); validation rejects anything else up front so the tree
/// builder and query resolver never have to guard for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Topmost directory the tree builder synthesizes ancestors up to.
    pub storage_root: String,
    /// Default base path for tree-mode listings when a request
    /// supplies none.
    pub gallery_root: String,
    /// Display label for the storage-root album.
    pub root_label: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            storage_root: "/storage".to_string(),
            gallery_root: "/storage".to_string(),
            root_label: "Internal storage".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Parse a TOML document, falling back to defaults for absent
    /// keys, and validate the result.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: GalleryConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("storage_root", &self.storage_root),
            ("gallery_root", &self.gallery_root),
        ] {
            if !value.starts_with('/') {
                return Err(GalleryError::Config(format!(
                    "{key} must be an absolute path, got {value:?}"
                )));
            }
            if value.len() > 1 && value.ends_with('/') {
                return Err(GalleryError::Config(format!(
                    "{key} must not carry a trailing slash, got {value:?}"
                )));
            }
        }
        if !galerie_model::paths::is_within(&self.gallery_root, &self.storage_root) {
            return Err(GalleryError::Config(format!(
                "gallery_root {:?} must lie within storage_root {:?}",
                self.gallery_root, self.storage_root
            )));
        }
        Ok(())
    }
}
