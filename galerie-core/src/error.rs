use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("model error: {0}")]
    Model(#[from] galerie_model::ModelError),

    #[error("media index unavailable: {0}")]
    Index(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
