use std::fmt::Formatter;

use std::fmt::Display;

/// Media classification derived from a file's MIME type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// Still image media type
    Image = 0,
    /// Video media type
    Video = 1,
    /// Animated image (GIF) media type
    AnimatedImage = 2,
}

impl MediaType {
    /// Classify a MIME type string. `image/gif` takes precedence over
    /// the generic image bucket; anything under `video/` is a video;
    /// everything else is treated as a still image.
    pub fn from_mime(mime: &str) -> Self {
        if mime.eq_ignore_ascii_case("image/gif") {
            MediaType::AnimatedImage
        } else if mime
            .get(..6)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("video/"))
        {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "Image"),
            MediaType::Video => write!(f, "Video"),
            MediaType::AnimatedImage => write!(f, "GIF"),
        }
    }
}
