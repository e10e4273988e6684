//! Content type enumeration.

/// Classification tag for stored content.
///
/// The tag set is closed; the extension map in the upload policy decides
/// which file extensions resolve to which tag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Plain text content (TXT, Markdown, etc.)
    #[display("text")]
    Text,
    /// Image content (PNG, JPEG, etc.)
    #[display("image")]
    Image,
    /// Audio content (MP3, WAV, etc.)
    #[display("audio")]
    Audio,
}

impl ContentType {
    /// Convert to string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Audio => "audio",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentType::Text),
            "image" => Ok(ContentType::Image),
            "audio" => Ok(ContentType::Audio),
            _ => Err(format!("Unknown content type: {}", s)),
        }
    }
}
