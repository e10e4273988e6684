//! Payload representation for stored artifacts.

use serde::{Deserialize, Serialize};

/// The stored artifact itself, original or AI-transformed.
///
/// # Examples
///
/// ```
/// use vasari_core::Payload;
///
/// let text = Payload::Text("# notes".to_string());
/// let image = Payload::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(text.len(), 7);
/// assert_eq!(image.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payload {
    /// UTF-8 text content
    Text(String),
    /// Raw binary content
    Binary(Vec<u8>),
}

impl Payload {
    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        match self {
            Payload::Text(s) => s.len(),
            Payload::Binary(b) => b.len(),
        }
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the payload as raw bytes, regardless of variant.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(s) => s.as_bytes(),
            Payload::Binary(b) => b,
        }
    }
}
