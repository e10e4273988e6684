//! Named seekable byte sources.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// A byte source with an associated name, as handed over by the
/// presentation layer for an upload.
///
/// Wraps any `Read + Seek` reader. The name is what classification works
/// from; the reader is consumed downstream when the payload is stored.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use vasari_core::ContentSource;
///
/// let source = ContentSource::new("Photo.PNG", Cursor::new(vec![1, 2, 3]));
/// assert_eq!(source.extension().as_deref(), Some(".png"));
/// ```
#[derive(Debug)]
pub struct ContentSource<R> {
    name: Option<String>,
    reader: R,
}

impl<R> ContentSource<R> {
    /// Wrap a reader under the given file name.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: Some(name.into()),
            reader,
        }
    }

    /// Wrap a reader that carries no name. Classification will reject it.
    pub fn unnamed(reader: R) -> Self {
        Self { name: None, reader }
    }

    /// The file name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The lowercased extension including the leading dot, if the name
    /// carries one.
    pub fn extension(&self) -> Option<String> {
        let ext = Path::new(self.name.as_deref()?).extension()?.to_str()?;
        Some(format!(".{}", ext.to_ascii_lowercase()))
    }

    /// Consume the source, returning the inner reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Read for ContentSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R: Seek> Seek for ContentSource<R> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.reader.seek(pos)
    }
}
