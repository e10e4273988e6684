//! Content classification and size validation.

use crate::UploadPolicy;
use std::io::{Seek, SeekFrom};
use tracing::{debug, instrument};
use vasari_core::{ContentSource, ContentType};
use vasari_error::{ClassifyError, ClassifyErrorKind, VasariResult};

/// Maps uploaded files to a content-type tag and validates size
/// constraints.
///
/// Construct once from a validated [`UploadPolicy`] and pass by reference
/// to whichever workflow needs it.
#[derive(Debug, Clone, derive_new::new)]
pub struct ContentClassifier {
    policy: UploadPolicy,
}

impl ContentClassifier {
    /// The policy this classifier enforces.
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Detect the content type of a source from its file extension.
    ///
    /// The extension is lowercased and looked up in the policy's
    /// extension map.
    ///
    /// # Errors
    ///
    /// `ClassifyErrorKind::MissingName` if the source has no name or the
    /// name carries no extension; `ClassifyErrorKind::UnsupportedExtension`
    /// if no configured content type claims it.
    pub fn detect_content_type<R>(&self, source: &ContentSource<R>) -> VasariResult<ContentType> {
        let Some(extension) = source.extension() else {
            return Err(ClassifyError::new(ClassifyErrorKind::MissingName).into());
        };

        match self.policy.lookup(&extension) {
            Some(content_type) => Ok(content_type),
            None => {
                Err(ClassifyError::new(ClassifyErrorKind::UnsupportedExtension(extension)).into())
            }
        }
    }

    /// Validate that a source fits the configured size limit and carries a
    /// classifiable type.
    ///
    /// The length is probed by seeking to the end; the handle is read again
    /// downstream, so the stream position is left exactly as found. Any I/O
    /// error during probing is absorbed and reported as a plain `false` --
    /// validation fails closed rather than propagating.
    #[instrument(skip(self, source), fields(name = source.name().unwrap_or("<unnamed>")))]
    pub fn validate_file_size<R: Seek>(&self, source: &mut ContentSource<R>) -> bool {
        let size = match probe_len(source) {
            Ok(size) => size,
            Err(e) => {
                debug!(error = %e, "size probe failed, treating file as invalid");
                return false;
            }
        };

        if size > self.policy.max_file_size() {
            debug!(
                size,
                limit = self.policy.max_file_size(),
                "file exceeds size limit"
            );
            return false;
        }

        match self.detect_content_type(source) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "file has no classifiable type");
                false
            }
        }
    }
}

/// Total length of the stream, restoring the position found on entry.
fn probe_len<R: Seek>(source: &mut ContentSource<R>) -> std::io::Result<u64> {
    let start = source.stream_position()?;
    let end = source.seek(SeekFrom::End(0))?;
    source.seek(SeekFrom::Start(start))?;
    Ok(end)
}
