//! Content workflows over the classifier, transformer gateway, and store.

use std::io::{Read, Seek};
use tracing::{info, instrument, warn};
use vasari_core::{ContentRecord, ContentSource, ContentType, NewContent, Page, Payload};
use vasari_error::{
    ClassifyError, ClassifyErrorKind, TransformError, TransformErrorKind, VasariResult,
};
use vasari_interface::{ContentStore, ContentTransformer};
use vasari_process::{ContentClassifier, ImageNormalizer};

/// Outcome of an upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The file was validated and stored.
    Stored {
        /// Assigned record id
        id: i64,
        /// Detected content type
        content_type: ContentType,
    },
    /// The file failed size validation; nothing was stored.
    ///
    /// Validation is advisory and fails closed: an unprobeable or
    /// unclassifiable file is rejected the same way as an oversized one.
    Rejected {
        /// The configured size limit in bytes
        limit: u64,
    },
}

/// A stored image description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Described {
    /// Assigned record id of the stored image
    pub id: i64,
    /// Generated caption
    pub caption: String,
}

/// The workflow layer the presentation front end drives: upload,
/// transform, explore.
///
/// Holds its collaborators explicitly. Construct once at startup and pass
/// by reference to whichever workflow needs it; there is no process-wide
/// session state.
pub struct ContentHub<S, T> {
    classifier: ContentClassifier,
    normalizer: ImageNormalizer,
    store: S,
    transformer: T,
}

impl<S, T> ContentHub<S, T>
where
    S: ContentStore,
    T: ContentTransformer,
{
    /// Assemble a hub from its collaborators.
    pub fn new(
        classifier: ContentClassifier,
        normalizer: ImageNormalizer,
        store: S,
        transformer: T,
    ) -> Self {
        Self {
            classifier,
            normalizer,
            store,
            transformer,
        }
    }

    /// Validate, classify, and persist an uploaded file.
    ///
    /// Text payloads are decoded as UTF-8, images pass through the
    /// normalizer, audio is stored verbatim.
    ///
    /// # Errors
    ///
    /// Classification, decoding, and storage failures propagate as typed
    /// errors. An oversized or unvalidatable file is not an error: it
    /// comes back as [`UploadOutcome::Rejected`] with nothing stored.
    #[instrument(skip(self, source), fields(name = source.name().unwrap_or("<unnamed>")))]
    pub async fn upload<R: Read + Seek + Send>(
        &self,
        mut source: ContentSource<R>,
    ) -> VasariResult<UploadOutcome> {
        if !self.classifier.validate_file_size(&mut source) {
            let limit = self.classifier.policy().max_file_size();
            warn!(limit, "upload rejected by size validation");
            return Ok(UploadOutcome::Rejected { limit });
        }

        let content_type = self.classifier.detect_content_type(&source)?;
        let name = source.name().unwrap_or_default().to_string();

        let mut bytes = Vec::new();
        source
            .read_to_end(&mut bytes)
            .map_err(|e| ClassifyError::new(ClassifyErrorKind::UnreadableSource(e.to_string())))?;

        let (payload, annotation) = match content_type {
            ContentType::Text => {
                let text = String::from_utf8(bytes).map_err(|e| {
                    ClassifyError::new(ClassifyErrorKind::MalformedText(e.to_string()))
                })?;
                (Payload::Text(text), "Uploaded Text")
            }
            ContentType::Image => (
                Payload::Binary(self.normalizer.normalize(&bytes)?),
                "Uploaded Image",
            ),
            ContentType::Audio => (Payload::Binary(bytes), "Uploaded Audio"),
        };

        let id = self
            .store
            .save_content(NewContent::new(
                content_type,
                name,
                payload,
                Some(annotation.to_string()),
            ))
            .await?;

        info!(id, %content_type, "upload stored");
        Ok(UploadOutcome::Stored { id, content_type })
    }

    /// Generate an image from a text prompt and persist it with the
    /// prompt as metadata.
    ///
    /// # Errors
    ///
    /// `TransformErrorKind::EmptyPrompt` for a blank prompt; gateway and
    /// storage failures propagate untouched. Nothing is persisted unless
    /// generation succeeds.
    #[instrument(skip(self))]
    pub async fn generate_image(&self, prompt: &str) -> VasariResult<i64> {
        if prompt.trim().is_empty() {
            return Err(TransformError::new(TransformErrorKind::EmptyPrompt).into());
        }

        let image = self.transformer.text_to_image(prompt).await?;
        let image = self.normalizer.normalize(&image)?;

        let id = self
            .store
            .save_content(NewContent::new(
                ContentType::Image,
                "text-to-image".to_string(),
                Payload::Binary(image),
                Some(prompt.to_string()),
            ))
            .await?;

        info!(
            id,
            provider = self.transformer.provider_name(),
            "generated image stored"
        );
        Ok(id)
    }

    /// Describe an image and persist the normalized image with its caption
    /// as metadata.
    ///
    /// # Errors
    ///
    /// `ClassifyErrorKind::MalformedImage` for undecodable input; gateway
    /// and storage failures propagate untouched.
    #[instrument(skip(self, image), fields(len = image.len()))]
    pub async fn describe_image(&self, name: &str, image: &[u8]) -> VasariResult<Described> {
        let normalized = self.normalizer.normalize(image)?;
        let caption = self.transformer.image_to_text(&normalized).await?;

        let id = self
            .store
            .save_content(NewContent::new(
                ContentType::Image,
                name.to_string(),
                Payload::Binary(normalized),
                Some(caption.clone()),
            ))
            .await?;

        info!(
            id,
            provider = self.transformer.provider_name(),
            "described image stored"
        );
        Ok(Described { id, caption })
    }

    /// Browse stored content, optionally one page at a time.
    pub async fn explore(&self, page: Option<Page>) -> VasariResult<Vec<ContentRecord>> {
        self.store.get_content(page).await
    }
}
