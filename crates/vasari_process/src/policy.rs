//! Upload policy configuration.
//!
//! The policy is loaded from TOML with the usual precedence:
//! - Bundled defaults (include_str! from vasari.toml)
//! - User overrides (~/.config/vasari/vasari.toml, then ./vasari.toml)
//!
//! Validation happens at load time: extensions are normalized and an
//! extension claimed by two content types is rejected eagerly, so lookup
//! never observes ambiguity at runtime.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::debug;
use vasari_core::ContentType;
use vasari_error::{ConfigError, VasariError, VasariResult};

/// Raw policy file shape, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
struct PolicyFile {
    /// Maximum accepted upload size in bytes
    max_file_size: u64,
    /// Content type tag -> accepted extensions
    #[serde(default)]
    extensions: BTreeMap<String, Vec<String>>,
}

/// Validated upload constraints: a size limit and an unambiguous
/// extension map.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vasari_core::ContentType;
/// use vasari_process::UploadPolicy;
///
/// let extensions = BTreeMap::from([
///     ("text".to_string(), vec![".txt".to_string()]),
///     ("image".to_string(), vec![".png".to_string()]),
/// ]);
/// let policy = UploadPolicy::new(1024, extensions).unwrap();
/// assert_eq!(policy.lookup(".PNG"), Some(ContentType::Image));
/// assert_eq!(policy.lookup(".exe"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    max_file_size: u64,
    by_extension: HashMap<String, ContentType>,
}

impl UploadPolicy {
    /// Build a policy from a raw extension table, validating eagerly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a key is not a known content type, an
    /// extension entry is empty, or two content types claim the same
    /// extension.
    pub fn new(
        max_file_size: u64,
        extensions: BTreeMap<String, Vec<String>>,
    ) -> VasariResult<Self> {
        let mut by_extension = HashMap::new();

        for (tag, entries) in &extensions {
            let content_type = ContentType::from_str(tag).map_err(|_| {
                let known: Vec<&str> = ContentType::iter().map(|t| t.as_str()).collect();
                ConfigError::new(format!(
                    "Unknown content type '{}' (expected one of: {})",
                    tag,
                    known.join(", ")
                ))
            })?;

            for entry in entries {
                let extension = normalize_extension(entry)?;
                if let Some(previous) = by_extension.insert(extension.clone(), content_type) {
                    return Err(ConfigError::new(format!(
                        "Extension '{}' is claimed by both '{}' and '{}'",
                        extension, previous, content_type
                    ))
                    .into());
                }
            }
        }

        Ok(Self {
            max_file_size,
            by_extension,
        })
    }

    /// Load the policy with precedence: current dir > home dir > bundled
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or the merged
    /// policy fails validation.
    pub fn load() -> VasariResult<Self> {
        debug!("Loading upload policy with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_POLICY: &str = include_str!("../../../vasari.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_POLICY, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vasari/vasari.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("vasari").required(false));

        let file: PolicyFile = builder
            .build()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        Self::new(file.max_file_size, file.extensions)
    }

    /// Load the policy from a specific TOML file, ignoring the usual
    /// precedence chain.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or fails
    /// validation.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> VasariResult<Self> {
        let file: PolicyFile = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to read policy from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to parse policy from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;

        Self::new(file.max_file_size, file.extensions)
    }

    /// Maximum accepted upload size in bytes.
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Look up the content type claiming an extension. Case-insensitive;
    /// accepts the extension with or without the leading dot.
    pub fn lookup(&self, extension: &str) -> Option<ContentType> {
        let normalized = normalize_extension(extension).ok()?;
        self.by_extension.get(&normalized).copied()
    }

    /// Extensions accepted for a content type, sorted.
    pub fn extensions_for(&self, content_type: ContentType) -> Vec<String> {
        let mut extensions: Vec<String> = self
            .by_extension
            .iter()
            .filter(|(_, t)| **t == content_type)
            .map(|(ext, _)| ext.clone())
            .collect();
        extensions.sort();
        extensions
    }
}

/// Lowercase, trim, and ensure a leading dot.
fn normalize_extension(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(ConfigError::new(format!(
            "Invalid extension entry: '{}'",
            raw
        )));
    }
    Ok(format!(".{}", trimmed.to_ascii_lowercase()))
}
