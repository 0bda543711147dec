//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use crate::triggers::TriggerVocabulary;
use crate::{CoreError, CoreResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    vocabulary: Arc<TriggerVocabulary>,
}

impl CoreConfig {
    pub fn new(vocabulary: TriggerVocabulary) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
        }
    }

    pub fn vocabulary(&self) -> &TriggerVocabulary {
        &self.vocabulary
    }
}

/// Resolve the trigger vocabulary without reading environment variables.
///
/// If `override_file` is provided it must hold a YAML sequence of strings. Otherwise the built-in
/// vocabulary is used.
///
/// # Errors
///
/// Returns [`CoreError::FileRead`] or [`CoreError::YamlDeserialization`] if the override cannot
/// be loaded, or [`CoreError::InvalidInput`] if it contains no usable term.
pub fn resolve_vocabulary(override_file: Option<PathBuf>) -> CoreResult<TriggerVocabulary> {
    let Some(path) = override_file else {
        return Ok(TriggerVocabulary::default());
    };

    let text = std::fs::read_to_string(&path).map_err(CoreError::FileRead)?;
    let terms: Vec<String> = serde_yaml::from_str(&text).map_err(CoreError::YamlDeserialization)?;
    let vocabulary = TriggerVocabulary::new(terms)?;
    tracing::info!(
        "loaded {} trigger terms from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}
