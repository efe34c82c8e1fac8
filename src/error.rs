//! Error taxonomy for translation lookups.

use std::path::PathBuf;

use thiserror::Error;

use crate::modifier::Modifier;

/// Failure of a single `translate` call.
///
/// Every variant carries enough context (language, key, source path) to
/// diagnose the problem without re-running the lookup.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No translation table exists for the normalized language.
    #[error("Translation source for [{language}] not found at [{}]", path.display())]
    SourceNotFound { language: String, path: PathBuf },

    /// The source exists but could not be read.
    #[error("Translation source [{}] could not be read", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source was loaded but is not a key/value mapping.
    #[error("Translation source [{}] must contain an object. [{found}] given", path.display())]
    InvalidSourceFormat { path: PathBuf, found: String },

    /// The table does not contain the requested key.
    #[error("Translation key [{key}] not found in language [{language}] at [{}]", path.display())]
    KeyNotFound {
        key: String,
        language: String,
        path: PathBuf,
    },

    /// A text-only modifier was applied to a value that is not a string.
    #[error("Modifier [{modifier}] cannot be applied to key [{key}] of type [{type_name}]")]
    UnsupportedModifier {
        modifier: Modifier,
        key: String,
        type_name: &'static str,
    },
}

pub type TranslateResult<T> = Result<T, TranslateError>;
