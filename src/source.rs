//! Per-language translation sources.
//!
//! Each language is backed by one JSON file named after the uppercased
//! language code, e.g. `en` resolves to `<messages_root>/EN.json`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::{TranslateError, TranslateResult},
    value::{TranslationValue, json_type_name},
};

pub const SOURCE_EXTENSION: &str = "json";

/// Normalize a caller-supplied language code by ASCII-uppercasing it.
///
/// # Examples
///
/// ```
/// use langkey::source::normalize_language;
///
/// assert_eq!(normalize_language("en"), "EN");
/// assert_eq!(normalize_language("pt-br"), "PT-BR");
/// ```
pub fn normalize_language(language: &str) -> String {
    language.to_ascii_uppercase()
}

/// Whether a language code can name a source file.
///
/// Only ASCII alphanumerics, `-` and `_` are accepted, so a code can never
/// point outside the messages root.
pub fn is_valid_language_code(language: &str) -> bool {
    !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Path of the source backing `normalized` under `messages_root`.
pub fn source_path(messages_root: &Path, normalized: &str) -> PathBuf {
    messages_root.join(format!("{}.{}", normalized, SOURCE_EXTENSION))
}

/// A loaded translation table for one language.
///
/// Tables are read fresh for every lookup and never cached.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    language: String,
    path: PathBuf,
    entries: Map<String, Value>,
}

impl TranslationTable {
    /// Resolve and parse the table for `language`.
    pub fn load(messages_root: &Path, language: &str) -> TranslateResult<Self> {
        let normalized = normalize_language(language);
        let path = source_path(messages_root, &normalized);

        if !is_valid_language_code(&normalized) || !path.is_file() {
            debug!(language = %normalized, path = %path.display(), "no translation source");
            return Err(TranslateError::SourceNotFound {
                language: normalized,
                path,
            });
        }

        let content = fs::read(&path).map_err(|e| read_error(&normalized, &path, e))?;

        Self::parse(&normalized, path, content)
    }

    /// Parse table content already read from `path`.
    ///
    /// Content that is not valid UTF-8 is malformed JSON, not a read failure.
    pub fn parse(
        language: &str,
        path: PathBuf,
        content: impl AsRef<[u8]>,
    ) -> TranslateResult<Self> {
        let json: Value = match serde_json::from_slice(content.as_ref()) {
            Ok(json) => json,
            Err(e) => {
                return Err(TranslateError::InvalidSourceFormat {
                    path,
                    found: format!("malformed JSON ({})", e),
                });
            }
        };

        let entries = match json {
            Value::Object(entries) => entries,
            other => {
                return Err(TranslateError::InvalidSourceFormat {
                    path,
                    found: json_type_name(&other).to_string(),
                });
            }
        };

        debug!(
            language,
            path = %path.display(),
            keys = entries.len(),
            "loaded translation table"
        );

        Ok(Self {
            language: language.to_string(),
            path,
            entries,
        })
    }

    /// Normalized language code this table was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up `key`, failing with [`TranslateError::KeyNotFound`].
    pub fn get(&self, key: &str) -> TranslateResult<TranslationValue> {
        self.entries
            .get(key)
            .map(TranslationValue::from)
            .ok_or_else(|| TranslateError::KeyNotFound {
                key: key.to_string(),
                language: self.language.clone(),
                path: self.path.clone(),
            })
    }

    /// Keys and values in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TranslationValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), TranslationValue::from(value)))
    }
}

/// Map a failed read of an existing source to a lookup error.
fn read_error(language: &str, path: &Path, source: io::Error) -> TranslateError {
    match source.kind() {
        // Removed between the existence check and the read
        io::ErrorKind::NotFound => TranslateError::SourceNotFound {
            language: language.to_string(),
            path: path.to_path_buf(),
        },
        _ => TranslateError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// List the language codes available under `messages_root`, sorted.
///
/// Only files with a `.json` extension whose stem is a valid language code
/// are reported.
pub fn scan_languages(messages_root: &Path) -> io::Result<Vec<String>> {
    let mut languages = Vec::new();

    for entry in fs::read_dir(messages_root)? {
        let path = entry?.path();

        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            && is_valid_language_code(stem)
        {
            languages.push(stem.to_string());
        }
    }

    languages.sort();
    Ok(languages)
}
