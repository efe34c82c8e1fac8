//! Key lookup and modifier application.
//!
//! A [`Translator`] only remembers where the translation sources live. Every
//! call resolves and parses the language's source again, so edits to a
//! source are visible on the next lookup.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::{TranslateError, TranslateResult},
    modifier::Modifier,
    source::{TranslationTable, scan_languages},
    value::TranslationValue,
};

#[derive(Debug, Clone)]
pub struct Translator {
    messages_root: PathBuf,
}

impl Translator {
    pub fn new(messages_root: impl Into<PathBuf>) -> Self {
        Self {
            messages_root: messages_root.into(),
        }
    }

    pub fn messages_root(&self) -> &Path {
        &self.messages_root
    }

    /// Translate `key` for `language`, applying `modifier` to the result.
    ///
    /// `language` is case-insensitive. Any modifier name other than
    /// `upper`, `lower` or `dump` returns the stored value unchanged.
    ///
    /// # Errors
    ///
    /// - [`TranslateError::SourceNotFound`] if no source backs the language
    /// - [`TranslateError::InvalidSourceFormat`] if the source is not a JSON object
    /// - [`TranslateError::KeyNotFound`] if the table lacks `key`
    /// - [`TranslateError::UnsupportedModifier`] for `upper`/`lower` on a non-string
    ///
    /// # Example
    ///
    /// ```no_run
    /// use langkey::Translator;
    ///
    /// let translator = Translator::new("./lang");
    /// let greeting = translator.translate("greeting", "en", "upper")?;
    /// # Ok::<(), langkey::TranslateError>(())
    /// ```
    pub fn translate(
        &self,
        key: &str,
        language: &str,
        modifier: impl Into<Modifier>,
    ) -> TranslateResult<String> {
        let modifier = modifier.into();
        let table = self.load_table(language)?;
        let value = table.get(key)?;

        debug!(
            key,
            language = table.language(),
            modifier = %modifier,
            value_type = value.type_name(),
            "resolved translation"
        );

        apply_modifier(key, &value, modifier)
    }

    /// Resolve and parse the table for `language` without looking up a key.
    pub fn load_table(&self, language: &str) -> TranslateResult<TranslationTable> {
        TranslationTable::load(&self.messages_root, language)
    }

    /// Sorted language codes backed by a source under the messages root.
    pub fn available_languages(&self) -> io::Result<Vec<String>> {
        scan_languages(&self.messages_root)
    }
}

/// Apply `modifier` to the value stored under `key`.
pub fn apply_modifier(
    key: &str,
    value: &TranslationValue,
    modifier: Modifier,
) -> TranslateResult<String> {
    match modifier {
        Modifier::Upper => Ok(require_text(key, value, modifier)?.to_uppercase()),
        Modifier::Lower => Ok(require_text(key, value, modifier)?.to_lowercase()),
        Modifier::Dump => Ok(value.dump()),
        Modifier::None => Ok(value.to_text()),
    }
}

fn require_text<'a>(
    key: &str,
    value: &'a TranslationValue,
    modifier: Modifier,
) -> TranslateResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| TranslateError::UnsupportedModifier {
            modifier,
            key: key.to_string(),
            type_name: value.type_name(),
        })
}

/// One-shot lookup against `messages_root`.
///
/// Equivalent to `Translator::new(messages_root).translate(key, language, modifier)`.
pub fn translate(
    messages_root: impl AsRef<Path>,
    key: &str,
    language: &str,
    modifier: impl Into<Modifier>,
) -> TranslateResult<String> {
    Translator::new(messages_root.as_ref()).translate(key, language, modifier)
}
