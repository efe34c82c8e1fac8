//! langkey - key-based translation lookup
//!
//! Given a language code and a translation key, langkey reads the language's
//! JSON table (`<messages_root>/<CODE>.json`, code uppercased), fetches the
//! value stored under the key and optionally transforms it with one of the
//! `upper`, `lower` or `dump` modifiers.
//!
//! ```no_run
//! let text = langkey::translate("./lang", "greeting", "en", "")?;
//! # Ok::<(), langkey::TranslateError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `error`: Lookup error types
//! - `modifier`: Post-processing transforms
//! - `source`: Language normalization and translation table loading
//! - `translator`: The lookup operation
//! - `value`: Stored value representation and renderings

pub mod cli;
pub mod config;
pub mod error;
pub mod modifier;
pub mod source;
pub mod translator;
pub mod value;

pub use error::{TranslateError, TranslateResult};
pub use modifier::Modifier;
pub use source::TranslationTable;
pub use translator::{Translator, translate};
pub use value::TranslationValue;
