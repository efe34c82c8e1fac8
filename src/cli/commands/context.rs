use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{config::load_config, translator::Translator};

/// Settings shared by the lookup commands.
///
/// Built from the config file found above the working directory, with
/// command line flags taking precedence.
pub struct CommandContext {
    pub translator: Translator,
    pub default_language: String,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the current directory")?;
        let config_result = load_config(&cwd)?;

        if !config_result.from_file {
            debug!("no config file found, using default configuration");
        }

        // Flags and default settings stay relative to the working directory
        let messages_root: PathBuf = match &args.messages_root {
            Some(root) => root.clone(),
            None if config_result.from_file => config_result
                .config
                .messages_root_in(&config_result.base_dir),
            None => PathBuf::from(&config_result.config.messages_root),
        };
        debug!(messages_root = %messages_root.display(), "resolved messages root");

        Ok(Self {
            translator: Translator::new(messages_root),
            default_language: config_result.config.default_language,
        })
    }

    /// The requested language, or the configured default.
    pub fn language<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_language)
    }
}
