//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `get`: Look up one key for a language, optionally applying a modifier
//! - `keys`: List the keys of one language's table
//! - `languages`: List the languages available under the messages root
//! - `init`: Initialize a langkey configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Get(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by lookup commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory holding the per-language JSON files (overrides config file)
    #[arg(long, env = "LANGKEY_MESSAGES_ROOT")]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Translation key to look up
    pub key: String,

    /// Language code, case-insensitive (defaults to the config's defaultLanguage)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Transform applied to the value: upper, lower or dump.
    /// Any other name returns the value unchanged.
    #[arg(short, long, default_value = "")]
    pub modifier: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Language code, case-insensitive (defaults to the config's defaultLanguage)
    #[arg(short, long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the translation of a key
    Get(GetCommand),
    /// List the keys of a language's translation table
    Keys(KeysCommand),
    /// List languages with a translation table
    Languages(LanguagesCommand),
    /// Initialize a new .langkeyrc.json configuration file
    Init,
}
