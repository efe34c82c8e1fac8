mod context;
pub mod get;
pub mod init;
pub mod keys;
pub mod languages;

pub use context::CommandContext;
