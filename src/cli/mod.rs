use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use report::print_error;

use commands::{get::get, init::init, keys::keys, languages::languages};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "LANGKEY_LOG";

/// Install the stderr log subscriber.
///
/// `LANGKEY_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for langkey itself with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "langkey=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose());

    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Init) => init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
