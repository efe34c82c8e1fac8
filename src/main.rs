use std::process::ExitCode;

use clap::Parser;
use langkey::cli::{Arguments, ExitStatus, print_error};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match langkey::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitStatus::Error.into()
        }
    }
}
