use anyhow::Result;

use super::super::{args::GetCommand, exit_status::ExitStatus, report::print_error};
use super::CommandContext;

pub fn get(cmd: GetCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let language = ctx.language(cmd.lang.as_deref());

    match ctx
        .translator
        .translate(&cmd.key, language, cmd.modifier.as_str())
    {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            print_error(&err);
            Ok(ExitStatus::Failure)
        }
    }
}
