use anyhow::Result;
use tracing::debug;

use super::super::{
    args::KeysCommand,
    exit_status::ExitStatus,
    report::{print_error, print_keys},
};
use super::CommandContext;

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let language = ctx.language(cmd.lang.as_deref());

    let table = match ctx.translator.load_table(language) {
        Ok(table) => table,
        Err(err) => {
            print_error(&err);
            return Ok(ExitStatus::Failure);
        }
    };

    debug!(keys = table.len(), path = %table.path().display(), "listing keys");

    let rows: Vec<_> = table
        .iter()
        .map(|(key, value)| (key.to_string(), value.type_name()))
        .collect();
    print_keys(&rows);

    Ok(ExitStatus::Success)
}
