use anyhow::{Context, Result};
use tracing::debug;

use super::super::{args::LanguagesCommand, exit_status::ExitStatus};
use super::CommandContext;

pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let root = ctx.translator.messages_root();

    let languages = ctx.translator.available_languages().with_context(|| {
        format!(
            "Messages directory '{}' could not be read.\n\
             Hint: Check your .langkeyrc.json 'messagesRoot' setting.",
            root.display()
        )
    })?;

    for language in &languages {
        println!("{}", language);
    }

    debug!(
        count = languages.len(),
        messages_root = %root.display(),
        "listed languages"
    );

    Ok(ExitStatus::Success)
}
