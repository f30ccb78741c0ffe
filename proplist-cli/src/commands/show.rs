//! Show property list command.

use proplist_core::sync::PropertyStore;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::error::CliError;
use crate::format;
use crate::util::{build_client, runtime};

/// Show command handler
pub fn cmd_show(
    global: &GlobalArgs,
    id: &str,
    playbook: bool,
    format: OutputFormat,
    filter: Option<&str>,
) -> Result<(), CliError> {
    let client = build_client(global)?;
    let runtime = runtime()?;

    let list = runtime.block_on(async {
        if playbook {
            client.playbook_list(id).await
        } else {
            client.incident_list(id).await
        }
    })?;

    println!("{}", format::render(&list, format, filter)?);
    Ok(())
}
