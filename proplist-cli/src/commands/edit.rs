//! Edit property command.

use proplist_core::models::PropertyListError;
use proplist_core::sync::{CancellationToken, ListSync};

use crate::cli::GlobalArgs;
use crate::error::CliError;
use crate::util::{build_client, check_outcome, runtime};

/// Edit command handler
pub fn cmd_edit(
    global: &GlobalArgs,
    incident: &str,
    index: usize,
    title: Option<&str>,
    mandatory: Option<bool>,
) -> Result<(), CliError> {
    let client = build_client(global)?;
    let runtime = runtime()?;

    runtime.block_on(async {
        let mut engine = ListSync::load(client, incident).await?;

        let mut item = engine.list().items.get(index).cloned().ok_or(
            PropertyListError::IndexOutOfRange {
                index,
                len: engine.list().len(),
            },
        )?;
        if let Some(title) = title {
            item.title = title.to_owned();
        }
        if let Some(mandatory) = mandatory {
            item.is_mandatory = mandatory;
        }

        let token = CancellationToken::new();
        check_outcome(engine.edit_item(index, item, &token).await?)?;
        println!("Updated property at index {index}");
        Ok(())
    })
}
