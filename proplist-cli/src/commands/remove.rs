//! Remove property command.

use proplist_core::sync::{CancellationToken, ListSync};

use crate::cli::GlobalArgs;
use crate::error::CliError;
use crate::util::{build_client, check_outcome, runtime};

/// Remove command handler
pub fn cmd_remove(global: &GlobalArgs, incident: &str, index: usize) -> Result<(), CliError> {
    let client = build_client(global)?;
    let runtime = runtime()?;

    runtime.block_on(async {
        let mut engine = ListSync::load(client, incident).await?;
        let token = CancellationToken::new();
        check_outcome(engine.remove_item(index, &token).await?)?;
        println!(
            "Removed property at index {index} ({} remaining)",
            engine.list().len()
        );
        Ok(())
    })
}
