//! Reorder property command.

use proplist_core::sync::{CancellationToken, ListSync};

use crate::cli::GlobalArgs;
use crate::error::CliError;
use crate::util::{build_client, check_outcome, runtime};

/// Reorder command handler
pub fn cmd_reorder(
    global: &GlobalArgs,
    incident: &str,
    from: usize,
    to: usize,
) -> Result<(), CliError> {
    let client = build_client(global)?;
    let runtime = runtime()?;

    runtime.block_on(async {
        let mut engine = ListSync::load(client, incident).await?;
        let token = CancellationToken::new();
        check_outcome(engine.reorder(from, to, &token).await?)?;
        if from == to {
            println!("Property already at position {to}");
        } else {
            println!("Moved property from position {from} to {to}");
        }
        Ok(())
    })
}
