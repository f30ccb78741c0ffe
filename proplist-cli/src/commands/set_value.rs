//! Set property value commands.

use proplist_core::models::SelectedIds;
use proplist_core::resolver;
use proplist_core::sync::{CancellationToken, ListSync};

use crate::cli::GlobalArgs;
use crate::error::CliError;
use crate::util::{build_client, check_outcome, runtime};

/// Set selection value command handler
pub fn cmd_set_selection(
    global: &GlobalArgs,
    incident: &str,
    property: &str,
    ids: Vec<String>,
) -> Result<(), CliError> {
    let selected: SelectedIds = ids.into_iter().collect();
    let client = build_client(global)?;
    let runtime = runtime()?;

    runtime.block_on(async {
        let mut engine = ListSync::load(client, incident).await?;
        let token = CancellationToken::new();
        check_outcome(engine.set_selection(property, selected, &token).await?)?;

        if let Some(selection) = engine
            .list()
            .item_by_id(property)
            .and_then(|item| item.as_selection())
        {
            let values = resolver::resolved_values(selection);
            if values.is_empty() {
                println!("Cleared selection of property {property}");
            } else {
                println!("Selected: {}", values.join(", "));
            }
        }
        Ok(())
    })
}

/// Set freetext value command handler
pub fn cmd_set_freetext(
    global: &GlobalArgs,
    incident: &str,
    property: &str,
    value: &str,
) -> Result<(), CliError> {
    let client = build_client(global)?;
    let runtime = runtime()?;

    runtime.block_on(async {
        let mut engine = ListSync::load(client, incident).await?;
        let token = CancellationToken::new();
        check_outcome(engine.set_freetext(property, value, &token).await?)?;
        println!("Set value of property {property}");
        Ok(())
    })
}
