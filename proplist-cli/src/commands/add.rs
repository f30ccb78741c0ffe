//! Add property command.

use proplist_core::models::{PropertyDefinition, SelectionList};
use proplist_core::sync::{CancellationToken, ListSync};

use crate::cli::GlobalArgs;
use crate::error::CliError;
use crate::util::{build_client, check_outcome, runtime};

/// Parameters for the add command
pub struct AddParams<'a> {
    pub title: &'a str,
    pub mandatory: bool,
    pub options: &'a [String],
    pub multi: bool,
}

/// Add command handler
pub fn cmd_add(global: &GlobalArgs, incident: &str, params: AddParams) -> Result<(), CliError> {
    let mut item = if params.options.is_empty() {
        PropertyDefinition::new_freetext(params.title)
    } else {
        let mut selection = SelectionList {
            is_multiselect: params.multi,
            ..SelectionList::default()
        };
        for value in params.options {
            selection = selection.push_item(value);
        }
        PropertyDefinition::new_selection(params.title, selection)
    };
    item.is_mandatory = params.mandatory;

    let client = build_client(global)?;
    let runtime = runtime()?;

    runtime.block_on(async {
        let mut engine = ListSync::load(client, incident).await?;
        let token = CancellationToken::new();
        check_outcome(engine.add_item(item, &token).await?)?;

        if let Some(added) = engine.list().items.last() {
            println!(
                "Added property '{}' at index {} (id {})",
                added.title,
                engine.list().len() - 1,
                added.id
            );
        }
        Ok(())
    })
}
