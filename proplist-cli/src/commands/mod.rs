//! Command handler modules for the CLI.

mod add;
mod edit;
mod remove;
mod reorder;
mod set_value;
mod settings;
mod show;

use crate::cli::{Commands, GlobalArgs};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(global: &GlobalArgs, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Show {
            id,
            playbook,
            format,
            filter,
        } => show::cmd_show(global, &id, playbook, format, filter.as_deref()),
        Commands::Add {
            incident,
            title,
            mandatory,
            options,
            multi,
        } => add::cmd_add(
            global,
            &incident,
            add::AddParams {
                title: &title,
                mandatory,
                options: &options,
                multi,
            },
        ),
        Commands::Edit {
            incident,
            index,
            title,
            mandatory,
        } => edit::cmd_edit(global, &incident, index, title.as_deref(), mandatory),
        Commands::Remove { incident, index } => remove::cmd_remove(global, &incident, index),
        Commands::Reorder { incident, from, to } => {
            reorder::cmd_reorder(global, &incident, from, to)
        }
        Commands::SetSelection {
            incident,
            property,
            ids,
        } => set_value::cmd_set_selection(global, &incident, &property, ids),
        Commands::SetFreetext {
            incident,
            property,
            value,
        } => set_value::cmd_set_freetext(global, &incident, &property, &value),
        Commands::Settings(subcmd) => settings::cmd_settings(global, subcmd),
    }
}
