//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// `proplist` command-line interface for incident properties
#[derive(Parser)]
#[command(name = "proplist-cli")]
#[command(author, version, about = "Incident property list command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection arguments shared by every command.
#[derive(Args)]
pub struct GlobalArgs {
    /// Path to the settings file
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Plugin API root, overriding the settings file
    #[arg(long, global = true, env = "PROPLIST_API_ROOT")]
    pub api_root: Option<String>,

    /// Bearer token, overriding the settings file
    #[arg(long, global = true, env = "PROPLIST_TOKEN")]
    pub token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the property list of an incident or playbook
    #[command(about = "Show the property list of an incident or playbook")]
    Show {
        /// Incident id (or playbook id with --playbook)
        id: String,

        /// Treat the id as a playbook id
        #[arg(long)]
        playbook: bool,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,

        /// Only show properties whose title or value contains this term
        #[arg(long)]
        filter: Option<String>,
    },

    /// Add a property to an incident
    #[command(about = "Add a freetext or selection property to an incident")]
    Add {
        /// Incident id
        incident: String,

        /// Title for the new property
        #[arg(short, long)]
        title: String,

        /// Mark the property as mandatory
        #[arg(long)]
        mandatory: bool,

        /// Selection option (repeat for multiple); omit for a freetext
        /// property
        #[arg(short, long = "option", value_name = "VALUE")]
        options: Vec<String>,

        /// Allow choosing more than one option at once
        #[arg(long, requires = "options")]
        multi: bool,
    },

    /// Edit the property at an index
    #[command(about = "Edit the title or mandatory flag of a property")]
    Edit {
        /// Incident id
        incident: String,

        /// Zero-based position of the property
        index: usize,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New mandatory flag
        #[arg(long, value_name = "BOOL")]
        mandatory: Option<bool>,
    },

    /// Remove the property at an index
    #[command(about = "Remove a property from an incident")]
    Remove {
        /// Incident id
        incident: String,

        /// Zero-based position of the property
        index: usize,
    },

    /// Move a property to a new position
    #[command(about = "Move a property to a new position in the list")]
    Reorder {
        /// Incident id
        incident: String,

        /// Current zero-based position
        from: usize,

        /// Target zero-based position
        to: usize,
    },

    /// Replace the chosen options of a selection property
    #[command(about = "Replace the chosen options of a selection property")]
    SetSelection {
        /// Incident id
        incident: String,

        /// Property id
        property: String,

        /// Option ids to select, in order; none clears the selection
        #[arg(value_name = "OPTION_ID")]
        ids: Vec<String>,
    },

    /// Set the value of a freetext property
    #[command(about = "Set the value of a freetext property")]
    SetFreetext {
        /// Incident id
        incident: String,

        /// Property id
        property: String,

        /// New text value
        value: String,
    },

    /// Manage sync client settings
    #[command(subcommand)]
    Settings(SettingsCommands),
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the effective settings
    Show,

    /// Update and save settings
    Set {
        /// Plugin API root to save
        #[arg(long)]
        api_root: Option<String>,

        /// Bearer token to save
        #[arg(long)]
        token: Option<String>,
    },
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON
    Json,
}
