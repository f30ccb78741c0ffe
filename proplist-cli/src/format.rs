//! Output rendering for property lists.

use std::fmt::Write as _;

use proplist_core::models::{PropertyDefinition, PropertyList, PropertyPayload, PropertyType};
use proplist_core::resolver;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Renders `list` in the requested format, keeping only properties that
/// match `filter` when one is given.
pub fn render(
    list: &PropertyList,
    format: OutputFormat,
    filter: Option<&str>,
) -> Result<String, CliError> {
    let mut shown = list.clone();
    if let Some(term) = filter {
        shown
            .items
            .retain(|property| resolver::property_matches(property, term));
    }
    match format {
        OutputFormat::Table => Ok(table(&shown)),
        OutputFormat::Json => serde_json::to_string_pretty(&shown)
            .map_err(|e| CliError::Io(std::io::Error::other(e))),
    }
}

/// The display value of a property: the text itself for freetext, the
/// resolved option values for selections.
fn display_value(property: &PropertyDefinition) -> String {
    match &property.payload {
        PropertyPayload::Freetext(text) => text.value.clone(),
        PropertyPayload::Selection(selection) => resolver::resolved_values(selection).join(", "),
    }
}

fn type_label(property: &PropertyDefinition) -> &'static str {
    match property.property_type() {
        PropertyType::Freetext => "freetext",
        PropertyType::Selection => "selection",
    }
}

fn table(list: &PropertyList) -> String {
    if list.is_empty() {
        return "No properties.".to_owned();
    }
    // Width in chars, not bytes, so non-ASCII titles stay aligned.
    let title_width = list
        .items
        .iter()
        .map(|item| item.title.chars().count())
        .chain(std::iter::once("TITLE".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<title_width$} {:<9} {:<9} VALUE",
        "IDX", "TITLE", "TYPE", "MANDATORY"
    );
    for (index, property) in list.items.iter().enumerate() {
        let mandatory = if property.is_mandatory { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "{index:<4} {:<title_width$} {:<9} {mandatory:<9} {}",
            property.title,
            type_label(property),
            display_value(property),
        );
    }
    out.pop();
    out
}
