//! Selection resolution: mapping selected ids to display values.
//!
//! Resolution is total. Any selected set - empty, malformed on the wire, or
//! holding ids that no longer exist in the option list - resolves to a
//! (possibly empty) sequence of options without error. Dangling ids are
//! expected: another session may have removed an option while this one held
//! a stale selection.

use crate::models::property::{PropertyDefinition, PropertyPayload};
use crate::models::selection::{SelectedIds, SelectionItem, SelectionList};

/// Resolves `selected` against the option list.
///
/// Single- and multi-select are handled uniformly: each id is looked up by
/// exact match and unresolvable ids are silently dropped. The output order
/// follows `selected`, not the order of `list.items`.
#[must_use]
pub fn resolve<'a>(list: &'a SelectionList, selected: &SelectedIds) -> Vec<&'a SelectionItem> {
    selected
        .iter()
        .filter_map(|id| list.item_by_id(id))
        .collect()
}

/// Resolves the list's own selected set to display values.
#[must_use]
pub fn resolved_values(list: &SelectionList) -> Vec<&str> {
    resolve(list, &list.selected)
        .into_iter()
        .map(|item| item.value.as_str())
        .collect()
}

/// Returns true if any currently resolved display value of `list` contains
/// `term` case-insensitively.
///
/// Unresolvable ids never contribute to a match. An empty term matches any
/// property that has at least one resolved value.
#[must_use]
pub fn matches_term(list: &SelectionList, term: &str) -> bool {
    let term = term.to_lowercase();
    resolved_values(list)
        .iter()
        .any(|value| value.to_lowercase().contains(&term))
}

/// Search predicate over a whole property definition.
///
/// Freetext properties match on their text value; selection properties
/// match on their resolved display values. Matching is case-insensitive
/// substring containment, the same rule the list search box applies.
#[must_use]
pub fn property_matches(property: &PropertyDefinition, term: &str) -> bool {
    let term_lower = term.to_lowercase();
    if property.title.to_lowercase().contains(&term_lower) {
        return true;
    }
    match &property.payload {
        PropertyPayload::Freetext(text) => text.value.to_lowercase().contains(&term_lower),
        PropertyPayload::Selection(list) => matches_term(list, term),
    }
}
