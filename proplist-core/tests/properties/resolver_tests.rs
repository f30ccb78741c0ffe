//! Property-based tests for selection resolution
//!
//! Resolution must be total: any selected set against any option list
//! resolves without error, dangling ids vanish silently, and the output
//! order always follows the selected set.

use proptest::prelude::*;
use proplist_core::models::{SelectedIds, SelectionItem, SelectionList};
use proplist_core::resolver::{matches_term, resolve, resolved_values};

/// Strategy for comma-free option ids.
fn arb_id() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

/// Strategy for an option list with unique ids.
fn arb_selection_list() -> impl Strategy<Value = SelectionList> {
    proptest::collection::btree_set(arb_id(), 0..8).prop_map(|ids| {
        let items = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| SelectionItem::with_id(id, format!("value-{i}")).unwrap())
            .collect();
        SelectionList::new(items, true).unwrap()
    })
}

/// Strategy for an arbitrary (possibly dangling) selected set.
fn arb_selected() -> impl Strategy<Value = SelectedIds> {
    proptest::collection::vec(arb_id(), 0..8).prop_map(SelectedIds::from_iter)
}

proptest! {
    /// Resolution never fails; output length is bounded by the selection.
    #[test]
    fn resolve_is_total(list in arb_selection_list(), selected in arb_selected()) {
        let resolved = resolve(&list, &selected);
        prop_assert!(resolved.len() <= selected.len());
        prop_assert!(resolved.len() <= list.items.len());
    }

    /// Every resolved item comes from the option list and its id is in the
    /// selected set.
    #[test]
    fn resolved_items_are_members(list in arb_selection_list(), selected in arb_selected()) {
        for item in resolve(&list, &selected) {
            prop_assert!(selected.contains(&item.id));
            prop_assert!(list.item_by_id(&item.id).is_some());
        }
    }

    /// Output order follows the selected set, not the option list.
    #[test]
    fn resolution_order_follows_selection(list in arb_selection_list(), selected in arb_selected()) {
        let resolved_ids: Vec<_> = resolve(&list, &selected)
            .into_iter()
            .map(|item| item.id.as_str())
            .collect();
        let expected: Vec<_> = selected
            .iter()
            .filter(|id| list.item_by_id(id).is_some())
            .collect();
        prop_assert_eq!(resolved_ids, expected);
    }

    /// Ids the option list does not know simply disappear.
    #[test]
    fn dangling_ids_are_dropped(list in arb_selection_list(), suffix in "[A-Z]{1,4}") {
        // Uppercase ids can never collide with the lowercase generator.
        let selected = SelectedIds::single(format!("missing-{suffix}"));
        prop_assert!(resolve(&list, &selected).is_empty());
    }

    /// An empty selection always resolves to nothing.
    #[test]
    fn empty_selection_resolves_empty(mut list in arb_selection_list()) {
        list.selected = SelectedIds::new();
        prop_assert!(resolved_values(&list).is_empty());
    }

    /// Term matching never panics and is case-insensitive.
    #[test]
    fn matching_is_case_insensitive(
        mut list in arb_selection_list(),
        selected in arb_selected(),
        term in "[a-zA-Z0-9 ]{0,12}",
    ) {
        list.selected = selected;
        prop_assert_eq!(
            matches_term(&list, &term),
            matches_term(&list, &term.to_uppercase())
        );
    }

    /// A matched term is always a substring of some resolved value.
    #[test]
    fn matches_require_a_resolved_value(
        mut list in arb_selection_list(),
        selected in arb_selected(),
        term in "[a-z0-9-]{1,10}",
    ) {
        list.selected = selected;
        if matches_term(&list, &term) {
            let hit = resolved_values(&list)
                .iter()
                .any(|value| value.to_lowercase().contains(&term));
            prop_assert!(hit);
        }
    }
}
