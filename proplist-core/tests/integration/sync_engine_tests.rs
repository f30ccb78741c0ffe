//! End-to-end tests for the two-phase sync engine against the in-memory
//! store double.

use proplist_core::models::{
    PropertyDefinition, PropertyList, PropertyListError, SelectedIds, SelectionItem, SelectionList,
};
use proplist_core::sync::{CancellationToken, ListSync};

use super::memory_store::MemoryStore;

fn stage_options() -> SelectionList {
    let items = vec![
        SelectionItem::with_id("1", "Triage").unwrap(),
        SelectionItem::with_id("2", "Mitigated").unwrap(),
        SelectionItem::with_id("3", "Resolved").unwrap(),
    ];
    SelectionList::new(items, true).unwrap()
}

/// A freetext "Region" (p1) followed by a multi-select "Stage" (p2).
fn sample_list() -> PropertyList {
    let mut region = PropertyDefinition::new_freetext("Region");
    region.id = "p1".into();
    let mut stage = PropertyDefinition::new_selection("Stage", stage_options());
    stage.id = "p2".into();
    let list = PropertyList::new("Properties");
    let list = list.add(region).unwrap();
    list.add(stage).unwrap()
}

async fn engine_with(list: PropertyList) -> (ListSync<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new(list);
    let engine = ListSync::load(store.clone(), "inc-1")
        .await
        .expect("load from memory store");
    (engine, store)
}

#[tokio::test]
async fn load_fetches_the_server_copy() {
    let (engine, _store) = engine_with(sample_list()).await;
    assert_eq!(engine.incident_id(), "inc-1");
    assert_eq!(engine.list(), &sample_list());
}

#[tokio::test]
async fn add_merges_the_server_assigned_id() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();

    let outcome = engine
        .add_item(PropertyDefinition::new_freetext("Owner"), &token)
        .await
        .unwrap();

    assert!(outcome.is_reconciled());
    let added = engine.list().items.last().unwrap();
    assert_eq!(added.id, "srv-1");
    assert!(added.is_persisted());
    assert_eq!(engine.list(), &store.server_list());
}

#[tokio::test]
async fn blank_title_is_rejected_before_anything_is_sent() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    let calls_before = store.calls();

    let err = engine
        .add_item(PropertyDefinition::new_freetext("   "), &token)
        .await
        .unwrap_err();

    assert!(matches!(err, PropertyListError::BlankTitle));
    assert_eq!(store.calls(), calls_before);
    assert_eq!(engine.list().len(), 2);
}

#[tokio::test]
async fn failed_commit_keeps_the_optimistic_mutation() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    store.fail_with(500);

    let outcome = engine.remove_item(0, &token).await.unwrap();

    let error = outcome.error().expect("commit should have failed");
    assert_eq!(error.status(), Some(500));
    // Local copy keeps the removal; server copy never saw it.
    assert_eq!(engine.list().len(), 1);
    assert_eq!(store.server_list().len(), 2);
}

#[tokio::test]
async fn refresh_is_the_manual_rollback() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    store.fail_with(502);
    let outcome = engine.remove_item(0, &token).await.unwrap();
    assert!(outcome.error().is_some());

    store.clear_failures();
    engine.refresh().await.unwrap();
    assert_eq!(engine.list(), &store.server_list());
    assert_eq!(engine.list().len(), 2);
}

#[tokio::test]
async fn edit_updates_both_copies() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();

    let mut renamed = engine.list().items[0].clone();
    renamed.title = "Affected Region".into();
    let outcome = engine.edit_item(0, renamed, &token).await.unwrap();

    assert!(outcome.is_reconciled());
    assert_eq!(engine.list().items[0].title, "Affected Region");
    assert_eq!(engine.list(), &store.server_list());
}

#[tokio::test]
async fn edit_out_of_range_is_a_local_error() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    let calls_before = store.calls();

    let err = engine
        .edit_item(5, PropertyDefinition::new_freetext("X"), &token)
        .await
        .unwrap_err();

    assert!(matches!(err, PropertyListError::IndexOutOfRange { .. }));
    assert_eq!(store.calls(), calls_before);
}

#[tokio::test]
async fn reorder_moves_both_copies() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();

    let outcome = engine.reorder(0, 1, &token).await.unwrap();

    assert!(outcome.is_reconciled());
    assert_eq!(engine.list().items[1].id, "p1");
    assert_eq!(engine.list(), &store.server_list());
}

#[tokio::test]
async fn reorder_to_same_index_sends_nothing() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    let calls_before = store.calls();

    let outcome = engine.reorder(1, 1, &token).await.unwrap();

    assert!(outcome.is_reconciled());
    assert_eq!(store.calls(), calls_before);
    assert_eq!(engine.list(), &sample_list());
}

#[tokio::test]
async fn set_selection_overwrites_the_whole_set() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();

    let outcome = engine
        .set_selection("p2", SelectedIds::from_wire("3,1"), &token)
        .await
        .unwrap();

    assert!(outcome.is_reconciled());
    let selection = engine.list().item_by_id("p2").unwrap().as_selection().unwrap();
    assert_eq!(selection.selected.iter().collect::<Vec<_>>(), vec!["3", "1"]);
    assert_eq!(engine.list(), &store.server_list());
}

#[tokio::test]
async fn set_selection_on_freetext_property_is_a_local_error() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    let calls_before = store.calls();

    let err = engine
        .set_selection("p1", SelectedIds::single("1"), &token)
        .await
        .unwrap_err();

    assert!(matches!(err, PropertyListError::WrongPayload(_, _)));
    assert_eq!(store.calls(), calls_before);
}

#[tokio::test]
async fn set_freetext_updates_both_copies() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();

    let outcome = engine.set_freetext("p1", "EMEA", &token).await.unwrap();

    assert!(outcome.is_reconciled());
    let text = engine.list().item_by_id("p1").unwrap().as_freetext().unwrap();
    assert_eq!(text.value, "EMEA");
    assert_eq!(engine.list(), &store.server_list());
}

#[tokio::test]
async fn pre_cancelled_token_applies_nothing() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    token.cancel();
    let calls_before = store.calls();

    let outcome = engine.remove_item(0, &token).await.unwrap();

    assert!(outcome.is_cancelled());
    assert_eq!(engine.list().len(), 2);
    assert_eq!(store.calls(), calls_before);
}

#[tokio::test]
async fn cancellation_in_flight_discards_the_response() {
    let (mut engine, store) = engine_with(sample_list()).await;
    let token = CancellationToken::new();
    store.cancel_during_request(token.clone());

    let outcome = engine
        .add_item(PropertyDefinition::new_freetext("Owner"), &token)
        .await
        .unwrap();

    // The optimistic append stays, but the server-assigned id from the
    // discarded response is never merged.
    assert!(outcome.is_cancelled());
    let added = engine.list().items.last().unwrap();
    assert_eq!(added.title, "Owner");
    assert!(!added.is_persisted());
    // The server did create the item; a later refresh reconciles.
    assert_eq!(store.server_list().len(), 3);
}
