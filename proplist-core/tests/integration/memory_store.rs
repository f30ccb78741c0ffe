//! In-memory [`PropertyStore`] double for sync engine tests.
//!
//! Keeps its own server-side copy of the list so tests can compare local
//! and remote state after each mutation, and supports injecting commit
//! failures and mid-request cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use proplist_core::models::{PropertyDefinition, PropertyList, SelectedIds};
use proplist_core::sync::{CancellationToken, PropertyStore, SyncError, SyncResult};

#[derive(Default)]
struct Inner {
    list: Mutex<PropertyList>,
    fail_status: Mutex<Option<u16>>,
    calls: AtomicUsize,
    next_id: AtomicUsize,
    cancel_during_request: Mutex<Option<CancellationToken>>,
}

/// Cloneable handle to a shared in-memory store.
#[derive(Clone, Default)]
pub struct MemoryStore(Arc<Inner>);

impl MemoryStore {
    pub fn new(list: PropertyList) -> Self {
        let store = Self::default();
        *store.0.list.lock().unwrap() = list;
        store
    }

    /// Makes every subsequent request fail with the given HTTP status.
    pub fn fail_with(&self, status: u16) {
        *self.0.fail_status.lock().unwrap() = Some(status);
    }

    /// Lets subsequent requests succeed again.
    pub fn clear_failures(&self) {
        *self.0.fail_status.lock().unwrap() = None;
    }

    /// Cancels `token` while the next request is in flight, before the
    /// response is handed back to the engine.
    pub fn cancel_during_request(&self, token: CancellationToken) {
        *self.0.cancel_during_request.lock().unwrap() = Some(token);
    }

    /// Number of requests the store has seen, including failed ones.
    pub fn calls(&self) -> usize {
        self.0.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the server-side list.
    pub fn server_list(&self) -> PropertyList {
        self.0.list.lock().unwrap().clone()
    }

    fn begin(&self) -> SyncResult<()> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = self.0.cancel_during_request.lock().unwrap().take() {
            token.cancel();
        }
        if let Some(status) = *self.0.fail_status.lock().unwrap() {
            return Err(SyncError::Api {
                status,
                message: "injected failure".into(),
                url: "memory://store".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn incident_list(&self, _incident_id: &str) -> SyncResult<PropertyList> {
        self.begin()?;
        Ok(self.server_list())
    }

    async fn playbook_list(&self, _playbook_id: &str) -> SyncResult<PropertyList> {
        self.begin()?;
        Ok(self.server_list())
    }

    async fn add_item(
        &self,
        _incident_id: &str,
        item: &PropertyDefinition,
    ) -> SyncResult<PropertyDefinition> {
        self.begin()?;
        let n = self.0.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut created = item.clone();
        created.id = format!("srv-{n}");
        let mut list = self.0.list.lock().unwrap();
        *list = list.add(created.clone()).unwrap();
        Ok(created)
    }

    async fn update_item(
        &self,
        _incident_id: &str,
        index: usize,
        item: &PropertyDefinition,
    ) -> SyncResult<()> {
        self.begin()?;
        let mut list = self.0.list.lock().unwrap();
        *list = list.edit(index, item.clone()).unwrap();
        Ok(())
    }

    async fn remove_item(&self, _incident_id: &str, index: usize) -> SyncResult<()> {
        self.begin()?;
        let mut list = self.0.list.lock().unwrap();
        *list = list.remove(index).unwrap();
        Ok(())
    }

    async fn reorder_item(&self, _incident_id: &str, from: usize, to: usize) -> SyncResult<()> {
        self.begin()?;
        let mut list = self.0.list.lock().unwrap();
        if let Some(moved) = list.reorder(from, to).unwrap().into_moved() {
            *list = moved;
        }
        Ok(())
    }

    async fn set_selection_value(
        &self,
        _incident_id: &str,
        property_id: &str,
        selected: &SelectedIds,
    ) -> SyncResult<()> {
        self.begin()?;
        let mut list = self.0.list.lock().unwrap();
        *list = list.set_selected(property_id, selected.clone()).unwrap();
        Ok(())
    }

    async fn set_freetext_value(
        &self,
        _incident_id: &str,
        property_id: &str,
        value: &str,
    ) -> SyncResult<()> {
        self.begin()?;
        let mut list = self.0.list.lock().unwrap();
        *list = list.set_freetext(property_id, value).unwrap();
        Ok(())
    }
}
