//! The two-phase sync engine.
//!
//! Every mutation is applied to the locally held list first (optimistic),
//! then committed to the remote store, and the outcome is reported as
//! [`SyncOutcome`]. A failed commit does **not** roll the local copy back;
//! the caller decides whether to re-fetch or re-render from the error.
//!
//! There is no locking and no server-side compare-and-swap: if two
//! mutations race, whichever response is applied last wins silently. The
//! scheduling model is a single-threaded event loop, so the list value
//! itself is never mutated concurrently.

use tracing::{debug, warn};

use super::cancel::CancellationToken;
use super::error::SyncError;
use super::store::PropertyStore;
use crate::models::list::{PropertyList, PropertyListResult, Reorder};
use crate::models::property::PropertyDefinition;
use crate::models::selection::SelectedIds;

/// Result of one two-phase mutation.
#[derive(Debug)]
pub enum SyncOutcome {
    /// Local and remote copies agree on this mutation.
    Reconciled,
    /// The remote commit was rejected; the local optimistic mutation is
    /// still in place.
    Failed {
        /// The error the server or transport produced.
        error: SyncError,
    },
    /// The caller cancelled; the response (if any) was discarded.
    Cancelled,
}

impl SyncOutcome {
    /// Returns true if the mutation reached the server.
    #[must_use]
    pub const fn is_reconciled(&self) -> bool {
        matches!(self, Self::Reconciled)
    }

    /// Returns true if the caller cancelled the mutation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The commit error, if the mutation failed.
    #[must_use]
    pub const fn error(&self) -> Option<&SyncError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Keeps a client-held property list consistent with the server copy.
///
/// The engine owns the local list; callers render from [`ListSync::list`]
/// and funnel every mutation through the methods here so each one is
/// paired with exactly one outbound request.
pub struct ListSync<S> {
    store: S,
    incident_id: String,
    list: PropertyList,
}

impl<S: PropertyStore> ListSync<S> {
    /// Wraps an already-loaded list.
    #[must_use]
    pub fn new(store: S, incident_id: impl Into<String>, list: PropertyList) -> Self {
        Self {
            store,
            incident_id: incident_id.into(),
            list,
        }
    }

    /// Loads the incident's list from the store and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] if the load fails. An incident without
    /// properties is not a failure; it yields an empty list.
    pub async fn load(store: S, incident_id: impl Into<String>) -> Result<Self, SyncError> {
        let incident_id = incident_id.into();
        let list = store.incident_list(&incident_id).await?;
        Ok(Self {
            store,
            incident_id,
            list,
        })
    }

    /// The current locally held list.
    #[must_use]
    pub const fn list(&self) -> &PropertyList {
        &self.list
    }

    /// The incident this engine syncs against.
    #[must_use]
    pub fn incident_id(&self) -> &str {
        &self.incident_id
    }

    /// Consumes the engine, returning the list.
    #[must_use]
    pub fn into_list(self) -> PropertyList {
        self.list
    }

    /// Discards local state and re-fetches the server copy.
    ///
    /// This is the manual rollback path after a [`SyncOutcome::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] if the fetch fails; the local list is kept.
    pub async fn refresh(&mut self) -> Result<(), SyncError> {
        self.list = self.store.incident_list(&self.incident_id).await?;
        Ok(())
    }

    /// Appends `item` locally, creates it remotely, and merges the
    /// server-assigned id into the local copy.
    ///
    /// The merge happens before the outcome is returned, so any further
    /// edit of the new item references its canonical id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::models::PropertyListError`] for a blank title;
    /// this is a local validation failure and nothing is sent.
    pub async fn add_item(
        &mut self,
        item: PropertyDefinition,
        token: &CancellationToken,
    ) -> PropertyListResult<SyncOutcome> {
        if token.is_cancelled() {
            return Ok(SyncOutcome::Cancelled);
        }
        self.list = self.list.add(item)?;
        let added_index = self.list.len() - 1;
        let result = self
            .store
            .add_item(&self.incident_id, &self.list.items[added_index])
            .await;
        if token.is_cancelled() {
            return Ok(SyncOutcome::Cancelled);
        }
        Ok(match result {
            Ok(created) => {
                if created.id.is_empty() {
                    warn!(incident_id = %self.incident_id, "server returned no id for created property");
                } else {
                    self.list.items[added_index].id = created.id;
                }
                SyncOutcome::Reconciled
            }
            Err(error) => failed("add", error),
        })
    }

    /// Replaces the item at `index` locally and remotely.
    ///
    /// # Errors
    ///
    /// Returns [`crate::models::PropertyListError`] for an out-of-range
    /// index or blank title; nothing is sent.
    pub async fn edit_item(
        &mut self,
        index: usize,
        item: PropertyDefinition,
        token: &CancellationToken,
    ) -> PropertyListResult<SyncOutcome> {
        if token.is_cancelled() {
            return Ok(SyncOutcome::Cancelled);
        }
        self.list = self.list.edit(index, item)?;
        let result = self
            .store
            .update_item(&self.incident_id, index, &self.list.items[index])
            .await;
        Ok(self.finish("edit", result, token))
    }

    /// Removes the item at `index` locally first, then remotely, so the
    /// caller never renders a stale item during network latency.
    ///
    /// # Errors
    ///
    /// Returns [`crate::models::PropertyListError`] for an out-of-range
    /// index; nothing is sent.
    pub async fn remove_item(
        &mut self,
        index: usize,
        token: &CancellationToken,
    ) -> PropertyListResult<SyncOutcome> {
        if token.is_cancelled() {
            return Ok(SyncOutcome::Cancelled);
        }
        self.list = self.list.remove(index)?;
        let result = self.store.remove_item(&self.incident_id, index).await;
        Ok(self.finish("remove", result, token))
    }

    /// Moves the item at `from` to `to` locally and remotely.
    ///
    /// `from == to` short-circuits: no new list value is produced and no
    /// request goes out.
    ///
    /// # Errors
    ///
    /// Returns [`crate::models::PropertyListError`] if either index is out
    /// of range; nothing is sent.
    pub async fn reorder(
        &mut self,
        from: usize,
        to: usize,
        token: &CancellationToken,
    ) -> PropertyListResult<SyncOutcome> {
        if token.is_cancelled() {
            return Ok(SyncOutcome::Cancelled);
        }
        match self.list.reorder(from, to)? {
            Reorder::Unchanged => return Ok(SyncOutcome::Reconciled),
            Reorder::Moved(next) => self.list = next,
        }
        let result = self.store.reorder_item(&self.incident_id, from, to).await;
        Ok(self.finish("reorder", result, token))
    }

    /// Overwrites the selected id set of the selection property with id
    /// `property_id`, locally and remotely.
    ///
    /// # Errors
    ///
    /// Returns [`crate::models::PropertyListError`] if the id is unknown
    /// or the property is not selection-typed; nothing is sent.
    pub async fn set_selection(
        &mut self,
        property_id: &str,
        selected: SelectedIds,
        token: &CancellationToken,
    ) -> PropertyListResult<SyncOutcome> {
        if token.is_cancelled() {
            return Ok(SyncOutcome::Cancelled);
        }
        self.list = self.list.set_selected(property_id, selected.clone())?;
        let result = self
            .store
            .set_selection_value(&self.incident_id, property_id, &selected)
            .await;
        Ok(self.finish("set-selection", result, token))
    }

    /// Overwrites the value of the freetext property with id
    /// `property_id`, locally and remotely.
    ///
    /// # Errors
    ///
    /// Returns [`crate::models::PropertyListError`] if the id is unknown
    /// or the property is not freetext-typed; nothing is sent.
    pub async fn set_freetext(
        &mut self,
        property_id: &str,
        value: impl Into<String> + Send,
        token: &CancellationToken,
    ) -> PropertyListResult<SyncOutcome> {
        if token.is_cancelled() {
            return Ok(SyncOutcome::Cancelled);
        }
        let value = value.into();
        self.list = self.list.set_freetext(property_id, value.clone())?;
        let result = self
            .store
            .set_freetext_value(&self.incident_id, property_id, &value)
            .await;
        Ok(self.finish("set-freetext", result, token))
    }

    /// Folds a remote commit result into an outcome, discarding responses
    /// that arrive after cancellation.
    fn finish(
        &self,
        op: &'static str,
        result: Result<(), SyncError>,
        token: &CancellationToken,
    ) -> SyncOutcome {
        if token.is_cancelled() {
            return SyncOutcome::Cancelled;
        }
        match result {
            Ok(()) => {
                debug!(incident_id = %self.incident_id, op, "mutation reconciled");
                SyncOutcome::Reconciled
            }
            Err(error) => failed(op, error),
        }
    }
}

fn failed(op: &'static str, error: SyncError) -> SyncOutcome {
    warn!(op, %error, "remote commit failed; local copy keeps the optimistic mutation");
    SyncOutcome::Failed { error }
}
