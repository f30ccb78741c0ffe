//! The remote store contract.
//!
//! One trait method per externally visible mutation, mirroring the plugin's
//! REST surface. The engine runs against this trait so tests can substitute
//! an in-memory double for the HTTP client.

use async_trait::async_trait;

use super::error::SyncResult;
use crate::models::list::PropertyList;
use crate::models::property::PropertyDefinition;
use crate::models::selection::SelectedIds;

/// Remote persistence for property lists.
///
/// Implementations must apply the same splice-out/splice-in reorder
/// semantics as [`PropertyList::reorder`], or client and server order will
/// diverge.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Loads the property list embedded in an incident.
    ///
    /// An incident without properties yields an empty, well-formed list,
    /// never an error.
    async fn incident_list(&self, incident_id: &str) -> SyncResult<PropertyList>;

    /// Loads the property list embedded in a playbook.
    async fn playbook_list(&self, playbook_id: &str) -> SyncResult<PropertyList>;

    /// Creates `item` at the end of the incident's list.
    ///
    /// Returns the created item carrying the canonical server-assigned id.
    async fn add_item(
        &self,
        incident_id: &str,
        item: &PropertyDefinition,
    ) -> SyncResult<PropertyDefinition>;

    /// Replaces the item at `index` wholesale. Last write wins per field.
    async fn update_item(
        &self,
        incident_id: &str,
        index: usize,
        item: &PropertyDefinition,
    ) -> SyncResult<()>;

    /// Deletes the item at `index`.
    async fn remove_item(&self, incident_id: &str, index: usize) -> SyncResult<()>;

    /// Moves the item at `from` to position `to`.
    async fn reorder_item(&self, incident_id: &str, from: usize, to: usize) -> SyncResult<()>;

    /// Overwrites the selected id set of a selection property.
    ///
    /// The entire set is replaced, never merged incrementally.
    async fn set_selection_value(
        &self,
        incident_id: &str,
        property_id: &str,
        selected: &SelectedIds,
    ) -> SyncResult<()>;

    /// Overwrites the value of a freetext property.
    async fn set_freetext_value(
        &self,
        incident_id: &str,
        property_id: &str,
        value: &str,
    ) -> SyncResult<()>;
}
