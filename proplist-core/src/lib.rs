//! `proplist` core library
//!
//! Property list model and synchronization engine for the incident plugin:
//! an ordered, polymorphic list of custom properties (freetext and
//! single/multi-select) attached to playbooks and running incidents, kept
//! consistent with the server copy through optimistic mutation and network
//! reconciliation.
//!
//! # Crate Structure
//!
//! - [`models`] - property definitions, option sets, the ordered list and
//!   its pure mutation operations, staged title edits, owner documents
//! - [`resolver`] - selection resolution and search matching
//! - [`sync`] - the remote store contract, REST client, and the two-phase
//!   optimistic engine
//! - [`settings`] - sync client settings persistence
//!
//! Rendering, transport authentication, and host-platform state are owned
//! by the embedding application; this crate is the engine underneath them.

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod models;
pub mod resolver;
pub mod settings;
pub mod sync;

pub use models::{
    BadgeStyle, Incident, Playbook, PropertyDefinition, PropertyList, PropertyListError,
    PropertyListResult, PropertyPayload, PropertyType, Reorder, SelectedIds, SelectionError,
    SelectionItem, SelectionList, SelectionResult, TextValue, TitleDraft,
};
pub use resolver::{matches_term, property_matches, resolve, resolved_values};
pub use settings::{DEFAULT_API_ROOT, SettingsError, SettingsResult, SyncSettings};
pub use sync::{
    CancellationToken, ListSync, PropertyStore, RestClient, SyncError, SyncOutcome, SyncResult,
};
